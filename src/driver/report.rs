//! Summary of what a single tick dispatched.

use crate::core::StateId;

/// Which callbacks ran during one tick.
///
/// An entry is recorded even when the state's slot was never registered,
/// since the machine still moves through the phase with no-op callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// State whose `on_start` ran
    pub started: Option<StateId>,
    /// State whose `on_update` ran
    pub updated: Option<StateId>,
    /// State whose deadline elapsed; its `on_timed_event` ran if it has one
    pub timed_event: Option<StateId>,
    /// State that was left when a transition was dispatched
    pub exited: Option<StateId>,
}

impl TickReport {
    /// Whether this tick dispatched a transition into a new state.
    pub fn transitioned(&self) -> bool {
        self.exited.is_some()
    }
}
