//! The mutable view of a machine handed to state callbacks.

use super::state::StateId;
use super::time::Timestamp;

/// Current/previous state bookkeeping and the timed-event deadline.
///
/// Callbacks receive `&mut StateContext` during a tick. Writes made through
/// it (a new current state, a freshly armed deadline) are visible to the
/// rest of the same tick. The host reaches the same fields through the
/// forwarding methods on `StateMachine`.
#[derive(Clone, Debug, PartialEq)]
pub struct StateContext<T> {
    pub(crate) current: StateId,
    pub(crate) previous: StateId,
    pub(crate) deadline: Option<T>,
    pub(crate) now: Option<T>,
}

impl<T: Timestamp> StateContext<T> {
    pub(crate) fn new(initial: StateId) -> Self {
        Self {
            current: initial,
            previous: StateId::INVALID,
            deadline: None,
            now: None,
        }
    }

    /// The active state id.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Request a transition.
    ///
    /// The assignment is unconditional and unchecked. The new state's
    /// `on_start` runs later in the current tick, or on the next tick when
    /// requested from outside a tick.
    pub fn set_current_state(&mut self, id: impl Into<StateId>) {
        self.current = id.into();
    }

    /// The state that was active before the current residency began.
    ///
    /// `StateId::INVALID` until the first tick.
    pub fn previous_state(&self) -> StateId {
        self.previous
    }

    /// Arm the timed event to fire `delta` after the current tick's time.
    ///
    /// Overwrites any pending deadline. A zero or negative delta fires on
    /// the next timed-event check.
    pub fn arm(&mut self, delta: T::Delta) {
        let Some(now) = self.now else {
            tracing::warn!(
                state = %self.current,
                ?delta,
                "timed event armed before any tick observed a time; ignored"
            );
            return;
        };

        self.deadline = now.after(delta);
        if self.deadline.is_none() {
            tracing::warn!(
                state = %self.current,
                ?now,
                ?delta,
                "timed event deadline is not representable; timer left disarmed"
            );
        }
    }

    /// Arm the timed event at an absolute time.
    pub fn arm_at(&mut self, deadline: T) {
        self.deadline = Some(deadline);
    }

    /// Absolute time at which the pending timed event fires, if armed.
    pub fn deadline(&self) -> Option<T> {
        self.deadline
    }

    /// Time passed to the current (or most recent) tick.
    pub fn now(&self) -> Option<T> {
        self.now
    }

    /// Whether the machine has entered its first state.
    pub fn has_started(&self) -> bool {
        !self.previous.is_invalid()
    }

    /// Whether the machine is resident in a state with no pending request.
    pub fn is_steady(&self) -> bool {
        self.previous == self.current
    }

    pub(crate) fn deadline_elapsed(&self, now: T) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub(crate) fn clear_deadline(&mut self) {
        self.deadline = None;
    }
}
