//! Read-only, serializable view of a machine for diagnostics.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point-in-time view of a machine, suitable for debug overlays and logs.
///
/// Snapshots carry no callbacks and cannot be turned back into a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot<T> {
    /// Identifier of the machine the snapshot was taken from
    pub machine: Uuid,

    /// Capacity of the state table
    pub max_states: usize,

    pub current_state: StateId,

    pub previous_state: StateId,

    /// Pending timed-event deadline
    pub deadline: Option<T>,

    /// Time observed by the most recent tick
    pub last_tick: Option<T>,

    /// Ids with a registered descriptor, ascending
    pub registered: Vec<StateId>,
}
