//! Errors reported by the machine.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while registering states or ticking.
///
/// None of these are fatal. A failed registration leaves the table
/// untouched, and a failed tick leaves the machine frozen until the host
/// points `current_state` at a valid id.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State id {id} is outside the state table (0..{max_states})")]
    RegistrationOutOfRange { id: StateId, max_states: usize },

    #[error("Illegal current state {id} (state table holds 0..{max_states})")]
    InvalidCurrentState { id: StateId, max_states: usize },
}
