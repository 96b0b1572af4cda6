//! Build errors for machine construction.

use crate::core::StateId;
use thiserror::Error;

/// A single problem found while validating a machine configuration.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("State table capacity must be greater than zero")]
    ZeroCapacity,

    #[error(
        "State table capacity {max_states} exceeds the {} addressable state ids",
        StateId::CAPACITY_LIMIT
    )]
    CapacityTooLarge { max_states: usize },

    #[error("Initial state {id} is outside the state table (0..{max_states})")]
    InitialOutOfRange { id: StateId, max_states: usize },

    #[error("State {id} is outside the state table (0..{max_states})")]
    StateOutOfRange { id: StateId, max_states: usize },

    #[error("State {id} is registered more than once")]
    DuplicateState { id: StateId },
}

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Machine configuration rejected: {}", describe(.0))]
    Rejected(Vec<ConfigViolation>),

    #[error("Machine configuration could not be parsed: {0}")]
    Config(String),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
