//! Serializable machine configuration.

use crate::builder::error::BuildError;
use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Shape of a machine: where it starts and how many states it can hold.
///
/// Callbacks are code and are registered on the builder; only the shape is
/// configuration.
///
/// # Example
///
/// ```rust
/// use tickstate::builder::MachineConfig;
/// use tickstate::core::StateId;
///
/// let config = MachineConfig::from_json(r#"{ "initial_state": 0, "max_states": 3 }"#).unwrap();
/// assert_eq!(config.initial_state, StateId(0));
/// assert_eq!(config.max_states, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial_state: StateId,
    pub max_states: usize,
}

impl MachineConfig {
    pub fn new(initial_state: impl Into<StateId>, max_states: usize) -> Self {
        Self {
            initial_state: initial_state.into(),
            max_states,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string(self).map_err(|e| BuildError::Config(e.to_string()))
    }
}
