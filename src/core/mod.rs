//! Core state machine types.
//!
//! This module contains the data the machine is built from:
//! - State ids and the typed `State` trait
//! - Per-state callback descriptors
//! - The `Timestamp` abstraction over host clocks
//! - The context callbacks use to request transitions and arm timers
//!
//! Nothing in this module reads a clock or dispatches callbacks on its own;
//! that is the driver's job.

mod context;
mod descriptor;
mod state;
mod time;

pub use context::StateContext;
pub use descriptor::{StateCallback, StateDescriptor};
pub use state::{State, StateId};
pub use time::Timestamp;
