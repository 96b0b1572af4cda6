//! The tick loop around the core types.
//!
//! # Key Concepts
//!
//! - **StateMachine**: owns the state table and dispatches callbacks on `tick`
//! - **TickReport**: which callbacks a tick ran
//! - **MachineSnapshot**: serializable read-only view for diagnostics
//!
//! The driver never reads a clock and never spawns work. The host decides
//! when a frame happens and what time it is.

mod error;
mod machine;
mod report;
mod snapshot;

pub use error::MachineError;
pub use machine::StateMachine;
pub use report::TickReport;
pub use snapshot::MachineSnapshot;
