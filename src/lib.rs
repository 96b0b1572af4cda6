//! Tickstate: a tick-driven finite state machine
//!
//! Tickstate keeps a small table of states indexed by integer id. Each state
//! has a start callback, an update callback and an optional one-shot timed
//! event. The host calls `tick` once per frame with the current time; the
//! machine decides which callback runs and detects transitions requested by
//! the callbacks themselves.
//!
//! # Core Concepts
//!
//! - **StateId / State**: integer ids, optionally generated from an enum
//! - **StateDescriptor**: the start/update/timed-event callbacks of a state
//! - **StateContext**: what callbacks use to request transitions and arm timers
//! - **StateMachine**: the table plus the tick algorithm
//!
//! # Example
//!
//! ```rust
//! use tickstate::core::{StateContext, StateDescriptor};
//! use tickstate::driver::StateMachine;
//! use tickstate::state_enum;
//!
//! state_enum! {
//!     enum Guard {
//!         Patrol,
//!         Alert,
//!     }
//! }
//!
//! struct Sentry {
//!     sees_intruder: bool,
//!     shouts: u32,
//! }
//!
//! let mut machine = StateMachine::for_states(Guard::Patrol);
//! machine.register(
//!     Guard::Patrol,
//!     StateDescriptor::new(
//!         |_: &mut Sentry, _: &mut StateContext<f64>| {},
//!         |sentry: &mut Sentry, ctx: &mut StateContext<f64>| {
//!             if sentry.sees_intruder {
//!                 ctx.set_current_state(Guard::Alert);
//!             }
//!         },
//!     ),
//! );
//! machine.register(
//!     Guard::Alert,
//!     StateDescriptor::new(
//!         |sentry: &mut Sentry, ctx: &mut StateContext<f64>| {
//!             sentry.shouts += 1;
//!             ctx.arm(5.0);
//!         },
//!         |_: &mut Sentry, _: &mut StateContext<f64>| {},
//!     )
//!     .on_timed_event(|_: &mut Sentry, ctx: &mut StateContext<f64>| {
//!         ctx.set_current_state(Guard::Patrol);
//!     }),
//! );
//!
//! let mut sentry = Sentry { sees_intruder: false, shouts: 0 };
//! machine.tick(&mut sentry, 0.0).unwrap();
//!
//! sentry.sees_intruder = true;
//! machine.tick(&mut sentry, 0.1).unwrap();
//! assert_eq!(machine.current_as::<Guard>(), Some(Guard::Alert));
//! assert_eq!(sentry.shouts, 1);
//!
//! sentry.sees_intruder = false;
//! machine.tick(&mut sentry, 6.0).unwrap();
//! assert_eq!(machine.current_as::<Guard>(), Some(Guard::Patrol));
//! ```

pub mod builder;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use crate::builder::{MachineBuilder, MachineConfig};
pub use crate::core::{State, StateContext, StateDescriptor, StateId, Timestamp};
pub use crate::driver::{MachineError, StateMachine, TickReport};
