//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, a serializable configuration,
//! a macro for typed state enums and a couple of ready-made descriptors for
//! the most common state shapes.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::MachineConfig;
pub use error::{BuildError, ConfigViolation};
pub use machine::MachineBuilder;

use crate::core::{StateContext, StateDescriptor, StateId, Timestamp};

/// A state that moves to `target` once `delay` has passed since entry.
///
/// # Example
///
/// ```
/// use tickstate::builder::timed_transition;
/// use tickstate::driver::StateMachine;
///
/// let mut machine: StateMachine<(), f64> = StateMachine::new(0, 2);
/// machine.register(0, timed_transition(2.0, 1));
/// machine.register(1, timed_transition(2.0, 0));
///
/// machine.tick(&mut (), 0.0).unwrap();
/// machine.tick(&mut (), 1.0).unwrap();
/// assert_eq!(machine.current_state().0, 0);
///
/// machine.tick(&mut (), 2.0).unwrap();
/// assert_eq!(machine.current_state().0, 1);
/// ```
pub fn timed_transition<Env, T>(
    delay: T::Delta,
    target: impl Into<StateId>,
) -> StateDescriptor<Env, T>
where
    Env: 'static,
    T: Timestamp,
{
    let target = target.into();
    StateDescriptor::new(
        move |_: &mut Env, ctx: &mut StateContext<T>| ctx.arm(delay),
        |_: &mut Env, _: &mut StateContext<T>| {},
    )
    .on_timed_event(move |_: &mut Env, ctx: &mut StateContext<T>| ctx.set_current_state(target))
}

/// A state that moves to `target` on the first update where `guard` holds.
///
/// # Example
///
/// ```
/// use tickstate::builder::guarded_transition;
/// use tickstate::driver::StateMachine;
///
/// let mut machine: StateMachine<bool, f64> = StateMachine::new(0, 2);
/// machine.register(0, guarded_transition(1, |ready: &bool| *ready));
///
/// let mut ready = false;
/// machine.tick(&mut ready, 0.0).unwrap();
/// machine.tick(&mut ready, 1.0).unwrap();
/// assert_eq!(machine.current_state().0, 0);
///
/// ready = true;
/// machine.tick(&mut ready, 2.0).unwrap();
/// assert_eq!(machine.current_state().0, 1);
/// ```
pub fn guarded_transition<Env, T, F>(
    target: impl Into<StateId>,
    guard: F,
) -> StateDescriptor<Env, T>
where
    Env: 'static,
    T: Timestamp,
    F: Fn(&Env) -> bool + Send + Sync + 'static,
{
    let target = target.into();
    StateDescriptor::new(
        |_: &mut Env, _: &mut StateContext<T>| {},
        move |env: &mut Env, ctx: &mut StateContext<T>| {
            if guard(env) {
                ctx.set_current_state(target);
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::StateMachine;

    #[test]
    fn timed_transition_waits_for_deadline() {
        let mut machine: StateMachine<(), f64> = StateMachine::new(0, 2);
        machine.register(0, timed_transition(1.5, 1));

        machine.tick(&mut (), 10.0).unwrap();
        assert_eq!(machine.deadline(), Some(11.5));

        machine.tick(&mut (), 11.0).unwrap();
        assert_eq!(machine.current_state(), StateId(0));

        let report = machine.tick(&mut (), 11.5).unwrap();
        assert_eq!(report.timed_event, Some(StateId(0)));
        assert_eq!(report.started, Some(StateId(1)));
        assert_eq!(machine.current_state(), StateId(1));
        assert!(machine.deadline().is_none());
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let mut machine: StateMachine<u32, u64> = StateMachine::new(0, 2);
        machine.register(0, guarded_transition(1, |hits: &u32| *hits >= 3));

        let mut hits = 0;
        machine.tick(&mut hits, 0).unwrap();
        for frame in 1..=3 {
            hits = frame;
            machine.tick(&mut hits, u64::from(frame)).unwrap();
        }

        assert_eq!(machine.current_state(), StateId(1));
        assert_eq!(machine.previous_state(), StateId(1));
    }
}
