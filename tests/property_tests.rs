//! Property-based tests for the tick algorithm.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::collections::VecDeque;
use tickstate::{StateContext, StateDescriptor, StateId, StateMachine};

const MAX_STATES: usize = 4;

#[derive(Default)]
struct Recorder {
    starts: Vec<StateId>,
    updates: Vec<StateId>,
    timed: Vec<StateId>,
    requests: VecDeque<Option<i32>>,
}

fn observed(id: i32) -> StateDescriptor<Recorder, f64> {
    StateDescriptor::new(
        move |rec: &mut Recorder, _: &mut StateContext<f64>| rec.starts.push(StateId(id)),
        move |rec: &mut Recorder, ctx: &mut StateContext<f64>| {
            rec.updates.push(StateId(id));
            if let Some(Some(target)) = rec.requests.pop_front() {
                ctx.set_current_state(target);
            }
        },
    )
    .on_timed_event(move |rec: &mut Recorder, _: &mut StateContext<f64>| {
        rec.timed.push(StateId(id))
    })
}

fn full_machine(initial: i32) -> StateMachine<Recorder, f64> {
    let mut machine = StateMachine::new(initial, MAX_STATES);
    for id in 0..MAX_STATES as i32 {
        machine.register(id, observed(id));
    }
    machine
}

prop_compose! {
    fn valid_state()(id in 0..MAX_STATES as i32) -> i32 {
        id
    }
}

prop_compose! {
    fn invalid_state()(id in prop_oneof![i32::MIN..0, MAX_STATES as i32..i32::MAX]) -> i32 {
        id
    }
}

proptest! {
    #[test]
    fn register_accepts_exactly_in_range_ids(id in -10i32..10) {
        let mut machine: StateMachine<Recorder, f64> = StateMachine::new(0, MAX_STATES);
        let accepted = machine.register(id, StateDescriptor::noop());

        prop_assert_eq!(accepted, (0..MAX_STATES as i32).contains(&id));
        prop_assert_eq!(machine.is_registered(id), accepted);
    }

    #[test]
    fn first_tick_starts_initial_state(initial in valid_state(), now in 0.0f64..1e6) {
        let mut machine = full_machine(initial);
        let mut rec = Recorder::default();

        machine.tick(&mut rec, now).unwrap();

        prop_assert_eq!(rec.starts, vec![StateId(initial)]);
        prop_assert!(rec.updates.is_empty());
        prop_assert!(rec.timed.is_empty());
        prop_assert_eq!(machine.previous_state(), StateId(initial));
    }

    #[test]
    fn machine_is_steady_after_every_tick(
        initial in valid_state(),
        requests in prop::collection::vec(prop::option::of(valid_state()), 1..30)
    ) {
        let mut machine = full_machine(initial);
        let mut rec = Recorder {
            requests: requests.iter().copied().collect(),
            ..Recorder::default()
        };

        machine.tick(&mut rec, 0.0).unwrap();
        let mut expected_starts = vec![StateId(initial)];

        for (frame, request) in requests.iter().enumerate() {
            let before = machine.current_state();
            machine.tick(&mut rec, frame as f64 + 1.0).unwrap();

            prop_assert_eq!(machine.previous_state(), machine.current_state());
            if let Some(target) = request {
                if StateId(*target) != before {
                    expected_starts.push(StateId(*target));
                }
            }
        }

        prop_assert_eq!(rec.starts, expected_starts);
        prop_assert_eq!(rec.updates.len(), requests.len());
    }

    #[test]
    fn timed_event_fires_exactly_once(
        delay in 0.0f64..50.0,
        steps in prop::collection::vec(0.1f64..5.0, 1..60)
    ) {
        let mut machine = full_machine(0);
        let mut rec = Recorder::default();

        machine.tick(&mut rec, 0.0).unwrap();
        machine.arm(delay);

        let mut now = 0.0;
        for step in &steps {
            now += step;
            machine.tick(&mut rec, now).unwrap();
            let expected = usize::from(now >= delay);
            prop_assert_eq!(rec.timed.len(), expected);
        }
    }

    #[test]
    fn invalid_current_state_dispatches_nothing(
        bad in invalid_state(),
        delay in 0.0f64..10.0
    ) {
        let mut machine = full_machine(1);
        let mut rec = Recorder::default();
        machine.tick(&mut rec, 0.0).unwrap();
        machine.arm(delay);
        let deadline = machine.deadline();

        machine.set_current_state(bad);
        let result = machine.tick(&mut rec, delay + 1.0);

        prop_assert!(result.is_err());
        prop_assert_eq!(rec.starts.len(), 1);
        prop_assert!(rec.updates.is_empty());
        prop_assert!(rec.timed.is_empty());
        prop_assert_eq!(machine.previous_state(), StateId(1));
        prop_assert_eq!(machine.deadline(), deadline);
    }
}
