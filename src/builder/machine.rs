//! Builder for constructing state machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{State, StateDescriptor, StateId, Timestamp};
use crate::driver::StateMachine;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike `StateMachine::register`, which silently accepts duplicates and
/// reports range errors one call at a time, `build` validates the whole
/// configuration up front and reports every problem it finds.
pub struct MachineBuilder<Env, T> {
    id: Option<Uuid>,
    initial: Option<StateId>,
    max_states: usize,
    states: Vec<(StateId, StateDescriptor<Env, T>)>,
}

impl<Env: 'static, T: Timestamp> MachineBuilder<Env, T> {
    /// Create a builder for a table of `max_states` slots.
    pub fn new(max_states: usize) -> Self {
        Self {
            id: None,
            initial: None,
            max_states,
            states: Vec::new(),
        }
    }

    /// Start from a parsed configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self::new(config.max_states).initial(config.initial_state)
    }

    /// Create a builder sized for the typed state set `S`.
    pub fn for_states<S: State>() -> Self {
        Self::new(S::COUNT)
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Use a fixed machine id instead of a generated one.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Add the callbacks for a state.
    pub fn state(mut self, id: impl Into<StateId>, descriptor: StateDescriptor<Env, T>) -> Self {
        self.states.push((id.into(), descriptor));
        self
    }

    /// Validate the configuration, accumulating ALL violations.
    fn validate(&self, initial: StateId) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let max_states = self.max_states;
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if max_states == 0 {
            Validation::fail(ConfigViolation::ZeroCapacity)
        } else if max_states > StateId::CAPACITY_LIMIT {
            Validation::fail(ConfigViolation::CapacityTooLarge { max_states })
        } else {
            Validation::success(())
        });

        checks.push(match initial.index(max_states) {
            Some(_) => Validation::success(()),
            None => Validation::fail(ConfigViolation::InitialOutOfRange {
                id: initial,
                max_states,
            }),
        });

        let mut seen = HashSet::new();
        for (id, _) in &self.states {
            let check = if id.index(max_states).is_none() {
                Validation::fail(ConfigViolation::StateOutOfRange {
                    id: *id,
                    max_states,
                })
            } else if !seen.insert(*id) {
                Validation::fail(ConfigViolation::DuplicateState { id: *id })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or any violation is found.
    pub fn build(self) -> Result<StateMachine<Env, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Validation::Failure(violations) = self.validate(initial) {
            return Err(BuildError::Rejected(violations.iter().copied().collect()));
        }

        let mut machine = StateMachine::new(initial, self.max_states);
        if let Some(id) = self.id {
            machine = machine.with_id(id);
        }
        for (id, descriptor) in self.states {
            machine.register(id, descriptor);
        }

        tracing::debug!(
            machine = %machine.id(),
            initial = %initial,
            max_states = machine.max_states(),
            "state machine built"
        );

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateContext;

    type Trace = Vec<&'static str>;

    fn quiet() -> StateDescriptor<Trace, f64> {
        StateDescriptor::noop()
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::<Trace, f64>::new(2).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = MachineBuilder::<Trace, f64>::new(2)
            .initial(5)
            .state(0, quiet())
            .state(0, quiet())
            .state(-1, quiet())
            .state(2, quiet())
            .build();

        let Err(BuildError::Rejected(violations)) = result else {
            panic!("expected rejected configuration");
        };

        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&ConfigViolation::InitialOutOfRange {
            id: StateId(5),
            max_states: 2
        }));
        assert!(violations.contains(&ConfigViolation::DuplicateState { id: StateId(0) }));
        assert!(violations.contains(&ConfigViolation::StateOutOfRange {
            id: StateId(-1),
            max_states: 2
        }));
        assert!(violations.contains(&ConfigViolation::StateOutOfRange {
            id: StateId(2),
            max_states: 2
        }));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = MachineBuilder::<Trace, f64>::new(0).initial(0).build();

        let Err(BuildError::Rejected(violations)) = result else {
            panic!("expected rejected configuration");
        };
        assert!(violations.contains(&ConfigViolation::ZeroCapacity));
    }

    #[test]
    fn capacity_beyond_state_ids_is_rejected() {
        let config =
            MachineConfig::from_json(r#"{"initial_state":0,"max_states":18446744073709551615}"#)
                .unwrap();

        let result = MachineBuilder::<Trace, f64>::from_config(config)
            .state(0, quiet())
            .build();

        let Err(BuildError::Rejected(violations)) = result else {
            panic!("expected rejected configuration");
        };
        assert_eq!(
            violations,
            vec![ConfigViolation::CapacityTooLarge {
                max_states: usize::MAX
            }]
        );
    }

    #[test]
    fn capacity_at_limit_is_accepted() {
        let builder = MachineBuilder::<Trace, f64>::new(StateId::CAPACITY_LIMIT);

        assert!(matches!(builder.validate(StateId(0)), Validation::Success(())));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let id = Uuid::new_v4();
        let machine = MachineBuilder::new(2)
            .id(id)
            .initial(1)
            .state(
                0,
                StateDescriptor::new(
                    |trace: &mut Trace, _: &mut StateContext<f64>| trace.push("idle"),
                    |_: &mut Trace, _: &mut StateContext<f64>| {},
                ),
            )
            .state(1, quiet().named("WALK"))
            .build()
            .unwrap();

        assert_eq!(machine.id(), id);
        assert_eq!(machine.current_state(), StateId(1));
        assert_eq!(machine.max_states(), 2);
        assert!(machine.is_registered(0));
        assert_eq!(machine.state_name(1), Some("WALK"));
    }

    #[test]
    fn from_config_applies_shape() {
        let config = MachineConfig::new(2, 3);
        let machine = MachineBuilder::<Trace, f64>::from_config(config)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), StateId(2));
        assert_eq!(machine.max_states(), 3);
    }

    #[test]
    fn rejected_error_lists_every_violation() {
        let err = MachineBuilder::<Trace, f64>::new(1)
            .initial(1)
            .state(3, quiet())
            .build()
            .err()
            .unwrap();

        let message = err.to_string();
        assert!(message.contains("Initial state 1"));
        assert!(message.contains("State 3"));
    }
}
