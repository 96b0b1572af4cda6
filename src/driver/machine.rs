//! Tick-driven state machine.

use crate::core::{State, StateContext, StateDescriptor, StateId, Timestamp};
use crate::driver::error::MachineError;
use crate::driver::report::TickReport;
use crate::driver::snapshot::MachineSnapshot;
use tracing::{debug, error, trace, warn};
use uuid::Uuid;

const UNNAMED: &str = "<unnamed>";

/// Array-indexed finite state machine driven by `tick`.
///
/// Each registered state carries a start, an update and an optional
/// timed-event callback. The host calls `tick` once per frame with the
/// current time and its own data (`Env`); the machine decides which
/// callbacks to run and detects transitions requested through
/// `set_current_state`.
pub struct StateMachine<Env, T> {
    id: Uuid,
    states: Vec<Option<StateDescriptor<Env, T>>>,
    context: StateContext<T>,
}

impl<Env: 'static, T: Timestamp> StateMachine<Env, T> {
    /// Create a machine with `max_states` empty slots.
    ///
    /// The initial state does not need to be registered yet, or even be in
    /// range; `tick` reports an error for as long as it is not.
    ///
    /// `max_states` should not exceed `StateId::CAPACITY_LIMIT`: slots past
    /// it have no id. The table is allocated up front, so an absurd capacity
    /// aborts on allocation; `MachineBuilder` rejects it instead.
    pub fn new(initial: impl Into<StateId>, max_states: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            states: (0..max_states).map(|_| None).collect(),
            context: StateContext::new(initial.into()),
        }
    }

    /// Create a machine sized for the typed state set `S`.
    pub fn for_states<S: State>(initial: S) -> Self {
        Self::new(initial.id(), S::COUNT)
    }

    /// Replace the generated machine id used in log output.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Capacity of the state table.
    pub fn max_states(&self) -> usize {
        self.states.len()
    }

    /// Register the callbacks for `id`.
    ///
    /// Returns `false` without touching the table when `id` is outside
    /// `[0, max_states)`. Registering an id twice replaces the earlier
    /// descriptor.
    pub fn register(
        &mut self,
        id: impl Into<StateId>,
        descriptor: StateDescriptor<Env, T>,
    ) -> bool {
        self.try_register(id, descriptor).is_ok()
    }

    /// Register the callbacks for `id`, returning any descriptor it replaced.
    pub fn try_register(
        &mut self,
        id: impl Into<StateId>,
        descriptor: StateDescriptor<Env, T>,
    ) -> Result<Option<StateDescriptor<Env, T>>, MachineError> {
        let id = id.into();
        let max_states = self.max_states();

        let Some(slot) = id.index(max_states) else {
            debug!(
                machine = %self.id,
                state = %id,
                max_states,
                "registration outside state table rejected"
            );
            return Err(MachineError::RegistrationOutOfRange { id, max_states });
        };

        let state_name = descriptor.name().unwrap_or(UNNAMED).to_string();
        let replaced = self.states[slot].replace(descriptor);
        if replaced.is_some() {
            debug!(machine = %self.id, state = %id, %state_name, "state registration replaced");
        } else {
            debug!(machine = %self.id, state = %id, %state_name, "state registered");
        }

        Ok(replaced)
    }

    /// Whether `id` has a registered descriptor.
    pub fn is_registered(&self, id: impl Into<StateId>) -> bool {
        self.descriptor(id).is_some()
    }

    pub fn descriptor(&self, id: impl Into<StateId>) -> Option<&StateDescriptor<Env, T>> {
        let slot = id.into().index(self.max_states())?;
        self.states[slot].as_ref()
    }

    /// Display name registered for `id`, if any.
    pub fn state_name(&self, id: impl Into<StateId>) -> Option<&str> {
        self.descriptor(id)?.name()
    }

    pub fn current_state(&self) -> StateId {
        self.context.current_state()
    }

    /// The current state as a typed value, when it names a variant of `S`.
    pub fn current_as<S: State>(&self) -> Option<S> {
        S::from_id(self.current_state())
    }

    /// Request a transition; the new state is entered on the next tick.
    pub fn set_current_state(&mut self, id: impl Into<StateId>) {
        self.context.set_current_state(id);
    }

    pub fn previous_state(&self) -> StateId {
        self.context.previous_state()
    }

    /// Arm the timed event `delta` after the most recent tick's time.
    pub fn arm(&mut self, delta: T::Delta) {
        self.context.arm(delta);
    }

    /// Arm the timed event at an absolute time.
    pub fn arm_at(&mut self, deadline: T) {
        self.context.arm_at(deadline);
    }

    pub fn deadline(&self) -> Option<T> {
        self.context.deadline()
    }

    pub fn has_started(&self) -> bool {
        self.context.has_started()
    }

    /// The state bookkeeping shared with callbacks.
    pub fn context(&self) -> &StateContext<T> {
        &self.context
    }

    /// Run one frame of the machine.
    ///
    /// In order: enter the current state if it has not been entered yet
    /// (first tick, or a request made between ticks) and stop there;
    /// otherwise run `on_update`, then `on_timed_event` if the deadline has
    /// elapsed and `on_update` requested no transition, then enter any state
    /// requested by either callback.
    ///
    /// An out-of-range current state is logged and returned as an error and
    /// nothing else happens; the machine stays frozen until the host sets a
    /// valid state.
    pub fn tick(&mut self, env: &mut Env, now: T) -> Result<TickReport, MachineError> {
        let current = self.context.current;
        let max_states = self.max_states();

        let Some(slot) = current.index(max_states) else {
            error!(
                machine = %self.id,
                state = %current,
                max_states,
                "illegal current state; tick skipped"
            );
            return Err(MachineError::InvalidCurrentState { id: current, max_states });
        };

        if let Some(last) = self.context.now {
            if now < last {
                warn!(machine = %self.id, ?now, ?last, "tick time moved backwards");
            }
        }
        self.context.now = Some(now);

        let mut report = TickReport::default();

        if !self.context.is_steady() {
            if self.context.has_started() {
                report.exited = Some(self.context.previous);
            }
            self.enter(env, &mut report)?;
            return Ok(report);
        }

        if let Some(descriptor) = self.states[slot].as_ref() {
            descriptor.update(env, &mut self.context);
        }
        trace!(machine = %self.id, state = %current, "state updated");
        report.updated = Some(current);

        if self.context.is_steady() && self.context.deadline_elapsed(now) {
            self.context.clear_deadline();
            debug!(machine = %self.id, state = %current, ?now, "deadline elapsed");
            if let Some(descriptor) = self.states[slot].as_ref() {
                descriptor.timed_event(env, &mut self.context);
            }
            report.timed_event = Some(current);
        }

        if !self.context.is_steady() {
            report.exited = Some(current);
            self.enter(env, &mut report)?;
        }

        Ok(report)
    }

    /// Enter `current`: clear the deadline, run its `on_start` and record it
    /// as the resident state.
    ///
    /// A request made by `on_start` itself stays pending until the next tick.
    fn enter(&mut self, env: &mut Env, report: &mut TickReport) -> Result<(), MachineError> {
        let entering = self.context.current;
        let max_states = self.max_states();

        let Some(slot) = entering.index(max_states) else {
            error!(
                machine = %self.id,
                from = %self.context.previous,
                to = %entering,
                max_states,
                "transition to illegal state; machine frozen until corrected"
            );
            return Err(MachineError::InvalidCurrentState { id: entering, max_states });
        };

        self.context.clear_deadline();
        match self.states[slot].as_ref() {
            Some(descriptor) => {
                debug!(
                    machine = %self.id,
                    from = %self.context.previous,
                    to = %entering,
                    state_name = descriptor.name().unwrap_or(UNNAMED),
                    "entering state"
                );
                descriptor.start(env, &mut self.context);
            }
            None => {
                warn!(
                    machine = %self.id,
                    from = %self.context.previous,
                    to = %entering,
                    "entering unregistered state; its callbacks are no-ops"
                );
            }
        }

        self.context.previous = entering;
        report.started = Some(entering);
        Ok(())
    }

    /// Serializable view of the machine for diagnostics.
    pub fn snapshot(&self) -> MachineSnapshot<T> {
        let registered = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(|(index, _)| i32::try_from(index).ok().map(StateId))
            .collect();

        MachineSnapshot {
            machine: self.id,
            max_states: self.max_states(),
            current_state: self.context.current,
            previous_state: self.context.previous,
            deadline: self.context.deadline,
            last_tick: self.context.now,
            registered,
        }
    }
}
