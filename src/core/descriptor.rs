//! Per-state callback records.

use super::context::StateContext;
use super::time::Timestamp;
use std::fmt;
use std::sync::Arc;

/// Callback invoked by the machine for a state.
///
/// `Env` is the host data the callback operates on (a character, a game
/// world, a test recorder). The machine borrows it for the duration of a
/// tick and never owns it.
pub type StateCallback<Env, T> = Arc<dyn Fn(&mut Env, &mut StateContext<T>) + Send + Sync>;

/// The start, update and optional timed-event callbacks of one state.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateContext, StateDescriptor};
///
/// let walking: StateDescriptor<Vec<String>, f64> = StateDescriptor::new(
///     |log: &mut Vec<String>, ctx: &mut StateContext<f64>| {
///         log.push("start walking".to_string());
///         ctx.arm(3.0);
///     },
///     |log: &mut Vec<String>, _ctx: &mut StateContext<f64>| log.push("step".to_string()),
/// )
/// .on_timed_event(|log: &mut Vec<String>, ctx: &mut StateContext<f64>| {
///     log.push("try to jump".to_string());
///     ctx.set_current_state(2);
/// })
/// .named("WALK");
///
/// assert_eq!(walking.name(), Some("WALK"));
/// assert!(walking.has_timed_event());
/// ```
pub struct StateDescriptor<Env, T> {
    name: Option<String>,
    on_start: StateCallback<Env, T>,
    on_update: StateCallback<Env, T>,
    on_timed_event: Option<StateCallback<Env, T>>,
}

impl<Env: 'static, T: Timestamp> StateDescriptor<Env, T> {
    /// Create a descriptor with start and update callbacks and no timed event.
    pub fn new<S, U>(on_start: S, on_update: U) -> Self
    where
        S: Fn(&mut Env, &mut StateContext<T>) + Send + Sync + 'static,
        U: Fn(&mut Env, &mut StateContext<T>) + Send + Sync + 'static,
    {
        Self {
            name: None,
            on_start: Arc::new(on_start),
            on_update: Arc::new(on_update),
            on_timed_event: None,
        }
    }

    /// A descriptor whose callbacks all do nothing.
    ///
    /// This is also how the machine treats a slot that was never registered.
    pub fn noop() -> Self {
        Self::new(
            |_: &mut Env, _: &mut StateContext<T>| {},
            |_: &mut Env, _: &mut StateContext<T>| {},
        )
    }

    /// Set the callback fired once when an armed deadline elapses.
    pub fn on_timed_event<F>(mut self, on_timed_event: F) -> Self
    where
        F: Fn(&mut Env, &mut StateContext<T>) + Send + Sync + 'static,
    {
        self.on_timed_event = Some(Arc::new(on_timed_event));
        self
    }

    /// Attach a display name used in log output.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn has_timed_event(&self) -> bool {
        self.on_timed_event.is_some()
    }

    pub(crate) fn start(&self, env: &mut Env, ctx: &mut StateContext<T>) {
        (self.on_start)(env, ctx)
    }

    pub(crate) fn update(&self, env: &mut Env, ctx: &mut StateContext<T>) {
        (self.on_update)(env, ctx)
    }

    pub(crate) fn timed_event(&self, env: &mut Env, ctx: &mut StateContext<T>) {
        if let Some(on_timed_event) = &self.on_timed_event {
            on_timed_event(env, ctx)
        }
    }
}

impl<Env, T> Clone for StateDescriptor<Env, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            on_start: Arc::clone(&self.on_start),
            on_update: Arc::clone(&self.on_update),
            on_timed_event: self.on_timed_event.clone(),
        }
    }
}

impl<Env, T> fmt::Debug for StateDescriptor<Env, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDescriptor")
            .field("name", &self.name)
            .field("has_timed_event", &self.on_timed_event.is_some())
            .finish_non_exhaustive()
    }
}
