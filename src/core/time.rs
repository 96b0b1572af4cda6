//! Time values understood by the machine.
//!
//! The machine never reads a clock. The host passes `now` into every tick,
//! and `Timestamp` only needs to answer two questions: is one instant at or
//! after another, and what instant lies `delta` after this one.

use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// A totally ordered, monotonically non-decreasing point in time.
///
/// # Example
///
/// ```rust
/// use tickstate::core::Timestamp;
///
/// assert_eq!(1.5_f64.after(2.0), Some(3.5));
/// assert_eq!(10_u64.after(5), Some(15));
/// ```
pub trait Timestamp: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Distance between two timestamps, as used by `arm`.
    type Delta: Copy + Debug + Send + Sync + 'static;

    /// The instant `delta` after `self`.
    ///
    /// Returns `None` when the result cannot be represented.
    fn after(self, delta: Self::Delta) -> Option<Self>;
}

impl Timestamp for f32 {
    type Delta = f32;

    fn after(self, delta: f32) -> Option<f32> {
        Some(self + delta)
    }
}

impl Timestamp for f64 {
    type Delta = f64;

    fn after(self, delta: f64) -> Option<f64> {
        Some(self + delta)
    }
}

/// Frame counters and millisecond clocks.
impl Timestamp for u64 {
    type Delta = u64;

    fn after(self, delta: u64) -> Option<u64> {
        self.checked_add(delta)
    }
}

impl Timestamp for Instant {
    type Delta = Duration;

    fn after(self, delta: Duration) -> Option<Instant> {
        self.checked_add(delta)
    }
}

impl Timestamp for DateTime<Utc> {
    type Delta = chrono::Duration;

    fn after(self, delta: chrono::Duration) -> Option<DateTime<Utc>> {
        self.checked_add_signed(delta)
    }
}
