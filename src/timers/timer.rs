//! # Timed task request and slot state.
//!
//! [`TimedTask`] is the caller-facing request: an interval and the event to
//! fire. [`TimerSlot`] is what the dispatcher actually keeps: the request
//! plus the elapsed-time accumulator. Callers never see or set the
//! accumulator; installation resets it to zero.
//!
//! ## Elapsed-time policy
//! A slot is *due* when `elapsed >= interval`. When a due slot re-arms, the
//! interval is **subtracted** from `elapsed` rather than resetting it to
//! zero: overshoot carries into the next cycle, so long-run firing rate
//! stays accurate under irregular tick cadence, and a tick gap spanning
//! several intervals is caught up one firing per tick. The subtraction is
//! guarded by the due check, so it cannot underflow.

use std::time::Duration;

use crate::events::Event;

/// A request to fire an event every `interval`.
///
/// The dispatcher owns the event once the task is scheduled; it hands the
/// event to the matching task on each firing and keeps it for the next
/// cycle while the handler answers
/// [`Outcome::Continue`](crate::Outcome::Continue).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use eventick::{Event, TimedTask};
///
/// let task = TimedTask::new(Duration::from_millis(50), Event::new("sensor.poll", ()));
/// assert_eq!(task.interval(), Duration::from_millis(50));
/// assert_eq!(task.event().label(), "sensor.poll");
/// ```
#[derive(Debug, Clone)]
pub struct TimedTask<P> {
    interval: Duration,
    event: Event<P>,
}

impl<P> TimedTask<P> {
    /// Creates a scheduling request.
    pub fn new(interval: Duration, event: Event<P>) -> Self {
        Self { interval, event }
    }

    /// The re-fire interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The event fired on each elapsed interval.
    pub fn event(&self) -> &Event<P> {
        &self.event
    }
}

/// Occupied timer slot: the installed request plus its accumulator.
///
/// Liveness is represented by the surrounding `Option` in the dispatcher's
/// table; a `TimerSlot` only exists while the task is alive.
pub(crate) struct TimerSlot<P> {
    pub(crate) interval: Duration,
    pub(crate) elapsed: Duration,
    pub(crate) event: Event<P>,
}

impl<P> TimerSlot<P> {
    /// Installs a request: accumulator starts at zero regardless of slot
    /// history.
    pub(crate) fn install(task: TimedTask<P>) -> Self {
        Self {
            interval: task.interval,
            elapsed: Duration::ZERO,
            event: task.event,
        }
    }

    /// Advances the accumulator by one tick delta.
    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Whether the interval has elapsed since the last (re-)arm.
    pub(crate) fn is_due(&self) -> bool {
        self.elapsed >= self.interval
    }

    /// Re-arms a due slot for the next cycle, carrying overshoot.
    ///
    /// Call only when [`is_due`](Self::is_due) holds.
    pub(crate) fn rearm(&mut self) {
        self.elapsed -= self.interval;
    }
}
