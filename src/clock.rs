//! # Monotonic millisecond clock source.
//!
//! The dispatcher never measures time itself; it reads an external
//! collaborator through the [`Clock`] trait, exactly once per
//! [`tick`](crate::Dispatcher::tick).
//!
//! The counter is a `u32` of elapsed milliseconds, the width of a typical
//! MCU tick register. It is allowed to wrap: the dispatcher computes deltas
//! with `wrapping_sub`, which stays correct as long as the real elapsed time
//! between two ticks is below `u32::MAX` milliseconds (~49.7 days).
//!
//! Two implementations are provided:
//! - [`SystemClock`] — host-side clock backed by `std::time::Instant`.
//! - [`ManualClock`] — hand-advanced clock for tests and host simulation.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonically non-decreasing millisecond counter.
///
/// Implementations must never move backwards between two reads, but are
/// free to wrap around `u32::MAX`.
pub trait Clock {
    /// Current counter value in milliseconds.
    fn millis(&self) -> u32;
}

/// Host-side clock: milliseconds elapsed since construction.
///
/// Backed by [`Instant`], truncated to `u32` (wrapping, consistent with the
/// delta arithmetic in `tick`).
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Creates a clock whose counter starts at zero, now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

/// Hand-advanced clock for tests and host simulation.
///
/// Clones share the same counter, so a test can hand one clone to the
/// dispatcher and keep another to drive time forward. Single-threaded by
/// design, like the dispatcher itself.
///
/// # Example
/// ```
/// use eventick::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let shared = clock.clone();
///
/// clock.advance(250);
/// assert_eq!(shared.millis(), 250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u32>>,
}

impl ManualClock {
    /// Creates a clock whose counter starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter by `ms`, wrapping at `u32::MAX`.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Sets the counter to an absolute value.
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.millis(), 0);
    }

    #[test]
    fn test_manual_clock_clones_share_counter() {
        let clock = ManualClock::new();
        let other = clock.clone();

        clock.advance(100);
        other.advance(50);
        assert_eq!(clock.millis(), 150);
        assert_eq!(other.millis(), 150);
    }

    #[test]
    fn test_manual_clock_wraps() {
        let clock = ManualClock::new();
        clock.set(u32::MAX - 10);
        clock.advance(20);

        assert_eq!(clock.millis(), 9);
        // The wrapped delta is still the real elapsed time.
        assert_eq!(clock.millis().wrapping_sub(u32::MAX - 10), 20);
    }

    #[test]
    fn test_system_clock_does_not_move_backwards() {
        let clock = SystemClock::new();
        let a = clock.millis();
        let b = clock.millis();
        assert!(b >= a);
    }
}
