//! Error types used by the dispatcher.
//!
//! This module defines [`DispatchError`], raised when a registration or a
//! schedule request hits a full fixed-capacity table.
//!
//! Both tables are sized at build time; there is no backpressure and no
//! resizing, so "full" is a terminal answer for the rejected request. The
//! request itself is dropped; the table is left unchanged.
//!
//! A trigger that matches no subscriber is **not** an error — see
//! [`Dispatched::NoMatch`](crate::Dispatched::NoMatch), which hands the
//! event back to the caller.

use thiserror::Error;

/// # Errors produced by the dispatcher.
///
/// These represent fixed-capacity exhaustion: the only failure mode the
/// dispatcher has. There is no panic or abort path in library code.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The subscriber table is full; the registration was dropped.
    #[error("subscriber table full ({capacity} slots); registration dropped")]
    SubscribersFull {
        /// Build-time capacity of the subscriber table.
        capacity: usize,
    },

    /// No free timer slot; the timed task (and its event) was dropped.
    #[error("timer table full ({capacity} slots); timed task dropped")]
    TimersFull {
        /// Build-time capacity of the timer table.
        capacity: usize,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventick::DispatchError;
    ///
    /// let err = DispatchError::TimersFull { capacity: 4 };
    /// assert_eq!(err.as_label(), "timers_full");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::SubscribersFull { .. } => "subscribers_full",
            DispatchError::TimersFull { .. } => "timers_full",
        }
    }

    /// Capacity of the table that rejected the request.
    pub fn capacity(&self) -> usize {
        match self {
            DispatchError::SubscribersFull { capacity } => *capacity,
            DispatchError::TimersFull { capacity } => *capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(
            DispatchError::SubscribersFull { capacity: 8 }.as_label(),
            "subscribers_full"
        );
        assert_eq!(
            DispatchError::TimersFull { capacity: 2 }.as_label(),
            "timers_full"
        );
    }

    #[test]
    fn test_display_names_capacity() {
        let err = DispatchError::SubscribersFull { capacity: 8 };
        assert_eq!(
            err.to_string(),
            "subscriber table full (8 slots); registration dropped"
        );
        assert_eq!(err.capacity(), 8);
    }
}
