//! # Task abstraction for event handling.
//!
//! This module defines the [`EventTask`] trait (synchronous, runs to
//! completion) and [`Outcome`], the decision a task hands back to the
//! dispatcher. The common handle type is [`TaskRef`], an
//! `Arc<dyn EventTask>` suitable for storing in the subscriber table.
//!
//! Invocation is synchronous and uninterruptible: the dispatcher calls
//! [`execute`](EventTask::execute) inline and does nothing else until it
//! returns. Keep tasks short; they run inside the cooperative loop.

use std::sync::Arc;

use crate::events::Event;

/// Decision returned by an [`EventTask`], replacing the bare boolean of
/// classic callback tables with an explicit ownership handoff.
///
/// - [`Outcome::Continue`] — the subscription's recurring schedule stays
///   alive; the triggering party keeps the event for reuse.
/// - [`Outcome::Done`] — the dispatcher releases the event and frees the
///   firing timer slot, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep firing: the event is handed back to whoever triggered it.
    Continue,
    /// Finished: the dispatcher drops the event; a firing timer slot is freed.
    Done,
}

impl Outcome {
    /// `true` for [`Outcome::Continue`].
    pub fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue)
    }
}

/// # Synchronous event handler.
///
/// An `EventTask` consumes a borrowed [`Event`] and reports, via
/// [`Outcome`], whether its subscription should keep re-firing.
///
/// # Example
/// ```
/// use eventick::{Event, EventTask, Outcome};
///
/// struct Heater;
///
/// impl EventTask<u16> for Heater {
///     fn execute(&self, evt: &Event<u16>) -> Outcome {
///         if *evt.payload() > 80 {
///             // shut the heater down, stop polling
///             return Outcome::Done;
///         }
///         Outcome::Continue
///     }
/// }
/// ```
pub trait EventTask<P> {
    /// Handles one event occurrence. Runs to completion before `trigger`
    /// returns; there is no cancellation primitive.
    fn execute(&self, evt: &Event<P>) -> Outcome;
}

/// Shared handle to an event task.
///
/// Tasks are stored once in the subscriber table and invoked many times, so
/// they are shared rather than owned. The dispatcher is single-threaded;
/// no `Send`/`Sync` bound is imposed.
pub type TaskRef<P> = Arc<dyn EventTask<P>>;
