//! # Label-to-task binding.

use std::fmt::{Debug, Formatter};

use crate::tasks::TaskRef;

/// A binding from an event label to the task that handles it.
///
/// Multiple subscribers may share a label; the dispatcher invokes only the
/// first-registered match (see [`trigger`](crate::Dispatcher::trigger)).
///
/// # Example
/// ```
/// use eventick::{Event, Outcome, Subscriber, TaskFn};
///
/// let sub = Subscriber::new(
///     "btn.press",
///     TaskFn::arc(|_: &Event<()>| Outcome::Continue),
/// );
/// assert_eq!(sub.label(), "btn.press");
/// ```
pub struct Subscriber<P> {
    label: &'static str,
    task: TaskRef<P>,
}

impl<P> Subscriber<P> {
    /// Creates a subscriber for `label`. `label` must be non-empty and name
    /// exactly one semantic event category.
    pub fn new(label: &'static str, task: TaskRef<P>) -> Self {
        Self { label, task }
    }

    /// The label this subscriber listens for.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The bound task.
    pub fn task(&self) -> &TaskRef<P> {
        &self.task
    }
}

impl<P> Clone for Subscriber<P> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            task: self.task.clone(),
        }
    }
}

impl<P> Debug for Subscriber<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscriber({})", self.label)
    }
}
