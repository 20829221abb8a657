//! # Function-backed event task (`TaskFn`)
//!
//! [`TaskFn`] wraps a closure `F: Fn(&Event<P>) -> Outcome`, the shortest
//! path from "I have a function" to "I have something the dispatcher can
//! invoke". The closure is `Fn`, not `FnMut`: shared state belongs behind
//! explicit interior mutability (`Cell`, `RefCell`, atomics) inside the
//! capture, since the same task may be invoked through a shared handle.
//!
//! ## Example
//! ```rust
//! use eventick::{Event, EventTask, Outcome, TaskFn, TaskRef};
//!
//! let t: TaskRef<&'static str> = TaskFn::arc(|evt: &Event<&'static str>| {
//!     let _ = evt.payload();
//!     Outcome::Continue
//! });
//!
//! assert!(t.execute(&Event::new("demo", "payload")).is_continue());
//! ```

use std::sync::Arc;

use crate::events::Event;
use crate::tasks::task::{EventTask, Outcome};

/// Function-backed task implementation.
///
/// Wraps a closure invoked once per matching trigger.
#[derive(Debug)]
pub struct TaskFn<F> {
    f: F,
}

impl<F> TaskFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a
    /// [`TaskRef`](crate::TaskRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the task and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<P, F> EventTask<P> for TaskFn<F>
where
    F: Fn(&Event<P>) -> Outcome,
{
    fn execute(&self, evt: &Event<P>) -> Outcome {
        (self.f)(evt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::task::TaskRef;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_task_fn_forwards_outcome() {
        let keep = TaskFn::new(|_: &Event<()>| Outcome::Continue);
        let done = TaskFn::new(|_: &Event<()>| Outcome::Done);
        let evt = Event::new("x", ());

        assert_eq!(keep.execute(&evt), Outcome::Continue);
        assert_eq!(done.execute(&evt), Outcome::Done);
    }

    #[test]
    fn test_shared_handle_sees_captured_state() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let task: TaskRef<()> = TaskFn::arc(move |_: &Event<()>| {
            counter.set(counter.get() + 1);
            Outcome::Continue
        });

        let evt = Event::new("x", ());
        task.execute(&evt);
        task.execute(&evt);
        assert_eq!(hits.get(), 2);
    }
}
