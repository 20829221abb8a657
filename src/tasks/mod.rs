//! # Event task abstractions.
//!
//! This module provides the executable side of a subscription:
//! - [`EventTask`] - trait for implementing synchronous event handlers
//! - [`TaskFn`] - function-backed task implementation
//! - [`TaskRef`] - shared reference to a task (`Arc<dyn EventTask>`)
//! - [`Outcome`] - explicit keep-alive/release decision returned by a task

mod task;
mod task_fn;

pub use task::{EventTask, Outcome, TaskRef};
pub use task_fn::TaskFn;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogTask;
