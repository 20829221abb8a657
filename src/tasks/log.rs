//! # Simple logging event task for debugging and demos.
//!
//! [`LogTask`] reports every event it receives through the `log` facade and
//! always answers [`Outcome::Continue`], so a timed schedule bound to it
//! keeps firing.
//!
//! ## Output format
//! ```text
//! [event] label=sensor.poll payload=42
//! ```
//!
//! ## Example
//! ```no_run
//! # use eventick::{LogTask, Subscriber};
//! # use std::sync::Arc;
//! let sub: Subscriber<u32> = Subscriber::new("sensor.poll", Arc::new(LogTask));
//! ```

use crate::events::Event;
use crate::tasks::task::{EventTask, Outcome};

/// Logging event task.
///
/// Enabled via the `logging` feature. Emits one `info`-level record per
/// event for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom
/// [`EventTask`](crate::EventTask) for structured logging or metrics.
pub struct LogTask;

impl<P: std::fmt::Debug> EventTask<P> for LogTask {
    fn execute(&self, evt: &Event<P>) -> Outcome {
        log::info!("[event] label={} payload={:?}", evt.label(), evt.payload());
        Outcome::Continue
    }
}
