//! Event data model.
//!
//! An [`Event`] is the unit of dispatch: a static label giving the event a
//! human-readable identity, plus a caller-supplied payload the dispatcher
//! never inspects.
//!
//! ## Quick reference
//! - **Producers**: any firmware code calling
//!   [`trigger`](crate::Dispatcher::trigger), or a timer slot re-firing its
//!   owned event on [`tick`](crate::Dispatcher::tick).
//! - **Consumers**: the [`EventTask`](crate::EventTask) bound by the first
//!   subscriber whose label matches.

mod event;

pub use event::Event;
