//! # Event subscribers.
//!
//! A [`Subscriber`] binds a label to an executable [`EventTask`](crate::EventTask).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   trigger(Event) ──► subscriber table (registration-order scan)
//!                           │
//!                           └──► first label match ──► EventTask::execute(&Event)
//!                                                            │
//!                                                  Outcome::Continue / Done
//! ```
//!
//! ## Rules
//! - Matching is exact and case-sensitive.
//! - At most one subscriber runs per trigger; when several share a label,
//!   the first-registered one wins.
//! - There is no unsubscribe; slots are filled once, in registration order.

mod subscriber;

pub use subscriber::Subscriber;
