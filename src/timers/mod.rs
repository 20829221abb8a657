//! # Timed task scheduling.
//!
//! A [`TimedTask`] asks the dispatcher to fire an owned event every time an
//! interval elapses. The dispatcher stores it in a fixed table of slots; a
//! slot is free exactly when it holds no task, and becomes free again when
//! the task's handler answers [`Outcome::Done`](crate::Outcome::Done) or no
//! subscriber matches.

mod timer;

pub use timer::TimedTask;

pub(crate) use timer::TimerSlot;
