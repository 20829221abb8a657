//! # eventick
//!
//! **Eventick** is a fixed-capacity publish/trigger event dispatcher for
//! cooperative firmware loops.
//!
//! Independent pieces of firmware register interest in named events; other
//! code fires an event immediately or schedules one to recur after an
//! elapsed-time interval. Everything is bounded and deterministic: a
//! fixed-capacity subscriber table, a fixed-capacity timer table, and a
//! periodic tick that advances elapsed time against an external millisecond
//! clock — O(capacity) scans, no internal concurrency, no blocking.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//!  │  Subscriber  │  │  Subscriber  │  │  Subscriber  │
//!  │ label + task │  │ label + task │  │ label + task │
//!  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!         ▼ subscribe       ▼                 ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Dispatcher<P, C, SUBS, TIMERS>                          │
//! │  - subscriber table  [Option<Subscriber>; SUBS]          │
//! │  - timer table       [Option<TimerSlot>;  TIMERS]        │
//! │  - last clock reading (u32 ms, wraparound-safe deltas)   │
//! └──────┬──────────────────────────────────────────┬────────┘
//!        │ trigger(Event)                           │ tick()
//!        ▼                                          ▼
//!  registration-order scan,              Clock::millis() once,
//!  first label match runs its            every live slot gains the
//!  EventTask::execute(&Event)            delta; due slots fire
//!        │                               through trigger
//!        ▼
//!  Outcome::Continue → event handed back, schedule stays alive
//!  Outcome::Done     → event released, firing timer slot freed
//! ```
//!
//! ### Lifecycle
//! ```text
//! startup:  Dispatcher::new(clock)
//!           └─► subscribe(..) × N        (append-only, registration order)
//!
//! main loop (cooperative, single-threaded):
//!     loop {
//!       ├─► application work, possibly trigger(Event)
//!       ├─► schedule(TimedTask) as needed (first free slot)
//!       └─► tick()
//!             ├─ delta = now −(wrapping) last
//!             └─ for every live slot:
//!                  elapsed += delta
//!                  due? ─► trigger(event)
//!                           ├─ Fired    ─► re-arm (elapsed -= interval)
//!                           └─ Released / NoMatch ─► slot freed
//!     }
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits              |
//! |-----------------|----------------------------------------------------------|---------------------------------|
//! | **Events**      | Label plus opaque payload, explicit ownership handoff.   | [`Event`], [`Dispatched`]       |
//! | **Tasks**       | Synchronous handlers, function-backed or hand-rolled.    | [`EventTask`], [`TaskFn`], [`TaskRef`], [`Outcome`] |
//! | **Scheduling**  | Recurring timed tasks with slot reuse, overshoot carry.  | [`TimedTask`]                   |
//! | **Time**        | External monotonic millisecond counter, u32, wrapping.   | [`Clock`], [`SystemClock`], [`ManualClock`] |
//! | **Errors**      | Typed capacity-exhaustion errors.                        | [`DispatchError`]               |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogTask`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use eventick::{Dispatcher, Event, ManualClock, Outcome, Subscriber, TaskFn, TimedTask};
//!
//! fn main() -> Result<(), eventick::DispatchError> {
//!     let clock = ManualClock::new();
//!     let mut disp: Dispatcher<u16, _, 8, 4> = Dispatcher::new(clock.clone());
//!
//!     // React to a sensor reading; stop the schedule once it overheats.
//!     disp.subscribe(Subscriber::new(
//!         "sensor.read",
//!         TaskFn::arc(|evt: &Event<u16>| {
//!             if *evt.payload() > 80 {
//!                 return Outcome::Done;
//!             }
//!             Outcome::Continue
//!         }),
//!     ))?;
//!
//!     // Poll every 50ms.
//!     disp.schedule(TimedTask::new(
//!         Duration::from_millis(50),
//!         Event::new("sensor.read", 21),
//!     ))?;
//!
//!     // Cooperative main loop: drive time, tick once per iteration.
//!     for _ in 0..4 {
//!         clock.advance(25);
//!         disp.tick();
//!     }
//!     assert_eq!(disp.active_timers(), 1);
//!     Ok(())
//! }
//! ```

mod clock;
mod dispatcher;
mod error;
mod events;
mod subscribers;
mod tasks;
mod timers;

// ---- Public re-exports ----

pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatcher::{Dispatched, Dispatcher};
pub use error::DispatchError;
pub use events::Event;
pub use subscribers::Subscriber;
pub use tasks::{EventTask, Outcome, TaskFn, TaskRef};
pub use timers::TimedTask;

// Optional: expose a simple built-in logging task (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use tasks::LogTask;
