//! # The dispatcher core.
//!
//! [`Dispatcher`] owns the two fixed-capacity tables and the last clock
//! reading, and exposes the four operations of the system:
//! [`subscribe`](Dispatcher::subscribe), [`trigger`](Dispatcher::trigger),
//! [`schedule`](Dispatcher::schedule) and [`tick`](Dispatcher::tick).
//!
//! ## Architecture
//! ```text
//!           ┌────────────────────────────────────────────────┐
//!           │  Dispatcher<P, C, SUBS, TIMERS>                │
//!           │                                                │
//!  subscribe ──► [Option<Subscriber>; SUBS]  (append-only)   │
//!           │            ▲                                   │
//!  trigger ─┼────────────┘ registration-order scan,          │
//!           │              first label match wins            │
//!           │                                                │
//!  schedule ──► [Option<TimerSlot>; TIMERS]  (slot reuse)    │
//!           │            ▲                                   │
//!  tick ────┼── Clock ───┘ delta = now −(wrap) last;         │
//!           │              due slots fire through trigger    │
//!           └────────────────────────────────────────────────┘
//! ```
//!
//! ## Resource model
//! Single-threaded and cooperative: nothing inside the dispatcher runs
//! spontaneously, no operation blocks, and every operation is an
//! O(capacity) bounded scan. Capacities are const generics, fixed at build
//! time. If embedded in a preemptive or interrupt-driven environment, all
//! calls must be confined to one execution context; the tables are not
//! otherwise protected.

use std::time::Duration;

use crate::clock::Clock;
use crate::error::DispatchError;
use crate::events::Event;
use crate::subscribers::Subscriber;
use crate::tasks::Outcome;
use crate::timers::{TimedTask, TimerSlot};

/// Result of a [`trigger`](Dispatcher::trigger) call.
///
/// Event ownership is explicit in the variant: the caller gets the event
/// back in [`Fired`](Dispatched::Fired) and [`NoMatch`](Dispatched::NoMatch),
/// and never sees it again after [`Released`](Dispatched::Released).
#[derive(Debug)]
#[must_use]
pub enum Dispatched<P> {
    /// The matched task answered [`Outcome::Continue`]; the event is handed
    /// back for reuse on the next firing.
    Fired(Event<P>),
    /// The matched task answered [`Outcome::Done`]; the dispatcher dropped
    /// the event.
    Released,
    /// No subscriber matched the label; no task ran, the event is handed
    /// back untouched.
    NoMatch(Event<P>),
}

impl<P> Dispatched<P> {
    /// `true` when a task ran and asked to keep the schedule alive.
    ///
    /// This is the boolean view a timer slot lives by: anything other than
    /// [`Dispatched::Fired`] frees the slot.
    pub fn fired(&self) -> bool {
        matches!(self, Dispatched::Fired(_))
    }

    /// Returns the event, if this call handed it back.
    pub fn into_event(self) -> Option<Event<P>> {
        match self {
            Dispatched::Fired(evt) | Dispatched::NoMatch(evt) => Some(evt),
            Dispatched::Released => None,
        }
    }
}

/// Fixed-capacity publish/trigger event dispatcher.
///
/// - `P` — event payload type, opaque to the dispatcher.
/// - `C` — external monotonic millisecond clock, read once per tick.
/// - `SUBS` — subscriber table capacity.
/// - `TIMERS` — timer table capacity.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use eventick::{Dispatcher, Event, ManualClock, Outcome, Subscriber, TaskFn, TimedTask};
///
/// let clock = ManualClock::new();
/// let mut disp: Dispatcher<&'static str, _, 4, 2> = Dispatcher::new(clock.clone());
///
/// disp.subscribe(Subscriber::new(
///     "sensor.poll",
///     TaskFn::arc(|evt: &Event<&'static str>| {
///         assert_eq!(*evt.payload(), "adc0");
///         Outcome::Continue
///     }),
/// ))?;
///
/// disp.schedule(TimedTask::new(
///     Duration::from_millis(50),
///     Event::new("sensor.poll", "adc0"),
/// ))?;
///
/// clock.advance(50);
/// disp.tick(); // fires once, slot stays armed
/// assert_eq!(disp.active_timers(), 1);
/// # Ok::<(), eventick::DispatchError>(())
/// ```
pub struct Dispatcher<P, C: Clock, const SUBS: usize, const TIMERS: usize> {
    clock: C,
    /// Clock reading at the end of the previous tick.
    last_ms: u32,
    subs: [Option<Subscriber<P>>; SUBS],
    /// Occupied prefix of `subs`; slots are filled once, in order.
    occupied: usize,
    timers: [Option<TimerSlot<P>>; TIMERS],
}

impl<P, C: Clock, const SUBS: usize, const TIMERS: usize> Dispatcher<P, C, SUBS, TIMERS> {
    /// Creates an empty dispatcher around `clock`.
    ///
    /// The clock is sampled immediately, so the first [`tick`](Self::tick)
    /// observes only time elapsed since construction.
    pub fn new(clock: C) -> Self {
        let last_ms = clock.millis();
        Self {
            clock,
            last_ms,
            subs: std::array::from_fn(|_| None),
            occupied: 0,
            timers: std::array::from_fn(|_| None),
        }
    }

    /// Registers a subscriber in the next free table slot.
    ///
    /// Registration order is dispatch order: the earliest matching
    /// subscriber wins a [`trigger`](Self::trigger). There is no
    /// unsubscribe.
    ///
    /// # Errors
    /// [`DispatchError::SubscribersFull`] when all `SUBS` slots are taken;
    /// the registration is dropped and the table is unchanged.
    pub fn subscribe(&mut self, sub: Subscriber<P>) -> Result<(), DispatchError> {
        if self.occupied >= SUBS {
            log::debug!("subscriber table full, dropping {:?}", sub.label());
            return Err(DispatchError::SubscribersFull { capacity: SUBS });
        }
        log::trace!("subscribed {:?} at slot {}", sub.label(), self.occupied);
        self.subs[self.occupied] = Some(sub);
        self.occupied += 1;
        Ok(())
    }

    /// Dispatches an event immediately.
    ///
    /// Scans subscribers in registration order; the first exact,
    /// case-sensitive label match runs — at most one task invocation per
    /// call. The returned [`Dispatched`] states explicitly where the event
    /// ownership went.
    pub fn trigger(&self, evt: Event<P>) -> Dispatched<P> {
        scan(&self.subs, evt)
    }

    /// Schedules a recurring timed task.
    ///
    /// Installs the request into the first free timer slot, accumulator
    /// reset to zero; the next [`tick`](Self::tick) starts counting its
    /// interval. There is no ordering guarantee among scheduled tasks
    /// beyond first-free-slot.
    ///
    /// # Errors
    /// [`DispatchError::TimersFull`] when no slot is free; the task and its
    /// event are dropped.
    pub fn schedule(&mut self, task: TimedTask<P>) -> Result<(), DispatchError> {
        match self.timers.iter_mut().find(|slot| slot.is_none()) {
            Some(free) => {
                log::trace!(
                    "scheduled {:?} every {:?}",
                    task.event().label(),
                    task.interval()
                );
                *free = Some(TimerSlot::install(task));
                Ok(())
            }
            None => {
                log::debug!("timer table full, dropping {:?}", task.event().label());
                Err(DispatchError::TimersFull { capacity: TIMERS })
            }
        }
    }

    /// Advances time and fires due timed tasks.
    ///
    /// Reads the clock once and computes the delta with wrapping
    /// subtraction, so counter wraparound between ticks is harmless as long
    /// as the real gap stays below `u32::MAX` ms. Every live slot gains the
    /// delta; a due slot (`elapsed >= interval`) fires **at most once per
    /// tick** through [`trigger`](Self::trigger):
    ///
    /// - [`Dispatched::Fired`] — the event is reinstalled and the slot
    ///   re-arms by subtracting the interval, carrying overshoot. A gap
    ///   spanning several intervals therefore catches up one firing per
    ///   subsequent tick.
    /// - [`Dispatched::Released`] or [`Dispatched::NoMatch`] — the slot is
    ///   freed and the event dropped.
    ///
    /// Correct at arbitrary, irregular call cadence; intended to run once
    /// per cooperative main-loop iteration.
    pub fn tick(&mut self) {
        let now = self.clock.millis();
        let delta = Duration::from_millis(u64::from(now.wrapping_sub(self.last_ms)));

        for i in 0..TIMERS {
            let Some(mut slot) = self.timers[i].take() else {
                continue;
            };
            slot.advance(delta);
            if !slot.is_due() {
                self.timers[i] = Some(slot);
                continue;
            }
            match scan(&self.subs, slot.event) {
                Dispatched::Fired(evt) => {
                    slot.event = evt;
                    slot.rearm();
                    self.timers[i] = Some(slot);
                }
                Dispatched::Released => {
                    log::trace!("timer slot {i} done, freed");
                }
                Dispatched::NoMatch(evt) => {
                    log::debug!("timer slot {i} fired {:?} with no subscriber, freed", evt.label());
                }
            }
        }

        self.last_ms = now;
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.occupied
    }

    /// Number of currently live timer slots.
    pub fn active_timers(&self) -> usize {
        self.timers.iter().flatten().count()
    }
}

/// Registration-order scan shared by `trigger` and `tick`.
fn scan<P>(subs: &[Option<Subscriber<P>>], evt: Event<P>) -> Dispatched<P> {
    for sub in subs.iter().flatten() {
        if sub.label() == evt.label() {
            return match sub.task().execute(&evt) {
                Outcome::Continue => Dispatched::Fired(evt),
                Outcome::Done => {
                    log::trace!("task for {:?} done, event released", evt.label());
                    Dispatched::Released
                }
            };
        }
    }
    log::trace!("no subscriber for {:?}", evt.label());
    Dispatched::NoMatch(evt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::tasks::TaskFn;
    use std::cell::Cell;
    use std::rc::Rc;

    type Disp<const S: usize, const T: usize> = Dispatcher<u32, ManualClock, S, T>;

    /// Subscriber whose task counts invocations and always answers `out`.
    fn counting_sub(
        label: &'static str,
        out: Outcome,
    ) -> (Subscriber<u32>, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let sub = Subscriber::new(
            label,
            TaskFn::arc(move |_: &Event<u32>| {
                counter.set(counter.get() + 1);
                out
            }),
        );
        (sub, hits)
    }

    #[test]
    fn test_trigger_invokes_matching_subscriber_once() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (sub, hits) = counting_sub("btn.press", Outcome::Continue);
        disp.subscribe(sub).unwrap();

        let out = disp.trigger(Event::new("btn.press", 1));
        assert!(out.fired());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_trigger_hands_event_back_on_continue() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (sub, _) = counting_sub("btn.press", Outcome::Continue);
        disp.subscribe(sub).unwrap();

        let evt = disp
            .trigger(Event::new("btn.press", 7))
            .into_event()
            .unwrap();
        assert_eq!(evt.label(), "btn.press");
        assert_eq!(*evt.payload(), 7);
    }

    #[test]
    fn test_trigger_releases_event_on_done() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (sub, hits) = counting_sub("once", Outcome::Done);
        disp.subscribe(sub).unwrap();

        let out = disp.trigger(Event::new("once", 0));
        assert!(!out.fired());
        assert!(out.into_event().is_none());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_trigger_no_match_runs_nothing_and_returns_event() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (sub, hits) = counting_sub("btn.press", Outcome::Continue);
        disp.subscribe(sub).unwrap();

        let out = disp.trigger(Event::new("btn.release", 0));
        assert!(!out.fired());
        assert!(matches!(out, Dispatched::NoMatch(_)));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_trigger_match_is_case_sensitive() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (sub, hits) = counting_sub("Btn.Press", Outcome::Continue);
        disp.subscribe(sub).unwrap();

        assert!(!disp.trigger(Event::new("btn.press", 0)).fired());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_first_registered_match_wins() {
        let mut disp: Disp<4, 2> = Dispatcher::new(ManualClock::new());
        let (first, first_hits) = counting_sub("shared", Outcome::Continue);
        let (second, second_hits) = counting_sub("shared", Outcome::Continue);
        disp.subscribe(first).unwrap();
        disp.subscribe(second).unwrap();

        let _ = disp.trigger(Event::new("shared", 0));
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 0);
    }

    #[test]
    fn test_subscribe_beyond_capacity_is_rejected() {
        let mut disp: Disp<2, 2> = Dispatcher::new(ManualClock::new());
        let (a, a_hits) = counting_sub("a", Outcome::Continue);
        let (b, _) = counting_sub("b", Outcome::Continue);
        let (c, c_hits) = counting_sub("c", Outcome::Continue);

        disp.subscribe(a).unwrap();
        disp.subscribe(b).unwrap();
        let err = disp.subscribe(c).unwrap_err();

        assert_eq!(err, DispatchError::SubscribersFull { capacity: 2 });
        assert_eq!(disp.subscriber_count(), 2);

        // Earlier registrations are untouched; the rejected one never runs.
        assert!(disp.trigger(Event::new("a", 0)).fired());
        assert_eq!(a_hits.get(), 1);
        assert!(!disp.trigger(Event::new("c", 0)).fired());
        assert_eq!(c_hits.get(), 0);
    }

    #[test]
    fn test_timed_task_fires_only_once_interval_elapsed() {
        let clock = ManualClock::new();
        let mut disp: Disp<4, 2> = Dispatcher::new(clock.clone());
        let (sub, hits) = counting_sub("poll", Outcome::Continue);
        disp.subscribe(sub).unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(100),
            Event::new("poll", 0),
        ))
        .unwrap();

        // Deltas summing below the interval: no firing.
        for _ in 0..9 {
            clock.advance(10);
            disp.tick();
        }
        assert_eq!(hits.get(), 0);

        // The delta that completes the interval fires exactly once.
        clock.advance(10);
        disp.tick();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_delta_sequence_zero_partial_then_boundary() {
        // Deltas {0, I-1, 1}: fires exactly once, on the third tick.
        let clock = ManualClock::new();
        let mut disp: Disp<4, 2> = Dispatcher::new(clock.clone());
        let (sub, hits) = counting_sub("poll", Outcome::Continue);
        disp.subscribe(sub).unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(100),
            Event::new("poll", 0),
        ))
        .unwrap();

        disp.tick();
        assert_eq!(hits.get(), 0);
        clock.advance(99);
        disp.tick();
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        disp.tick();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_continue_refires_done_frees_slot() {
        let clock = ManualClock::new();
        let mut disp: Disp<4, 1> = Dispatcher::new(clock.clone());

        // Answers Continue twice, then Done.
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        disp.subscribe(Subscriber::new(
            "poll",
            TaskFn::arc(move |_: &Event<u32>| {
                counter.set(counter.get() + 1);
                if counter.get() < 3 {
                    Outcome::Continue
                } else {
                    Outcome::Done
                }
            }),
        ))
        .unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(50),
            Event::new("poll", 0),
        ))
        .unwrap();

        for expect in 1..=3u32 {
            clock.advance(50);
            disp.tick();
            assert_eq!(hits.get(), expect);
        }
        assert_eq!(disp.active_timers(), 0);

        // Done stopped the schedule for good.
        clock.advance(200);
        disp.tick();
        assert_eq!(hits.get(), 3);

        // And the slot is reusable.
        disp.schedule(TimedTask::new(
            Duration::from_millis(50),
            Event::new("poll", 1),
        ))
        .unwrap();
        assert_eq!(disp.active_timers(), 1);
    }

    #[test]
    fn test_no_match_on_fire_frees_slot() {
        let clock = ManualClock::new();
        let mut disp: Disp<4, 1> = Dispatcher::new(clock.clone());
        disp.schedule(TimedTask::new(
            Duration::from_millis(10),
            Event::new("orphan", 0),
        ))
        .unwrap();

        clock.advance(10);
        disp.tick();
        assert_eq!(disp.active_timers(), 0);
    }

    #[test]
    fn test_schedule_beyond_capacity_is_rejected() {
        let mut disp: Disp<4, 1> = Dispatcher::new(ManualClock::new());
        disp.schedule(TimedTask::new(
            Duration::from_millis(10),
            Event::new("a", 0),
        ))
        .unwrap();

        let err = disp
            .schedule(TimedTask::new(
                Duration::from_millis(10),
                Event::new("b", 0),
            ))
            .unwrap_err();
        assert_eq!(err, DispatchError::TimersFull { capacity: 1 });
        assert_eq!(disp.active_timers(), 1);
    }

    #[test]
    fn test_slow_tick_cadence_catches_up() {
        // One tick per 3 intervals: fires once per tick until caught up.
        let clock = ManualClock::new();
        let mut disp: Disp<4, 1> = Dispatcher::new(clock.clone());
        let (sub, hits) = counting_sub("poll", Outcome::Continue);
        disp.subscribe(sub).unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(50),
            Event::new("poll", 0),
        ))
        .unwrap();

        clock.advance(150);
        disp.tick();
        assert_eq!(hits.get(), 1);
        disp.tick();
        assert_eq!(hits.get(), 2);
        disp.tick();
        assert_eq!(hits.get(), 3);
        disp.tick();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_clock_wraparound_between_ticks() {
        let clock = ManualClock::new();
        clock.set(u32::MAX - 10);
        let mut disp: Disp<4, 1> = Dispatcher::new(clock.clone());
        let (sub, hits) = counting_sub("poll", Outcome::Continue);
        disp.subscribe(sub).unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(20),
            Event::new("poll", 0),
        ))
        .unwrap();

        // Counter wraps past u32::MAX; the delta is still 20ms.
        clock.advance(20);
        disp.tick();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_two_slot_interval_scenario() {
        // Slots A (100ms) and B (50ms), ticked every 10ms for 100ms:
        // B fires at 50ms and 100ms, A once at 100ms.
        let clock = ManualClock::new();
        let mut disp: Disp<4, 2> = Dispatcher::new(clock.clone());
        let (a, a_hits) = counting_sub("a", Outcome::Continue);
        let (b, b_hits) = counting_sub("b", Outcome::Continue);
        disp.subscribe(a).unwrap();
        disp.subscribe(b).unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(100),
            Event::new("a", 0),
        ))
        .unwrap();
        disp.schedule(TimedTask::new(
            Duration::from_millis(50),
            Event::new("b", 0),
        ))
        .unwrap();

        for call in 1..=10u32 {
            clock.advance(10);
            disp.tick();
            match call {
                4 => {
                    assert_eq!(a_hits.get(), 0);
                    assert_eq!(b_hits.get(), 0);
                }
                5 => {
                    assert_eq!(a_hits.get(), 0);
                    assert_eq!(b_hits.get(), 1);
                }
                9 => {
                    assert_eq!(a_hits.get(), 0);
                    assert_eq!(b_hits.get(), 1);
                }
                10 => {
                    assert_eq!(a_hits.get(), 1);
                    assert_eq!(b_hits.get(), 2);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_tick_with_empty_tables_is_a_no_op() {
        let clock = ManualClock::new();
        let mut disp: Disp<0, 0> = Dispatcher::new(clock.clone());
        clock.advance(1000);
        disp.tick();
        assert_eq!(disp.subscriber_count(), 0);
        assert_eq!(disp.active_timers(), 0);
    }
}
