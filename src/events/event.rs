//! # The event value: label plus opaque payload.
//!
//! Events are immutable after construction. Ownership moves with the value:
//! whoever holds the `Event` is responsible for it, and the dispatch result
//! ([`Dispatched`](crate::Dispatched)) says explicitly whether the caller
//! got it back. There is no hidden "who frees this" protocol.
//!
//! Labels are `&'static str` rather than an owned string type: event
//! identity is decided at build time in firmware, and a static label keeps
//! the comparison allocation-free.

/// A dispatched occurrence: a label and a caller-supplied payload.
///
/// # Invariants
/// - `label` is non-empty and stable for the event's lifetime.
/// - The payload is opaque to the dispatcher; only the bound
///   [`EventTask`](crate::EventTask) interprets it.
///
/// # Example
/// ```
/// use eventick::Event;
///
/// let evt = Event::new("sensor.overheat", 87u16);
/// assert_eq!(evt.label(), "sensor.overheat");
/// assert_eq!(*evt.payload(), 87);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<P> {
    label: &'static str,
    payload: P,
}

impl<P> Event<P> {
    /// Creates a new event. `label` must be non-empty.
    pub fn new(label: &'static str, payload: P) -> Self {
        Self { label, payload }
    }

    /// The event's label, used for exact, case-sensitive matching.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Borrows the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the event and returns the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}
