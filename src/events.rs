//! Outbound button events and a bounded queue to carry them.
//!
//! Events are produced by the gesture core (edge callback or tick callback)
//! and consumed by the application dispatcher, one at a time in FIFO order.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Edge cb     │────▶│              │     │              │
//! │ Tick cb     │────▶│  Event Queue │────▶│  Dispatcher  │
//! │             │     │  (bounded)   │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The queue never blocks the producer: when it is full the new event is
//! dropped and the caller is told so.

use core::fmt;

use heapless::Deque;
use log::warn;

use crate::app::ports::EventQueue;
use crate::error::QueueError;

/// Default depth of [`ButtonEventQueue`].
pub const EVENT_QUEUE_CAP: usize = 16;

/// Physical button / endpoint identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub u8);

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button_{}", u16::from(self.0) + 1)
    }
}

/// Application event kinds produced by the gesture core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonEventKind {
    // ── Toggle policy ─────────────────────────────────────
    /// Switch flipped on the press edge.
    Toggle = 0,

    // ── Momentary policy ──────────────────────────────────
    /// Contact closed ("down").
    Pressed = 1,
    /// Contact opened ("up").
    Released = 2,

    // ── Multifunction policy ──────────────────────────────
    SinglePress = 3,
    DoublePress = 4,
    TriplePress = 5,
    /// Hold crossed the long-press threshold; button still down.
    LongPressStart = 6,
    /// Long hold finished with a release.
    LongPress = 7,

    // ── Local relay ───────────────────────────────────────
    /// The configured local switch mode matched; operate the relay.
    SwitchTrigger = 8,
}

/// One event handed to the application queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub kind: ButtonEventKind,
    pub button: ButtonId,
}

impl ButtonEvent {
    pub fn new(kind: ButtonEventKind, button: ButtonId) -> Self {
        Self { kind, button }
    }
}

// ── Bounded FIFO ──────────────────────────────────────────────
//
// Owned, fixed capacity, no heap.  Producer and consumer are the same
// single-threaded loop; cross-task delivery goes through the embassy-sync
// channel adapter in `app::ports` instead.

/// Fixed-capacity FIFO of button events.
pub struct ButtonEventQueue<const N: usize = EVENT_QUEUE_CAP> {
    events: Deque<ButtonEvent, N>,
}

impl<const N: usize> ButtonEventQueue<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Pop the next event.  Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<ButtonEvent> {
        self.events.pop_front()
    }

    /// Drain all pending events into a callback, in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(ButtonEvent)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    /// Hand every pending event to `sink`, in FIFO order.  Refused events
    /// are logged and dropped; returns how many were refused.
    pub fn forward_to(&mut self, sink: &mut impl EventQueue) -> usize {
        let mut refused = 0;
        while let Some(event) = self.pop() {
            if let Err(e) = sink.send_button_event(event) {
                warn!("{}: {:?} not dispatched ({})", event.button, event.kind, e);
                refused += 1;
            }
        }
        refused
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<const N: usize> Default for ButtonEventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue for ButtonEventQueue<N> {
    fn send_button_event(&mut self, event: ButtonEvent) -> Result<(), QueueError> {
        self.events.push_back(event).map_err(|_| QueueError::Full)
    }
}
