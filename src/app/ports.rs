//! Port traits: the boundary between the gesture core and the outside world.
//!
//! ```text
//!   ButtonHandler ──▶ EventQueue ──▶ Application dispatcher
//! ```
//!
//! The core hands every finished gesture to an [`EventQueue`].  Adapters
//! decide where it goes: the in-process [`ButtonEventQueue`], an
//! embassy-sync channel to another task, or the serial log.
//!
//! Delivery is fire-and-forget.  Implementations MUST NOT block; a queue
//! that cannot take the event returns [`QueueError`] and the event is lost.
//!
//! [`ButtonEventQueue`]: crate::events::ButtonEventQueue

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Sender, TrySendError};

use crate::error::QueueError;
use crate::events::ButtonEvent;

// ───────────────────────────────────────────────────────────────
// Event queue port (driven adapter: core → application)
// ───────────────────────────────────────────────────────────────

/// Outbound application event queue.
pub trait EventQueue {
    /// Offer one event without blocking.
    fn send_button_event(&mut self, event: ButtonEvent) -> Result<(), QueueError>;
}

// ───────────────────────────────────────────────────────────────
// embassy-sync channel adapters
// ───────────────────────────────────────────────────────────────

impl<M: RawMutex, const N: usize> EventQueue for Sender<'_, M, ButtonEvent, N> {
    fn send_button_event(&mut self, event: ButtonEvent) -> Result<(), QueueError> {
        self.try_send(event).map_err(|TrySendError::Full(_)| QueueError::Full)
    }
}

/// Lets a `static` channel be used directly as the queue.
impl<M: RawMutex, const N: usize> EventQueue for &Channel<M, ButtonEvent, N> {
    fn send_button_event(&mut self, event: ButtonEvent) -> Result<(), QueueError> {
        self.try_send(event).map_err(|TrySendError::Full(_)| QueueError::Full)
    }
}
