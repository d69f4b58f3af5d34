//! Event emitter. Stamps finished gestures with their button and hands
//! them to the outbound queue.
//!
//! Delivery is fire-and-forget: the emitter never retries and never waits.
//! A refused event is logged and reported back so the caller can count it.

use log::{info, warn};

use crate::error::QueueError;
use crate::events::{ButtonEvent, ButtonEventKind, ButtonId};

use super::ports::EventQueue;

/// Per-button emitter.
#[derive(Debug, Clone, Copy)]
pub struct EventEmitter {
    button: ButtonId,
}

impl EventEmitter {
    pub fn new(button: ButtonId) -> Self {
        Self { button }
    }

    pub fn button(&self) -> ButtonId {
        self.button
    }

    /// Offer exactly one event to `queue`.
    pub fn send_button_event(
        &self,
        kind: ButtonEventKind,
        queue: &mut impl EventQueue,
    ) -> Result<(), QueueError> {
        match queue.send_button_event(ButtonEvent::new(kind, self.button)) {
            Ok(()) => {
                info!("{}: {:?}", self.button, kind);
                Ok(())
            }
            Err(e) => {
                warn!("{}: {:?} dropped ({})", self.button, kind, e);
                Err(e)
            }
        }
    }
}
