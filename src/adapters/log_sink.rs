//! Log-based event queue adapter.
//!
//! Implements [`EventQueue`] by writing every button event to the logger
//! (which goes to UART / USB-CDC in production).  Useful on a bench board
//! with no application dispatcher attached; it never refuses an event.

use log::info;

use crate::app::ports::EventQueue;
use crate::error::QueueError;
use crate::events::{ButtonEvent, ButtonEventKind};

/// Adapter that logs every [`ButtonEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink {
    logged: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events logged so far.
    pub fn logged(&self) -> u32 {
        self.logged
    }
}

impl EventQueue for LogEventSink {
    fn send_button_event(&mut self, event: ButtonEvent) -> Result<(), QueueError> {
        let action = match event.kind {
            ButtonEventKind::Toggle => "toggle",
            ButtonEventKind::Pressed => "down",
            ButtonEventKind::Released => "up",
            ButtonEventKind::SinglePress => "single",
            ButtonEventKind::DoublePress => "double",
            ButtonEventKind::TriplePress => "triple",
            ButtonEventKind::LongPressStart => "hold",
            ButtonEventKind::LongPress => "long",
            ButtonEventKind::SwitchTrigger => "relay",
        };
        info!("BUTTON | {}_{}", event.button, action);
        self.logged = self.logged.saturating_add(1);
        Ok(())
    }
}
