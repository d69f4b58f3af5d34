//! Switch service: owns one gesture machine per physical button.
//!
//! [`SwitchService`] routes edges to the right [`ButtonHandler`], fans the
//! periodic tick out to all of them, and applies configuration commands.
//! All output flows through the [`EventQueue`] port injected at call sites,
//! making the service testable with a mock queue.
//!
//! ```text
//!  edge(button, pressed) ──▶ ┌────────────────────────┐ ──▶ EventQueue
//!  tick()                ──▶ │     SwitchService       │
//!  SwitchCommand         ──▶ │  ButtonHandler × N      │
//!                            └────────────────────────┘
//! ```

use log::info;

use crate::config::SwitchConfig;
use crate::error::{Error, Result};
use crate::events::ButtonId;
use crate::fsm::ButtonHandler;

use super::commands::SwitchCommand;
use super::ports::EventQueue;

// ───────────────────────────────────────────────────────────────
// SwitchService
// ───────────────────────────────────────────────────────────────

pub struct SwitchService<const N: usize> {
    handlers: [ButtonHandler; N],
    tick_count: u64,
    config_dirty: bool,
}

impl<const N: usize> SwitchService<N> {
    /// One handler per entry; button ids are the array indices, so at most
    /// 256 buttons.
    pub fn new(configs: [SwitchConfig; N]) -> Self {
        const { assert!(N <= 256, "button ids are u8") };
        let handlers =
            core::array::from_fn(|i| ButtonHandler::new(ButtonId(i as u8), configs[i]));
        info!("SwitchService started with {} button(s)", N);
        Self {
            handlers,
            tick_count: 0,
            config_dirty: false,
        }
    }

    // ── Inbound signals ───────────────────────────────────────

    /// Deliver a debounced edge for `button`.
    pub fn handle_edge(
        &mut self,
        button: ButtonId,
        pressed: bool,
        queue: &mut impl EventQueue,
    ) -> Result<()> {
        self.handler_mut(button)?.handle_button_state(pressed, queue);
        Ok(())
    }

    /// Advance every button by one tick.
    pub fn tick(&mut self, queue: &mut impl EventQueue) {
        self.tick_count = self.tick_count.saturating_add(1);
        for handler in &mut self.handlers {
            handler.tick(queue);
        }
    }

    /// Abort the gesture in progress on `button`.  Emits nothing.
    pub fn reset(&mut self, button: ButtonId) -> Result<()> {
        self.handler_mut(button)?.reset_button_state_machine();
        Ok(())
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(&mut self, cmd: SwitchCommand) -> Result<()> {
        match cmd {
            SwitchCommand::WriteAttribute { button, attr } => {
                self.handler_mut(button)?.apply_attribute(attr);
                self.config_dirty = true;
            }
            SwitchCommand::LoadConfig { button, config } => {
                self.handler_mut(button)?.set_config(config);
            }
            SwitchCommand::ResetButton(button) => self.reset(button)?,
            SwitchCommand::ResetAll => {
                for handler in &mut self.handlers {
                    handler.reset_button_state_machine();
                }
            }
            SwitchCommand::ClearDiagnostics => {
                for handler in &mut self.handlers {
                    handler.diagnostics_mut().clear();
                }
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn handler(&self, button: ButtonId) -> Result<&ButtonHandler> {
        self.handlers
            .get(button.0 as usize)
            .ok_or(Error::UnknownButton(button.0))
    }

    pub fn handlers(&self) -> &[ButtonHandler] {
        &self.handlers
    }

    /// Ticks delivered since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Latest written configuration of every button, for persisting.
    pub fn configs(&self) -> [SwitchConfig; N] {
        core::array::from_fn(|i| *self.handlers[i].pending_config())
    }

    // ── Config dirty-flag management ──────────────────────────

    /// Whether attribute writes happened since the last save.
    pub fn is_config_dirty(&self) -> bool {
        self.config_dirty
    }

    /// Call after [`configs`](Self::configs) has been written to flash.
    pub fn mark_config_saved(&mut self) {
        self.config_dirty = false;
    }

    // ── Internal ──────────────────────────────────────────────

    fn handler_mut(&mut self, button: ButtonId) -> Result<&mut ButtonHandler> {
        self.handlers
            .get_mut(button.0 as usize)
            .ok_or(Error::UnknownButton(button.0))
    }
}
