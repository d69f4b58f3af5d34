//! Gesture recognition state machine.
//!
//! One [`ButtonHandler`] per physical button.  It is driven from two call
//! sites that the caller serializes:
//!
//! ```text
//!   edge callback ──▶ handle_button_state(pressed) ─┐
//!                                                   ├─▶ policy (match on SwitchType)
//!   tick callback ──▶ tick() ───────────────────────┘         │
//!                                                             ▼
//!                                         change_state · EventEmitter ──▶ EventQueue
//! ```
//!
//! The seven states are shared by all policies; each policy only uses the
//! subset it needs (see [`policies`]).  The per-state timer is reset on every
//! transition and advances once per tick while the machine is not Idle.
//!
//! Configuration written while a gesture is in progress is held back and
//! latched the next time the machine returns to Idle, so thresholds never
//! change under a measurement.

pub mod policies;
pub mod timing;

use log::{debug, info, warn};

use crate::app::emitter::EventEmitter;
use crate::app::ports::EventQueue;
use crate::config::{LocalSwitchMode, SwitchAttribute, SwitchConfig, SwitchType};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::events::{ButtonEventKind, ButtonId};

use policies::Step;
use timing::StateTimer;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Position in the gesture automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonState {
    Idle = 0,
    Pressed1 = 1,
    Pause1 = 2,
    Pressed2 = 3,
    Pause2 = 4,
    Pressed3 = 5,
    LongPress = 6,
}

impl ButtonState {
    pub const ALL: [Self; 7] = [
        Self::Idle,
        Self::Pressed1,
        Self::Pause1,
        Self::Pressed2,
        Self::Pause2,
        Self::Pressed3,
        Self::LongPress,
    ];

    /// Diagnostic name, as printed in transition logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Pressed1 => "PRESSED1",
            Self::Pause1 => "PAUSE1",
            Self::Pressed2 => "PRESSED2",
            Self::Pause2 => "PAUSE2",
            Self::Pressed3 => "PRESSED3",
            Self::LongPress => "LONG_PRESS",
        }
    }
}

// ---------------------------------------------------------------------------
// Button handler
// ---------------------------------------------------------------------------

/// Gesture recognizer for a single button.
pub struct ButtonHandler {
    emitter: EventEmitter,
    state: ButtonState,
    timer: StateTimer,
    /// Configuration the current gesture is measured against.
    active: SwitchConfig,
    /// Latest written configuration; becomes `active` at the next Idle.
    pending: SwitchConfig,
    diagnostics: Diagnostics,
}

impl ButtonHandler {
    pub fn new(button: ButtonId, config: SwitchConfig) -> Self {
        Self {
            emitter: EventEmitter::new(button),
            state: ButtonState::Idle,
            timer: StateTimer::new(),
            active: config,
            pending: config,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn button(&self) -> ButtonId {
        self.emitter.button()
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Ticks spent in the current state.
    pub fn state_duration(&self) -> u32 {
        self.timer.elapsed()
    }

    /// Configuration in force for the gesture being recognized.
    pub fn config(&self) -> &SwitchConfig {
        &self.active
    }

    /// Most recently written configuration (may not be in force yet).
    pub fn pending_config(&self) -> &SwitchConfig {
        &self.pending
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    // ── Configuration surface ─────────────────────────────────
    //
    // None of these reset the machine.

    pub fn set_switch_type(&mut self, switch_type: SwitchType) {
        self.update_config(|c| c.switch_type = switch_type);
    }

    pub fn set_local_switch_mode(&mut self, mode: LocalSwitchMode) {
        self.update_config(|c| c.local_mode = mode);
    }

    pub fn set_max_pause(&mut self, ticks: u16) {
        self.update_config(|c| c.max_pause = ticks);
    }

    pub fn set_min_long_press(&mut self, ticks: u16) {
        self.update_config(|c| c.long_press = ticks);
    }

    /// Replace the whole configuration (e.g. after loading it from flash).
    pub fn set_config(&mut self, config: SwitchConfig) {
        self.update_config(|c| *c = config);
    }

    /// Apply one attribute write from the configuration cluster.
    pub fn apply_attribute(&mut self, attr: SwitchAttribute) {
        self.update_config(|c| c.apply(attr));
        if let Err(e) = self.pending.validate() {
            warn!("{}: attribute 0x{:04x} accepted, but {}", self.button(), attr.id(), e);
        }
    }

    // ── Inbound signals ───────────────────────────────────────

    /// Debounced edge from the hardware layer.
    ///
    /// Edges that do not move the machine (a second "pressed" while already
    /// down, a "released" while up) are dropped and recorded as diagnostics.
    pub fn handle_button_state(&mut self, pressed: bool, queue: &mut impl EventQueue) {
        let step = policies::on_edge(
            self.active.switch_type,
            self.state,
            pressed,
            &self.timer,
            &self.active,
        );

        if step == Step::Ignore {
            warn!(
                "{}: ignoring {} edge in {}",
                self.button(),
                if pressed { "press" } else { "release" },
                self.state.name()
            );
            self.diagnostics.record(Diagnostic::IgnoredEdge {
                state: self.state,
                pressed,
            });
            return;
        }

        self.apply(step, queue);
    }

    /// Periodic tick: advance the state timer and evaluate timeouts.
    pub fn tick(&mut self, queue: &mut impl EventQueue) {
        if self.state == ButtonState::Idle {
            return;
        }

        self.timer.advance();
        let step = policies::on_tick(self.active.switch_type, self.state, &self.timer, &self.active);
        self.apply(step, queue);
    }

    /// Abort any gesture in progress.  Emits nothing.
    pub fn reset_button_state_machine(&mut self) {
        if self.state != ButtonState::Idle {
            self.change_state(ButtonState::Idle);
        } else {
            self.timer.reset();
            self.latch_config();
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply(&mut self, step: Step, queue: &mut impl EventQueue) {
        match step {
            Step::Stay | Step::Ignore => {}
            Step::Reset => {
                warn!(
                    "{}: {} is not used by {:?}, resetting",
                    self.button(),
                    self.state.name(),
                    self.active.switch_type
                );
                self.diagnostics
                    .record(Diagnostic::ForcedReset { state: self.state });
                self.reset_button_state_machine();
            }
            Step::Transition { next, event } => {
                // Snapshot before change_state may latch a new config.
                let front_edge = self.state == ButtonState::Idle && next != ButtonState::Idle;
                let policy = self.active.switch_type;
                let local_mode = self.active.local_mode;

                self.change_state(next);

                if let Some(kind) = event {
                    self.send(kind, queue);
                }
                if policy != SwitchType::Toggle && local_mode.triggers(event, front_edge) {
                    self.send(ButtonEventKind::SwitchTrigger, queue);
                }
            }
        }
    }

    fn change_state(&mut self, next: ButtonState) {
        debug!("{}: {} -> {}", self.button(), self.state.name(), next.name());
        self.state = next;
        self.timer.reset();

        if next == ButtonState::Idle {
            self.latch_config();
        }
    }

    fn send(&mut self, kind: ButtonEventKind, queue: &mut impl EventQueue) {
        match self.emitter.send_button_event(kind, queue) {
            Ok(()) => self.diagnostics.count_sent(),
            Err(reason) => self
                .diagnostics
                .record(Diagnostic::EventDropped { kind, reason }),
        }
    }

    fn update_config(&mut self, f: impl FnOnce(&mut SwitchConfig)) {
        f(&mut self.pending);
        if self.state == ButtonState::Idle {
            self.latch_config();
        } else {
            debug!(
                "{}: config change deferred until {} completes",
                self.button(),
                self.state.name()
            );
        }
    }

    fn latch_config(&mut self) {
        if self.active != self.pending {
            info!("{}: config now {:?}", self.button(), self.pending);
            self.active = self.pending;
        }
    }
}
