//! Transition policies, one per [`SwitchType`].
//!
//! Each policy is a pair of plain functions: one for signal edges, one for
//! tick timeouts.  They read the current state, the per-state timer and the
//! active configuration and return a [`Step`]; they never mutate anything.
//! [`ButtonHandler`](super::ButtonHandler) applies the step.
//!
//! ```text
//!  Multifunction
//!
//!  IDLE ──press──▶ PRESSED1 ──release──▶ PAUSE1 ──press──▶ PRESSED2
//!                     │                    │                  │
//!                [>= long]            [> pause]            release
//!                     ▼                    ▼                  ▼
//!                LONG_PRESS           single ─▶ IDLE       PAUSE2 ──press──▶ PRESSED3
//!                     │                                       │                  │
//!                  release                               [> pause]           release
//!                     ▼                                       ▼                  ▼
//!               long ─▶ IDLE                          double ─▶ IDLE     triple ─▶ IDLE
//! ```

use crate::config::{SwitchConfig, SwitchType};
use crate::events::ButtonEventKind;

use super::ButtonState;
use super::timing::StateTimer;

/// Outcome of feeding one edge or tick to a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do.
    Stay,
    /// The edge means nothing in this state; drop it.
    Ignore,
    /// Move to `next`, emitting `event` on the way.
    Transition {
        next: ButtonState,
        event: Option<ButtonEventKind>,
    },
    /// The policy never enters this state; recover to Idle.
    Reset,
}

const fn go(next: ButtonState) -> Step {
    Step::Transition { next, event: None }
}

const fn finish(event: ButtonEventKind) -> Step {
    Step::Transition {
        next: ButtonState::Idle,
        event: Some(event),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Dispatch
// ═══════════════════════════════════════════════════════════════════════════

/// Route a debounced edge to the active policy.
pub fn on_edge(
    policy: SwitchType,
    state: ButtonState,
    pressed: bool,
    timer: &StateTimer,
    cfg: &SwitchConfig,
) -> Step {
    match policy {
        SwitchType::Toggle => toggle_edge(state, pressed),
        SwitchType::Momentary => momentary_edge(state, pressed),
        SwitchType::Multifunction => multifunction_edge(state, pressed, timer, cfg),
    }
}

/// Route a tick timeout check to the active policy.
pub fn on_tick(
    policy: SwitchType,
    state: ButtonState,
    timer: &StateTimer,
    cfg: &SwitchConfig,
) -> Step {
    match policy {
        SwitchType::Toggle => toggle_tick(state),
        SwitchType::Momentary => momentary_tick(state, timer, cfg),
        SwitchType::Multifunction => multifunction_tick(state, timer, cfg),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  TOGGLE: one event per press, no counting
// ═══════════════════════════════════════════════════════════════════════════

fn toggle_edge(state: ButtonState, pressed: bool) -> Step {
    match (state, pressed) {
        (ButtonState::Idle, true) => Step::Transition {
            next: ButtonState::Pressed1,
            event: Some(ButtonEventKind::Toggle),
        },
        (ButtonState::Pressed1, false) => go(ButtonState::Idle),
        (ButtonState::Idle | ButtonState::Pressed1, _) => Step::Ignore,
        _ => Step::Reset,
    }
}

fn toggle_tick(state: ButtonState) -> Step {
    match state {
        ButtonState::Idle | ButtonState::Pressed1 => Step::Stay,
        _ => Step::Reset,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MOMENTARY: down / up, long hold reported but never blocks "up"
// ═══════════════════════════════════════════════════════════════════════════

fn momentary_edge(state: ButtonState, pressed: bool) -> Step {
    match (state, pressed) {
        (ButtonState::Idle, true) => Step::Transition {
            next: ButtonState::Pressed1,
            event: Some(ButtonEventKind::Pressed),
        },
        (ButtonState::Pressed1 | ButtonState::LongPress, false) => {
            finish(ButtonEventKind::Released)
        }
        (ButtonState::Idle | ButtonState::Pressed1 | ButtonState::LongPress, _) => Step::Ignore,
        _ => Step::Reset,
    }
}

fn momentary_tick(state: ButtonState, timer: &StateTimer, cfg: &SwitchConfig) -> Step {
    match state {
        ButtonState::Pressed1 if timer.reached(cfg.long_press) => Step::Transition {
            next: ButtonState::LongPress,
            event: Some(ButtonEventKind::LongPressStart),
        },
        ButtonState::Idle | ButtonState::Pressed1 | ButtonState::LongPress => Step::Stay,
        _ => Step::Reset,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MULTIFUNCTION: single / double / triple / long
// ═══════════════════════════════════════════════════════════════════════════

fn multifunction_edge(
    state: ButtonState,
    pressed: bool,
    timer: &StateTimer,
    cfg: &SwitchConfig,
) -> Step {
    match (state, pressed) {
        (ButtonState::Idle, true) => go(ButtonState::Pressed1),

        // Release on the very tick the threshold is reached is still long.
        (ButtonState::Pressed1, false) if timer.reached(cfg.long_press) => {
            finish(ButtonEventKind::LongPress)
        }
        (ButtonState::Pressed1, false) => after_release(cfg, ButtonState::Pause1, ButtonEventKind::SinglePress),
        (ButtonState::Pause1, true) => go(ButtonState::Pressed2),
        (ButtonState::Pressed2, false) => after_release(cfg, ButtonState::Pause2, ButtonEventKind::DoublePress),
        (ButtonState::Pause2, true) => go(ButtonState::Pressed3),
        (ButtonState::Pressed3, false) => finish(ButtonEventKind::TriplePress),
        (ButtonState::LongPress, false) => finish(ButtonEventKind::LongPress),

        // Press while down, release while up.
        _ => Step::Ignore,
    }
}

/// With no pause window there is nothing to wait for.
fn after_release(cfg: &SwitchConfig, pause: ButtonState, gesture: ButtonEventKind) -> Step {
    if cfg.max_pause == 0 {
        finish(gesture)
    } else {
        go(pause)
    }
}

fn multifunction_tick(state: ButtonState, timer: &StateTimer, cfg: &SwitchConfig) -> Step {
    match state {
        ButtonState::Pressed1 if timer.reached(cfg.long_press) => Step::Transition {
            next: ButtonState::LongPress,
            event: Some(ButtonEventKind::LongPressStart),
        },
        // A press landing exactly on `max_pause` still counts, so expire
        // only once the pause is strictly longer.
        ButtonState::Pause1 if timer.exceeded(cfg.max_pause) => finish(ButtonEventKind::SinglePress),
        ButtonState::Pause2 if timer.exceeded(cfg.max_pause) => finish(ButtonEventKind::DoublePress),
        _ => Step::Stay,
    }
}
