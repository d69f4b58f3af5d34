//! Gesture classification end to end: edges and ticks in, events out.

use smartswitch::config::{LocalSwitchMode, SwitchConfig, SwitchType};
use smartswitch::events::ButtonEventKind::{self, *};
use smartswitch::fsm::ButtonState;

use crate::mock_queue::{Bench, RecordingQueue};

fn config(switch_type: SwitchType) -> SwitchConfig {
    SwitchConfig {
        switch_type,
        max_pause: 5,
        long_press: 20,
        ..SwitchConfig::default()
    }
}

fn multifunction() -> Bench {
    Bench::new(config(SwitchType::Multifunction))
}

// ── Multifunction ─────────────────────────────────────────────

#[test]
fn long_hold_finalizes_as_long_press_only() {
    let mut b = multifunction();
    b.press().ticks(25);
    assert_eq!(b.handler.state(), ButtonState::LongPress);
    b.release();

    assert_eq!(b.kinds(), [LongPressStart, LongPress]);
    assert_eq!(b.handler.state(), ButtonState::Idle);
}

#[test]
fn release_exactly_at_long_threshold_is_long() {
    let mut b = multifunction();
    b.click(20);
    assert_eq!(b.kinds(), [LongPressStart, LongPress]);
}

#[test]
fn release_just_before_long_threshold_is_short() {
    let mut b = multifunction();
    b.click(19).ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);
}

#[test]
fn second_press_within_pause_is_double() {
    let mut b = multifunction();
    b.click(1).ticks(4).click(1);
    assert!(b.kinds().is_empty(), "nothing final until the pause expires");
    b.ticks(6);
    assert_eq!(b.kinds(), [DoublePress]);
    assert_eq!(b.handler.state(), ButtonState::Idle);
}

#[test]
fn second_press_exactly_at_pause_boundary_is_double() {
    let mut b = multifunction();
    b.click(1).ticks(5).click(1).ticks(6);
    assert_eq!(b.kinds(), [DoublePress]);
}

#[test]
fn second_press_after_pause_is_two_singles() {
    let mut b = multifunction();
    b.click(1).ticks(6);
    assert_eq!(b.kinds(), [SinglePress], "first press finalized on its own");
    assert_eq!(b.handler.state(), ButtonState::Idle);

    b.click(1).ticks(6);
    assert_eq!(b.kinds(), [SinglePress, SinglePress]);
}

#[test]
fn three_quick_presses_are_triple_on_release() {
    let mut b = multifunction();
    b.click(1).ticks(2).click(1).ticks(2).press();
    assert_eq!(b.handler.state(), ButtonState::Pressed3);
    b.ticks(1).release();
    assert_eq!(b.kinds(), [TriplePress]);
    assert_eq!(b.handler.state(), ButtonState::Idle);
}

#[test]
fn fourth_press_starts_a_new_gesture() {
    let mut b = multifunction();
    b.click(1).ticks(1).click(1).ticks(1).click(1);
    b.click(1).ticks(6);
    assert_eq!(b.kinds(), [TriplePress, SinglePress]);
}

#[test]
fn duplicate_release_in_pause_keeps_counting_down() {
    let mut b = multifunction();
    b.click(1).ticks(3).release();
    assert_eq!(b.handler.state(), ButtonState::Pause1);
    assert_eq!(b.handler.state_duration(), 3);
    assert_eq!(b.handler.diagnostics().ignored_edges(), 1);

    b.ticks(3);
    assert_eq!(b.kinds(), [SinglePress]);
}

#[test]
fn duplicate_press_does_not_count_twice() {
    let mut b = multifunction();
    b.press().press().ticks(1).release().ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);
}

#[test]
fn long_hold_on_second_press_is_not_long() {
    let mut b = multifunction();
    b.click(1).ticks(1).click(50).ticks(6);
    assert_eq!(b.kinds(), [DoublePress]);
}

#[test]
fn zero_pause_reports_single_on_release() {
    let mut b = Bench::new(SwitchConfig {
        max_pause: 0,
        ..config(SwitchType::Multifunction)
    });
    b.click(1);
    assert_eq!(b.kinds(), [SinglePress]);
    assert_eq!(b.handler.state(), ButtonState::Idle);
}

#[test]
fn zero_long_press_never_fires() {
    let mut b = Bench::new(SwitchConfig {
        long_press: 0,
        ..config(SwitchType::Multifunction)
    });
    b.click(10_000).ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);
}

// ── Toggle ────────────────────────────────────────────────────

#[test]
fn toggle_one_event_per_press_release_pair() {
    let mut b = Bench::new(config(SwitchType::Toggle));
    for held in [0, 1, 5, 20, 500] {
        b.queue.clear();
        b.click(held).ticks(10);
        assert_eq!(b.kinds(), [Toggle], "held {held} ticks");
        assert_eq!(b.handler.state(), ButtonState::Idle);
    }
}

#[test]
fn toggle_fires_on_press_edge() {
    let mut b = Bench::new(config(SwitchType::Toggle));
    b.press();
    assert_eq!(b.kinds(), [Toggle]);
    b.release();
    assert_eq!(b.kinds(), [Toggle]);
}

#[test]
fn toggle_rapid_presses_are_not_counted_together() {
    let mut b = Bench::new(config(SwitchType::Toggle));
    b.click(1).click(1).click(1);
    assert_eq!(b.kinds(), [Toggle, Toggle, Toggle]);
}

// ── Momentary ─────────────────────────────────────────────────

#[test]
fn momentary_down_and_up_on_edges() {
    let mut b = Bench::new(config(SwitchType::Momentary));
    b.press();
    assert_eq!(b.kinds(), [Pressed]);
    b.ticks(3).release();
    assert_eq!(b.kinds(), [Pressed, Released]);
    assert_eq!(b.handler.state(), ButtonState::Idle);

    // No pause window: the next press is reported straight away.
    b.press();
    assert_eq!(b.kinds(), [Pressed, Released, Pressed]);
}

#[test]
fn momentary_long_hold_still_reports_up() {
    let mut b = Bench::new(config(SwitchType::Momentary));
    b.click(30);
    assert_eq!(b.kinds(), [Pressed, LongPressStart, Released]);
}

// ── Reset ─────────────────────────────────────────────────────

fn drive_to(state: ButtonState) -> Bench {
    let mut b = multifunction();
    match state {
        ButtonState::Idle => {}
        ButtonState::Pressed1 => {
            b.press().ticks(2);
        }
        ButtonState::Pause1 => {
            b.click(1).ticks(2);
        }
        ButtonState::Pressed2 => {
            b.click(1).ticks(1).press();
        }
        ButtonState::Pause2 => {
            b.click(1).ticks(1).click(1);
        }
        ButtonState::Pressed3 => {
            b.click(1).ticks(1).click(1).ticks(1).press();
        }
        ButtonState::LongPress => {
            b.press().ticks(21);
        }
    }
    assert_eq!(b.handler.state(), state);
    b
}

#[test]
fn reset_from_every_state_is_idle_and_silent() {
    for state in ButtonState::ALL {
        let mut b = drive_to(state);
        let before = b.kinds();

        b.handler.reset_button_state_machine();
        assert_eq!(b.handler.state(), ButtonState::Idle, "from {state:?}");
        assert_eq!(b.handler.state_duration(), 0, "from {state:?}");

        b.ticks(50);
        assert_eq!(b.kinds(), before, "reset from {state:?} emitted an event");
    }
}

// ── Repeatability ─────────────────────────────────────────────

fn double_click(b: &mut Bench) -> Vec<ButtonEventKind> {
    b.queue.clear();
    b.click(1).ticks(3).click(1).ticks(10);
    b.kinds()
}

#[test]
fn reconfigure_and_repeat_gives_same_classification() {
    let mut b = multifunction();
    let first = double_click(&mut b);

    b.handler.set_max_pause(2);
    b.handler.set_switch_type(SwitchType::Toggle);
    b.handler.set_config(config(SwitchType::Multifunction));
    let second = double_click(&mut b);

    assert_eq!(first, [DoublePress]);
    assert_eq!(first, second);
}

// ── Local switch linkage ──────────────────────────────────────

#[test]
fn linked_gesture_adds_switch_trigger() {
    let mut b = multifunction();
    b.handler.set_local_switch_mode(LocalSwitchMode::Double);

    b.click(1).ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);

    b.queue.clear();
    b.click(1).ticks(1).click(1).ticks(6);
    assert_eq!(b.kinds(), [DoublePress, SwitchTrigger]);
}

#[test]
fn long_linked_triggers_on_release() {
    let mut b = multifunction();
    b.handler.set_local_switch_mode(LocalSwitchMode::Long);
    b.click(25);
    assert_eq!(b.kinds(), [LongPressStart, LongPress, SwitchTrigger]);
}

#[test]
fn front_linked_multifunction_triggers_on_first_press() {
    let mut b = multifunction();
    b.handler.set_local_switch_mode(LocalSwitchMode::Front);
    b.press();
    assert_eq!(b.kinds(), [SwitchTrigger]);
    b.ticks(1).release().ticks(6);
    assert_eq!(b.kinds(), [SwitchTrigger, SinglePress]);
}

// ── Queue pressure ────────────────────────────────────────────

#[test]
fn full_queue_drops_events_but_machine_keeps_going() {
    let mut b = Bench {
        handler: multifunction().handler,
        queue: RecordingQueue::bounded(1),
    };

    b.click(1).ticks(6);
    b.click(1).ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);
    assert_eq!(b.handler.state(), ButtonState::Idle);
    assert_eq!(b.handler.diagnostics().events_sent(), 1);
    assert_eq!(b.handler.diagnostics().events_dropped(), 1);

    // Room again: the next gesture goes through.
    b.queue.clear();
    b.click(1).ticks(1).click(1).ticks(6);
    assert_eq!(b.kinds(), [DoublePress]);
}
