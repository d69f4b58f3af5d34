//! Fuzz target: `ButtonHandler` signal path
//!
//! Each input byte is one command for the handler: an edge, a burst of
//! ticks, a raw attribute write or a reset.  Asserts that the machine never
//! panics, never needs a forced reset, and always reads zero duration while
//! Idle.
//!
//! cargo fuzz run fuzz_button_edges

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartswitch::config::{SwitchAttribute, SwitchConfig};
use smartswitch::events::{ButtonEventQueue, ButtonId};
use smartswitch::fsm::{ButtonHandler, ButtonState};

const ATTRIBUTE_IDS: [u16; 8] = [
    SwitchAttribute::SWITCH_TYPE_ID,
    SwitchAttribute::RELAY_MODE_ID,
    SwitchAttribute::MAX_PAUSE_ID,
    SwitchAttribute::MIN_LONG_PRESS_ID,
    SwitchAttribute::SWITCH_ACTIONS_ID,
    SwitchAttribute::LONG_PRESS_MODE_ID,
    0x0011,
    0xff05,
];

fuzz_target!(|data: &[u8]| {
    let mut handler = ButtonHandler::new(ButtonId(0), SwitchConfig::default());
    let mut queue: ButtonEventQueue<4> = ButtonEventQueue::new();

    for &byte in data {
        let arg = byte & 0x3f;
        match byte >> 6 {
            0 => handler.handle_button_state(arg & 1 == 1, &mut queue),
            1 => {
                for _ in 0..arg {
                    handler.tick(&mut queue);
                }
            }
            2 => {
                // Every writable id plus two unknown ones; out-of-range
                // enum values are rejected by the decoder.
                let id = ATTRIBUTE_IDS[usize::from(arg >> 3)];
                if let Ok(attr) = SwitchAttribute::from_raw(id, u16::from(arg & 0x07)) {
                    handler.apply_attribute(attr);
                }
            }
            _ => handler.reset_button_state_machine(),
        }

        if handler.state() == ButtonState::Idle {
            assert_eq!(handler.state_duration(), 0);
        }
        // Keep the queue from filling so drops stay the exception.
        if byte == 0xff {
            queue.drain(|_| {});
        }
    }

    assert_eq!(handler.diagnostics().forced_resets(), 0);
});
