//! SmartSwitch firmware entry point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  GPIO ──▶ SwitchInput (debounce) ──edge──┐                   │
//! │                                          ▼                   │
//! │  10 ms loop ──tick──────────────▶ SwitchService ──▶ Queue ──▶ Dispatcher
//! │                                   (ButtonHandler × N)        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};

use smartswitch::adapters::log_sink::LogEventSink;
use smartswitch::app::service::SwitchService;
use smartswitch::config::{SwitchConfig, TICK_MS};
use smartswitch::drivers::switch_input::{DEFAULT_DEBOUNCE_SAMPLES, SwitchInput};
use smartswitch::events::{ButtonEventQueue, ButtonId};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("SmartSwitch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Button input (active-low, internal pull-up) ────────
    let peripherals = Peripherals::take()?;
    let mut pin = PinDriver::input(peripherals.pins.gpio9)?;
    pin.set_pull(Pull::Up)?;
    let mut input = SwitchInput::new(pin, true, DEFAULT_DEBOUNCE_SAMPLES);

    // ── 3. Gesture core ───────────────────────────────────────
    // Stored settings are restored by the Zigbee stack through
    // SwitchCommand::LoadConfig; until then the defaults apply.
    let button = ButtonId(0);
    let mut service = SwitchService::new([SwitchConfig::default()]);
    let mut queue: ButtonEventQueue = ButtonEventQueue::new();
    let mut dispatcher = LogEventSink::new();

    info!("System ready. Entering event loop ({} ms tick).", TICK_MS);

    // ── 4. Event loop ─────────────────────────────────────────
    loop {
        let edge = input
            .poll()
            .map_err(|e| anyhow::anyhow!("GPIO read failed: {:?}", e))?;
        if let Some(pressed) = edge {
            if let Err(e) = service.handle_edge(button, pressed, &mut queue) {
                warn!("edge dropped: {}", e);
            }
        }
        service.tick(&mut queue);

        let refused = queue.forward_to(&mut dispatcher);
        if refused > 0 {
            warn!("{} event(s) refused by the dispatcher", refused);
        }

        FreeRtos::delay_ms(TICK_MS);
    }
}
