//! Polled switch input with sample-count debounce.
//!
//! ## Hardware
//!
//! Mechanical switch on a GPIO, either active-low with a pull-up (the usual
//! wall-switch wiring) or active-high.  [`SwitchInput::poll`] is called once
//! per gesture tick; a level change is reported only after the raw pin has
//! held the new level for `debounce_samples` consecutive polls.
//!
//! The gesture core expects clean edges and does not filter bounce itself,
//! so this is the layer that guarantees it.

use embedded_hal::digital::InputPin;

/// Default number of stable samples before an edge is reported
/// (3 × 10 ms tick = 30 ms).
pub const DEFAULT_DEBOUNCE_SAMPLES: u8 = 3;

pub struct SwitchInput<P> {
    pin: P,
    active_low: bool,
    debounce_samples: u8,
    /// Last debounced level reported to the caller.
    pressed: bool,
    /// Consecutive raw samples disagreeing with `pressed`.
    streak: u8,
}

impl<P: InputPin> SwitchInput<P> {
    /// `debounce_samples` of 0 or 1 reports every raw change immediately.
    pub fn new(pin: P, active_low: bool, debounce_samples: u8) -> Self {
        Self {
            pin,
            active_low,
            debounce_samples: debounce_samples.max(1),
            pressed: false,
            streak: 0,
        }
    }

    /// Debounced level as last reported.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Sample the pin.  Returns `Some(pressed)` when the debounced level
    /// changes, `None` otherwise.
    pub fn poll(&mut self) -> Result<Option<bool>, P::Error> {
        let raw = if self.active_low {
            self.pin.is_low()?
        } else {
            self.pin.is_high()?
        };

        if raw == self.pressed {
            self.streak = 0;
            return Ok(None);
        }

        self.streak += 1;
        if self.streak < self.debounce_samples {
            return Ok(None);
        }

        self.streak = 0;
        self.pressed = raw;
        Ok(Some(raw))
    }

    /// Give the pin back (e.g. to reconfigure it for deep-sleep wake).
    pub fn release(self) -> P {
        self.pin
    }
}
