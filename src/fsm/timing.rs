//! Per-state tick counter.
//!
//! Counts ticks since the current state was entered.  It only ever changes
//! through the owning [`ButtonHandler`](super::ButtonHandler), together with
//! the state itself, so no tick can pair a fresh state with a stale count.
//!
//! The counter saturates.  A wrapped counter would make an endless hold look
//! like a fresh short press; a saturated one reads as "every enabled
//! threshold passed".

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateTimer {
    ticks: u32,
}

impl StateTimer {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    pub fn advance(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    pub fn elapsed(&self) -> u32 {
        self.ticks
    }

    pub fn is_saturated(&self) -> bool {
        self.ticks == u32::MAX
    }

    /// `elapsed >= threshold` (inclusive).  A zero threshold is disabled.
    pub fn reached(&self, threshold: u16) -> bool {
        threshold != 0 && (self.is_saturated() || self.ticks >= u32::from(threshold))
    }

    /// `elapsed > threshold` (strict).  A zero threshold is disabled.
    pub fn exceeded(&self, threshold: u16) -> bool {
        threshold != 0 && (self.is_saturated() || self.ticks > u32::from(threshold))
    }
}
