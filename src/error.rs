//! Unified error types for the SmartSwitch firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! caller's error handling uniform.  All variants are `Copy` so they can be
//! passed through the gesture core and diagnostics without allocation.
//!
//! None of these are fatal: the gesture core recovers from every one of them
//! locally and at most one gesture event is lost.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A configuration value or attribute write was rejected.
    Config(ConfigError),
    /// The outbound event queue refused an event.
    Queue(QueueError),
    /// No button handler is registered under this id.
    UnknownButton(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Queue(e) => write!(f, "queue: {e}"),
            Self::UnknownButton(id) => write!(f, "unknown button {id}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Attribute id outside the switch configuration cluster.
    UnknownAttribute(u16),
    /// Enumerated attribute written with an out-of-range index.
    InvalidValue { id: u16, value: u16 },
    /// Attribute payload could not be parsed.
    Malformed,
    /// Long press fires before the multi-press pause can elapse.
    LongPressWithinPause { long_press: u16, max_pause: u16 },
    /// Settings blob could not be encoded (buffer too small).
    EncodeFailed,
    /// Settings blob could not be decoded.
    DecodeFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute(id) => write!(f, "unknown attribute 0x{id:04x}"),
            Self::InvalidValue { id, value } => {
                write!(f, "invalid value {value} for attribute 0x{id:04x}")
            }
            Self::Malformed => write!(f, "malformed attribute payload"),
            Self::LongPressWithinPause {
                long_press,
                max_pause,
            } => write!(
                f,
                "long press ({long_press} ticks) does not exceed max pause ({max_pause} ticks)"
            ),
            Self::EncodeFailed => write!(f, "settings encode failed"),
            Self::DecodeFailed => write!(f, "settings decode failed"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Event queue errors
// ---------------------------------------------------------------------------

/// Why the outbound queue did not take an event.  Both are recoverable:
/// the event is dropped and the signal path carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Queue at capacity.
    Full,
    /// Consumer side is gone or not yet attached.
    Closed,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "event queue full"),
            Self::Closed => write!(f, "event queue closed"),
        }
    }
}

impl From<QueueError> for Error {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
