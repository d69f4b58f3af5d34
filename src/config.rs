//! Switch configuration parameters
//!
//! Per-button tunables: which transition policy runs the gesture machine,
//! which gesture drives the local relay, and the two timing thresholds.
//! The on/off action pair and the long-press level-control mode are stored
//! and persisted for the application layer; the gesture core ignores them.
//! Values arrive from the Zigbee configuration cluster (see
//! [`SwitchAttribute`]) and are persisted as a postcard blob.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::events::ButtonEventKind;

/// Period of the gesture tick in milliseconds.  All thresholds are counted
/// in ticks of this length.
pub const TICK_MS: u32 = 10;

/// Upper bound for an encoded [`SwitchConfig`] blob.
pub const CONFIG_BLOB_MAX: usize = 16;

// ---------------------------------------------------------------------------
// Switch type
// ---------------------------------------------------------------------------

/// Transition policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SwitchType {
    /// Every press flips the switch; multi-press counting disabled.
    #[default]
    Toggle = 0,
    /// Press and release are reported separately.
    Momentary = 1,
    /// Single / double / triple / long press discrimination.
    Multifunction = 2,
}

impl SwitchType {
    /// Decode the enum8 attribute value.
    pub fn from_index(idx: u16) -> Option<Self> {
        match idx {
            0 => Some(Self::Toggle),
            1 => Some(Self::Momentary),
            2 => Some(Self::Multifunction),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Local switch mode
// ---------------------------------------------------------------------------

/// Which gesture, if any, also operates the device's own relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LocalSwitchMode {
    /// Relay is driven only by remote commands.
    #[default]
    Unlinked = 0,
    /// Leading edge of the first press.
    Front = 1,
    Single = 2,
    Double = 3,
    #[serde(rename = "tripple")]
    Triple = 4,
    Long = 5,
}

impl LocalSwitchMode {
    pub fn from_index(idx: u16) -> Option<Self> {
        match idx {
            0 => Some(Self::Unlinked),
            1 => Some(Self::Front),
            2 => Some(Self::Single),
            3 => Some(Self::Double),
            4 => Some(Self::Triple),
            5 => Some(Self::Long),
            _ => None,
        }
    }

    /// Whether a transition should also fire the local relay.
    ///
    /// `front_edge` is true for the press that leaves Idle; `event` is the
    /// gesture event emitted on the same transition, if any.
    pub fn triggers(self, event: Option<ButtonEventKind>, front_edge: bool) -> bool {
        match self {
            Self::Unlinked => false,
            Self::Front => front_edge,
            Self::Single => event == Some(ButtonEventKind::SinglePress),
            Self::Double => event == Some(ButtonEventKind::DoublePress),
            Self::Triple => event == Some(ButtonEventKind::TriplePress),
            Self::Long => event == Some(ButtonEventKind::LongPress),
        }
    }
}

// ---------------------------------------------------------------------------
// Application-side modes
// ---------------------------------------------------------------------------

/// On/off commands bound to press and release (standard `switchActions`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum SwitchActions {
    /// On when pressed, off when released.
    #[default]
    OnOff = 0,
    /// Off when pressed, on when released.
    OffOn = 1,
    Toggle = 2,
}

impl SwitchActions {
    pub fn from_index(idx: u16) -> Option<Self> {
        match idx {
            0 => Some(Self::OnOff),
            1 => Some(Self::OffOn),
            2 => Some(Self::Toggle),
            _ => None,
        }
    }
}

/// Level-control command sent while a long press is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum LongPressMode {
    #[default]
    None = 0,
    LevelCtrlUp = 1,
    LevelCtrlDown = 2,
}

impl LongPressMode {
    pub fn from_index(idx: u16) -> Option<Self> {
        match idx {
            0 => Some(Self::None),
            1 => Some(Self::LevelCtrlUp),
            2 => Some(Self::LevelCtrlDown),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-button configuration
// ---------------------------------------------------------------------------

/// Complete configuration of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchConfig {
    pub switch_type: SwitchType,
    pub local_mode: LocalSwitchMode,
    /// Longest gap between presses of one multi-press gesture (ticks).
    /// Zero disables multi-press counting.
    pub max_pause: u16,
    /// Shortest hold classified as a long press (ticks).  Zero disables
    /// long-press detection.
    pub long_press: u16,
    pub switch_actions: SwitchActions,
    pub long_press_mode: LongPressMode,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            switch_type: SwitchType::Toggle,
            local_mode: LocalSwitchMode::Unlinked,
            max_pause: 25,   // 250 ms
            long_press: 100, // 1 s
            switch_actions: SwitchActions::OnOff,
            long_press_mode: LongPressMode::None,
        }
    }
}

impl SwitchConfig {
    /// Flag combinations that work but will surprise the user.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press != 0 && self.long_press <= self.max_pause {
            return Err(ConfigError::LongPressWithinPause {
                long_press: self.long_press,
                max_pause: self.max_pause,
            });
        }
        Ok(())
    }

    /// Encode into `buf` for persistent storage.
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::EncodeFailed)
    }

    /// Decode a blob previously produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::DecodeFailed)
    }

    /// Apply a single attribute write.
    pub fn apply(&mut self, attr: SwitchAttribute) {
        match attr {
            SwitchAttribute::SwitchType(t) => self.switch_type = t,
            SwitchAttribute::RelayMode(m) => self.local_mode = m,
            SwitchAttribute::MaxPause(v) => self.max_pause = v,
            SwitchAttribute::MinLongPress(v) => self.long_press = v,
            SwitchAttribute::SwitchActions(a) => self.switch_actions = a,
            SwitchAttribute::LongPressMode(m) => self.long_press_mode = m,
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute surface
// ---------------------------------------------------------------------------

/// Writable attributes of the on/off switch configuration cluster: the
/// standard `switchActions` plus the manufacturer-specific ones.
///
/// The JSON form is a single-key object as published by the coordinator,
/// e.g. `{"switch_type":"multifunction"}` or `{"max_pause":30}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchAttribute {
    SwitchType(SwitchType),
    RelayMode(LocalSwitchMode),
    MaxPause(u16),
    MinLongPress(u16),
    SwitchActions(SwitchActions),
    LongPressMode(LongPressMode),
}

impl SwitchAttribute {
    pub const SWITCH_TYPE_ID: u16 = 0xff00;
    pub const RELAY_MODE_ID: u16 = 0xff01;
    pub const MAX_PAUSE_ID: u16 = 0xff02;
    pub const MIN_LONG_PRESS_ID: u16 = 0xff03;
    pub const LONG_PRESS_MODE_ID: u16 = 0xff04;
    /// Standard cluster attribute, not manufacturer-specific.
    pub const SWITCH_ACTIONS_ID: u16 = 0x0010;

    /// Attribute id on the wire.
    pub fn id(&self) -> u16 {
        match self {
            Self::SwitchType(_) => Self::SWITCH_TYPE_ID,
            Self::RelayMode(_) => Self::RELAY_MODE_ID,
            Self::MaxPause(_) => Self::MAX_PAUSE_ID,
            Self::MinLongPress(_) => Self::MIN_LONG_PRESS_ID,
            Self::SwitchActions(_) => Self::SWITCH_ACTIONS_ID,
            Self::LongPressMode(_) => Self::LONG_PRESS_MODE_ID,
        }
    }

    /// Decode a raw attribute write (enum8 / uint16 payload).
    pub fn from_raw(id: u16, value: u16) -> Result<Self, ConfigError> {
        match id {
            Self::SWITCH_TYPE_ID => SwitchType::from_index(value)
                .map(Self::SwitchType)
                .ok_or(ConfigError::InvalidValue { id, value }),
            Self::RELAY_MODE_ID => LocalSwitchMode::from_index(value)
                .map(Self::RelayMode)
                .ok_or(ConfigError::InvalidValue { id, value }),
            Self::MAX_PAUSE_ID => Ok(Self::MaxPause(value)),
            Self::MIN_LONG_PRESS_ID => Ok(Self::MinLongPress(value)),
            Self::SWITCH_ACTIONS_ID => SwitchActions::from_index(value)
                .map(Self::SwitchActions)
                .ok_or(ConfigError::InvalidValue { id, value }),
            Self::LONG_PRESS_MODE_ID => LongPressMode::from_index(value)
                .map(Self::LongPressMode)
                .ok_or(ConfigError::InvalidValue { id, value }),
            _ => Err(ConfigError::UnknownAttribute(id)),
        }
    }

    /// Parse the coordinator's JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|_| ConfigError::Malformed)
    }
}
