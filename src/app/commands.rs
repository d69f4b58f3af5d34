//! Inbound commands to the switch service.
//!
//! These represent actions requested by the outside world (Zigbee
//! configuration cluster, serial console) that the
//! [`SwitchService`](super::service::SwitchService) interprets.

use crate::config::{SwitchAttribute, SwitchConfig};
use crate::events::ButtonId;

/// Commands that external adapters can send into the switch core.
#[derive(Debug, Clone, Copy)]
pub enum SwitchCommand {
    /// Attribute write from the configuration cluster.
    WriteAttribute { button: ButtonId, attr: SwitchAttribute },

    /// Replace a button's configuration (e.g. restored from flash).
    LoadConfig { button: ButtonId, config: SwitchConfig },

    /// Abort the gesture in progress on one button.
    ResetButton(ButtonId),

    /// Abort every gesture in progress.
    ResetAll,

    /// Zero the diagnostic counters of every button.
    ClearDiagnostics,
}
