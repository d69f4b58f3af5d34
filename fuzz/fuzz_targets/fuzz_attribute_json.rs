//! Fuzz target: attribute and settings-blob decoding
//!
//! Arbitrary bytes as coordinator JSON and as a stored settings blob.
//! Decoding must fail with a typed error, never panic, and anything that
//! decodes must encode back within `CONFIG_BLOB_MAX`.
//!
//! cargo fuzz run fuzz_attribute_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartswitch::config::{CONFIG_BLOB_MAX, SwitchAttribute, SwitchConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(attr) = SwitchAttribute::from_json(text) {
            let mut config = SwitchConfig::default();
            config.apply(attr);
            let _ = config.validate();
        }
    }

    if let Ok(config) = SwitchConfig::from_bytes(data) {
        let mut buf = [0u8; CONFIG_BLOB_MAX];
        let bytes = config.to_bytes(&mut buf).expect("decoded config must re-encode");
        assert_eq!(SwitchConfig::from_bytes(bytes).ok(), Some(config));
    }
});
