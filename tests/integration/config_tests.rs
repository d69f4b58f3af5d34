//! Configuration surface: attribute writes, persistence, deferred latching.

use smartswitch::app::commands::SwitchCommand;
use smartswitch::app::service::SwitchService;
use smartswitch::config::{
    CONFIG_BLOB_MAX, LocalSwitchMode, LongPressMode, SwitchActions, SwitchAttribute, SwitchConfig,
    SwitchType,
};
use smartswitch::error::ConfigError;
use smartswitch::events::ButtonEventKind::*;
use smartswitch::events::ButtonId;
use smartswitch::fsm::ButtonState;

use crate::mock_queue::{Bench, RecordingQueue};

const B0: ButtonId = ButtonId(0);

fn write(svc: &mut SwitchService<1>, json: &str) {
    let attr = SwitchAttribute::from_json(json).unwrap();
    svc.handle_command(SwitchCommand::WriteAttribute { button: B0, attr })
        .unwrap();
}

#[test]
fn coordinator_json_writes_reconfigure_the_button() {
    let mut svc = SwitchService::new([SwitchConfig::default()]);
    write(&mut svc, r#"{"switch_type":"multifunction"}"#);
    write(&mut svc, r#"{"max_pause":5}"#);
    write(&mut svc, r#"{"min_long_press":20}"#);
    write(&mut svc, r#"{"relay_mode":"single"}"#);

    let c = svc.handler(B0).unwrap().config();
    assert_eq!(c.switch_type, SwitchType::Multifunction);
    assert_eq!(c.local_mode, LocalSwitchMode::Single);
    assert_eq!((c.max_pause, c.long_press), (5, 20));

    let mut q = RecordingQueue::new();
    svc.handle_edge(B0, true, &mut q).unwrap();
    svc.handle_edge(B0, false, &mut q).unwrap();
    for _ in 0..6 {
        svc.tick(&mut q);
    }
    assert_eq!(q.kinds(), [SinglePress, SwitchTrigger]);
}

#[test]
fn raw_writes_decode_like_json() {
    let raw = SwitchAttribute::from_raw(SwitchAttribute::RELAY_MODE_ID, 4).unwrap();
    let json = SwitchAttribute::from_json(r#"{"relay_mode":"tripple"}"#).unwrap();
    assert_eq!(raw, json);
}

#[test]
fn undecodable_writes_never_reach_the_button() {
    let mut svc = SwitchService::new([SwitchConfig::default()]);
    let before = *svc.handler(B0).unwrap().config();

    for (id, value) in [(SwitchAttribute::RELAY_MODE_ID, 6), (0x0011, 1)] {
        if let Ok(attr) = SwitchAttribute::from_raw(id, value) {
            svc.handle_command(SwitchCommand::WriteAttribute { button: B0, attr })
                .unwrap();
        }
    }
    for json in [r#"{"switch_actions":"onOnOn"}"#, r#"{"unknown":1}"#] {
        if let Ok(attr) = SwitchAttribute::from_json(json) {
            svc.handle_command(SwitchCommand::WriteAttribute { button: B0, attr })
                .unwrap();
        }
    }

    assert_eq!(*svc.handler(B0).unwrap().config(), before);
    assert!(!svc.is_config_dirty());
}

#[test]
fn malformed_writes_fail_to_decode() {
    assert_eq!(
        SwitchAttribute::from_raw(SwitchAttribute::SWITCH_TYPE_ID, 3),
        Err(ConfigError::InvalidValue {
            id: SwitchAttribute::SWITCH_TYPE_ID,
            value: 3
        })
    );
    assert_eq!(
        SwitchAttribute::from_json(r#"{"switch_type":"dimmer"}"#),
        Err(ConfigError::Malformed)
    );
    assert_eq!(
        SwitchAttribute::from_json("not json"),
        Err(ConfigError::Malformed)
    );
}

#[test]
fn suspicious_thresholds_still_apply() {
    let mut b = Bench::new(SwitchConfig {
        switch_type: SwitchType::Multifunction,
        max_pause: 5,
        long_press: 20,
        ..SwitchConfig::default()
    });
    // Long press shorter than the pause window: warned, not refused.
    b.handler.apply_attribute(SwitchAttribute::MinLongPress(3));
    assert_eq!(b.handler.config().long_press, 3);
    assert!(b.handler.config().validate().is_err());

    b.click(3);
    assert_eq!(b.kinds(), [LongPressStart, LongPress]);
}

#[test]
fn write_during_gesture_waits_for_idle() {
    let mut b = Bench::new(SwitchConfig {
        switch_type: SwitchType::Multifunction,
        max_pause: 5,
        long_press: 20,
        ..SwitchConfig::default()
    });
    b.click(1);
    assert_eq!(b.handler.state(), ButtonState::Pause1);

    b.handler
        .apply_attribute(SwitchAttribute::SwitchType(SwitchType::Momentary));
    assert_eq!(b.handler.config().switch_type, SwitchType::Multifunction);

    // The gesture in flight finishes under the old rules.
    b.ticks(6);
    assert_eq!(b.kinds(), [SinglePress]);
    assert_eq!(b.handler.config().switch_type, SwitchType::Momentary);

    b.press();
    assert_eq!(b.kinds(), [SinglePress, Pressed]);
}

#[test]
fn persisted_blob_survives_reboot() {
    let mut svc = SwitchService::new([SwitchConfig::default()]);
    write(&mut svc, r#"{"switch_type":"momentary"}"#);
    write(&mut svc, r#"{"min_long_press":602}"#);
    write(&mut svc, r#"{"switch_actions":"offOn"}"#);
    write(&mut svc, r#"{"long_press_mode":"levelCtrlUp"}"#);
    assert!(svc.is_config_dirty());

    let mut blob = [0u8; CONFIG_BLOB_MAX];
    let saved = svc.configs()[0].to_bytes(&mut blob).unwrap().to_vec();
    svc.mark_config_saved();
    assert!(!svc.is_config_dirty());

    // Fresh boot with defaults, then restore.
    let mut rebooted = SwitchService::new([SwitchConfig::default()]);
    let config = SwitchConfig::from_bytes(&saved).unwrap();
    rebooted
        .handle_command(SwitchCommand::LoadConfig { button: B0, config })
        .unwrap();

    let restored = rebooted.handler(B0).unwrap().config();
    assert_eq!(restored, svc.handler(B0).unwrap().config());
    assert_eq!(restored.switch_actions, SwitchActions::OffOn);
    assert_eq!(restored.long_press_mode, LongPressMode::LevelCtrlUp);
    assert!(!rebooted.is_config_dirty(), "restoring is not a new write");
}

#[test]
fn application_modes_do_not_change_classification() {
    let cfg = SwitchConfig {
        switch_type: SwitchType::Multifunction,
        max_pause: 5,
        long_press: 20,
        ..SwitchConfig::default()
    };
    let mut plain = Bench::new(cfg);
    let mut tuned = Bench::new(SwitchConfig {
        switch_actions: SwitchActions::Toggle,
        long_press_mode: LongPressMode::LevelCtrlDown,
        ..cfg
    });
    for b in [&mut plain, &mut tuned] {
        b.click(1).ticks(2).click(1).ticks(6).click(25);
    }
    assert_eq!(plain.kinds(), [DoublePress, LongPressStart, LongPress]);
    assert_eq!(plain.kinds(), tuned.kinds());
}

#[test]
fn corrupted_blob_is_rejected() {
    assert_eq!(SwitchConfig::from_bytes(&[]), Err(ConfigError::DecodeFailed));
    assert_eq!(
        SwitchConfig::from_bytes(&[0x07, 0x00, 0x05, 0x14]),
        Err(ConfigError::DecodeFailed)
    );
}

#[test]
fn write_to_missing_button_fails() {
    let mut svc = SwitchService::new([SwitchConfig::default()]);
    let err = svc
        .handle_command(SwitchCommand::WriteAttribute {
            button: ButtonId(4),
            attr: SwitchAttribute::MaxPause(10),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown button 4");
    assert!(!svc.is_config_dirty());
}
