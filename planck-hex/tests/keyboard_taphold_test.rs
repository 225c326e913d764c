pub mod common;

use embassy_time::{Duration, Instant};
use planck_hex::config::{BehaviorConfig, TapHoldConfig, TapHoldMode};
use planck_hex::event::KeyEvent;
use planck_hex::hex::{HexKeyboard, Variant};
use planck_hex::keyboard::TAP_HOLD_BUFFER_SIZE;

use crate::common::{KC_LSHIFT, keyboard_reports};

fn create_keyboard(mode: TapHoldMode) -> HexKeyboard {
    Variant::Grid.keyboard_with_config(BehaviorConfig {
        tap_hold: TapHoldConfig {
            hold_timeout: Duration::from_millis(200),
            mode,
        },
        ..Default::default()
    })
}

// Esc/Shift is at (2, 0), A is at (1, 1), O is at (1, 2)

#[test]
fn test_tap_escape() {
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [2, 0, true, 0],
            [2, 0, false, 100],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_hold_shift() {
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [2, 0, true, 0],
            [2, 0, false, 300],
        ],
        expected_reports: [
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_hold_shift_then_key() {
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 250],
            [1, 1, false, 10],
            [2, 0, false, 10],
        ],
        expected_reports: [
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_hold_timeout_boundary() {
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [2, 0, true, 0],
            [2, 0, false, 199],
            [2, 0, true, 100],
            [2, 0, false, 200],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_held_until_poll() {
    let mut keyboard = Variant::Grid.keyboard();
    keyboard.process(KeyEvent::press(2, 0), Instant::from_millis(0));
    keyboard.poll(Instant::from_millis(150));
    assert!(keyboard.is_tap_hold_pending());
    assert!(keyboard_reports(&mut keyboard).is_empty());

    keyboard.poll(Instant::from_millis(200));
    assert!(!keyboard.is_tap_hold_pending());
    let reports = keyboard_reports(&mut keyboard);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].modifier, KC_LSHIFT);
}

#[test]
fn test_rolling_keys_normal() {
    key_sequence_test! {
        keyboard: create_keyboard(TapHoldMode::Normal),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 50],
            [2, 0, false, 50],
            [1, 1, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_nested_tap_normal() {
    key_sequence_test! {
        keyboard: create_keyboard(TapHoldMode::Normal),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 50],
            [1, 1, false, 50],
            [2, 0, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_nested_tap_permissive_hold() {
    key_sequence_test! {
        keyboard: create_keyboard(TapHoldMode::PermissiveHold),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 50],
            [1, 1, false, 50],
            [2, 0, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_rolling_keys_permissive_hold() {
    // The other key is still pressed when the tap-hold key is released: tap
    key_sequence_test! {
        keyboard: create_keyboard(TapHoldMode::PermissiveHold),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 50],
            [2, 0, false, 50],
            [1, 1, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_hold_on_other_press() {
    key_sequence_test! {
        keyboard: create_keyboard(TapHoldMode::HoldOnOtherPress),
        sequence: [
            [2, 0, true, 0],
            [1, 1, true, 50],
            [2, 0, false, 50],
            [1, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_key_pressed_before_tap_hold() {
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [1, 1, true, 0],
            [2, 0, true, 10],
            [1, 1, false, 10],
            [2, 0, false, 10],
        ],
        expected_reports: [
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_tap_hold_through_transparent_layer() {
    // (2, 0) is transparent on Lower
    key_sequence_test! {
        keyboard: Variant::Grid.keyboard(),
        sequence: [
            [3, 4, true, 0],
            [2, 0, true, 10],
            [2, 0, false, 50],
            [3, 4, false, 10],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0, 0, 0, 0, 0, 0]],
        ]
    };
}

#[test]
fn test_full_buffer_forces_hold() {
    let mut keyboard = Variant::Grid.keyboard();
    keyboard.process(KeyEvent::press(2, 0), Instant::from_millis(0));
    let mut now = 0;
    for _ in 0..8 {
        now += 5;
        keyboard.process(KeyEvent::press(1, 1), Instant::from_millis(now));
        now += 5;
        keyboard.process(KeyEvent::release(1, 1), Instant::from_millis(now));
    }
    // 16 buffered events, still undecided
    assert!(keyboard.is_tap_hold_pending());
    assert!(keyboard_reports(&mut keyboard).is_empty());

    keyboard.process(KeyEvent::press(1, 2), Instant::from_millis(now + 5));
    assert!(!keyboard.is_tap_hold_pending());
    let reports = keyboard_reports(&mut keyboard);
    // Shift, 8 replayed taps of A, then the O press: nothing is dropped
    assert_eq!(reports.len(), 1 + TAP_HOLD_BUFFER_SIZE + 1);
    assert_eq!(reports[0].modifier, KC_LSHIFT);
    assert_eq!(reports[0].keycodes, [0; 6]);
    for (i, report) in reports[1..=TAP_HOLD_BUFFER_SIZE].iter().enumerate() {
        assert_eq!(report.modifier, KC_LSHIFT);
        let expected = if i % 2 == 0 { kc8!(A) } else { 0 };
        assert_eq!(report.keycodes, [expected, 0, 0, 0, 0, 0]);
    }
    let last = reports[reports.len() - 1];
    assert_eq!(last.modifier, KC_LSHIFT);
    assert_eq!(last.keycodes, [kc8!(O), 0, 0, 0, 0, 0]);

    // Releasing everything leaves an empty last report
    keyboard.process(KeyEvent::release(1, 2), Instant::from_millis(now + 10));
    keyboard.process(KeyEvent::release(2, 0), Instant::from_millis(now + 15));
    let reports = keyboard_reports(&mut keyboard);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].modifier, 0);
    assert_eq!(reports[1].keycodes, [0; 6]);
}
