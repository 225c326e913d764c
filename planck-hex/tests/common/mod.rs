pub mod test_macro;

use embassy_time::Instant;
use log::debug;
use planck_hex::descriptor::{KeyboardReport, MediaKeyboardReport};
use planck_hex::event::KeyEvent;
use planck_hex::hid::Report;
use planck_hex::hooks::KeymapHooks;
use planck_hex::keyboard::Keyboard;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub(crate) const KC_LSHIFT: u8 = 1 << 1;

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub delay: u64, // Delay before this key event in milliseconds
}

/// Time long enough for every pending tap-hold key to time out
pub const SETTLE_TIME: u64 = 1000;

// Run a keyboard test, input is seq of key input with delay, use expected report to verify
pub fn run_key_sequence_test<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, H, ROW, COL, NUM_LAYER>,
    key_sequence: &[TestKeyPress],
    expected_reports: &[KeyboardReport],
) {
    let mut now = 0;
    for key in key_sequence {
        now += key.delay;
        keyboard.process(
            KeyEvent {
                row: key.row,
                col: key.col,
                pressed: key.pressed,
            },
            Instant::from_millis(now),
        );
    }
    keyboard.poll(Instant::from_millis(now + SETTLE_TIME));

    let reports = keyboard_reports(keyboard);
    for (i, report) in reports.iter().enumerate() {
        debug!("Report {}: {:?}", i, report);
    }
    assert_eq!(reports, expected_reports);
}

/// Drain all reports of the keyboard
pub fn drain_reports<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, H, ROW, COL, NUM_LAYER>,
) -> Vec<Report> {
    core::iter::from_fn(|| keyboard.next_report()).collect()
}

/// Drain all reports, keeping the keyboard reports only
pub fn keyboard_reports<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, H, ROW, COL, NUM_LAYER>,
) -> Vec<KeyboardReport> {
    drain_reports(keyboard)
        .into_iter()
        .filter_map(|r| match r {
            Report::KeyboardReport(report) => Some(report),
            _ => None,
        })
        .collect()
}

/// Drain all reports, keeping the media reports only
pub fn media_reports<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, H, ROW, COL, NUM_LAYER>,
) -> Vec<MediaKeyboardReport> {
    drain_reports(keyboard)
        .into_iter()
        .filter_map(|r| match r {
            Report::MediaKeyboardReport(report) => Some(report),
            _ => None,
        })
        .collect()
}

/// Press and release a key, `hold` milliseconds apart
pub fn tap_key<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, H, ROW, COL, NUM_LAYER>,
    row: u8,
    col: u8,
    at: u64,
    hold: u64,
) {
    keyboard.process(KeyEvent::press(row, col), Instant::from_millis(at));
    keyboard.process(KeyEvent::release(row, col), Instant::from_millis(at + hold));
}
