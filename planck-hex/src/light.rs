use crate::config::BacklightConfig;
use crate::keycode::KeyCode;

/// Backlight brightness tracked from the backlight keycodes.
///
/// Levels range from 0 (off) to `levels`. No hardware is driven here, the
/// board reads [`BacklightState::level`] after each change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightState {
    enabled: bool,
    level: u8,
    levels: u8,
}

impl BacklightState {
    pub fn new(config: BacklightConfig) -> Self {
        Self {
            enabled: false,
            level: config.levels,
            levels: config.levels,
        }
    }

    /// Effective brightness level, 0 when the backlight is disabled
    pub fn level(&self) -> u8 {
        if self.enabled { self.level } else { 0 }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply a backlight keycode, returns whether the state changed.
    pub fn process(&mut self, key: KeyCode) -> bool {
        let before = *self;
        match key {
            KeyCode::BacklightOn => self.enable(),
            KeyCode::BacklightOff => self.enabled = false,
            KeyCode::BacklightToggle => {
                if self.enabled {
                    self.enabled = false;
                } else {
                    self.enable();
                }
            }
            KeyCode::BacklightUp => {
                if self.level < self.levels {
                    self.level += 1;
                }
                self.enabled = self.level > 0;
            }
            KeyCode::BacklightDown => {
                self.level = self.level.saturating_sub(1);
                self.enabled = self.level > 0;
            }
            KeyCode::BacklightStep => {
                self.level = if self.level >= self.levels { 0 } else { self.level + 1 };
                self.enabled = self.level > 0;
            }
            _ => {
                warn!("Not a backlight keycode: {:?}", key);
            }
        }

        if *self != before {
            debug!("Backlight level: {}, enabled: {}", self.level, self.enabled);
            true
        } else {
            false
        }
    }

    fn enable(&mut self) {
        self.enabled = true;
        if self.level == 0 {
            self.level = 1;
        }
    }
}
