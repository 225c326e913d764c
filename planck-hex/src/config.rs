use embassy_time::Duration;

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    /// `[layer1, layer2, layer3]`: `layer3` is active iff both `layer1` and `layer2` are active.
    ///
    /// The engine recomputes it on every layer change when set. Keymaps that fold
    /// the tri-layer in their own hooks leave it as `None`.
    pub tri_layer: Option<[u8; 3]>,
    pub tap_hold: TapHoldConfig,
    pub backlight: BacklightConfig,
}

/// Decision mode of tap-hold keys, same as QMK's tap-hold decision modes:
/// <https://docs.qmk.fm/tap_hold#tap-or-hold-decision-modes>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapHoldMode {
    /// The decision is made when the tap-hold key is released, or when the hold timeout expires
    #[default]
    Normal,
    /// When another key is pressed and released while the tap-hold key is held,
    /// the hold action is triggered
    PermissiveHold,
    /// Trigger hold immediately if any other key is pressed while the tap-hold key is held
    HoldOnOtherPress,
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// If the key is pressed longer than this, it is accepted as `hold`
    pub hold_timeout: Duration,
    pub mode: TapHoldMode,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            hold_timeout: Duration::from_millis(200),
            mode: TapHoldMode::Normal,
        }
    }
}

/// Config for backlight keycodes
#[derive(Clone, Copy, Debug)]
pub struct BacklightConfig {
    /// Number of brightness levels, excluding "off"
    pub levels: u8,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self { levels: 3 }
    }
}
