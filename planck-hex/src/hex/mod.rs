//! Dvorak keymap for a 4x12 ortholinear keyboard.
//!
//! Four layers: the Dvorak base layer, Lower, Raise and Adjust. Lower and Raise are
//! momentary, Adjust is active only while both Lower and Raise are held. The
//! bottom-left key of the third row is Escape when tapped and Left Shift when held.
//!
//! Three layout variants share the upper layers:
//! - [`GRID`] - two 1u space keys
//! - [`MIT`] - one 2u space bar
//! - [`TRI`] - momentary layer keys, the tri layer is folded in by the layer state hook

mod grid;
mod layers;
mod mit;
mod tri;

pub use grid::GRID;
pub use mit::MIT;
pub use tri::TRI;

use crate::action::{Action, KeyAction};
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;
use crate::hooks::{KeymapHooks, LayerControl};
use crate::keyboard::Keyboard;
use crate::keycode::KeyCode;
use crate::keymap::{KeyMap, LayerState};
use crate::modifier::ModifierCombination;

pub const ROWS: usize = 4;
pub const COLS: usize = 12;
pub const NUM_LAYERS: usize = 4;

pub const DVORAK_LAYER: u8 = 0;
pub const LOWER_LAYER: u8 = 1;
pub const RAISE_LAYER: u8 = 2;
pub const ADJUST_LAYER: u8 = 3;

/// Momentary Lower key
pub const LOWER: KeyCode = KeyCode::User0;
/// Momentary Raise key
pub const RAISE: KeyCode = KeyCode::User1;
/// Reserved for switching back to the Dvorak layer, not bound in any layer
pub const DVORAK: KeyCode = KeyCode::User2;

/// One layer of the keymap
pub type Layer = [[KeyAction; COLS]; ROWS];

/// All layers of a layout variant
pub type Layout = [Layer; NUM_LAYERS];

pub type HexKeyboard = Keyboard<'static, HexHooks, ROWS, COLS, NUM_LAYERS>;

const LWR: KeyAction = KeyAction::Single(Action::Key(LOWER));
const RSE: KeyAction = KeyAction::Single(Action::Key(RAISE));

/// Function actions, referenced as `f!(n)` in the layouts.
///
/// `f!(0)`: Escape when tapped, Left Shift when held.
pub static FN_ACTIONS: [KeyAction; 1] = [KeyAction::TapHold(
    Action::Key(KeyCode::Escape),
    Action::Modifier(ModifierCombination::LSHIFT),
)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    Grid,
    Mit,
    Tri,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Grid, Variant::Mit, Variant::Tri];

    pub fn layout(self) -> &'static Layout {
        match self {
            Variant::Grid => &GRID,
            Variant::Mit => &MIT,
            Variant::Tri => &TRI,
        }
    }

    pub fn keymap(self, behavior: BehaviorConfig) -> KeyMap<'static, ROWS, COLS, NUM_LAYERS> {
        KeyMap::new(self.layout(), &FN_ACTIONS, behavior)
    }

    /// Keyboard running this layout with default behavior
    pub fn keyboard(self) -> HexKeyboard {
        self.keyboard_with_config(BehaviorConfig::default())
    }

    pub fn keyboard_with_config(self, behavior: BehaviorConfig) -> HexKeyboard {
        Keyboard::new(self.keymap(behavior), HexHooks)
    }
}

/// Hooks of the hex keymap: Lower/Raise handling and the Adjust tri layer
#[derive(Clone, Copy, Debug, Default)]
pub struct HexHooks;

impl HexHooks {
    fn momentary_layer(&self, layer: u8, pressed: bool, layers: &mut impl LayerControl) {
        if pressed {
            layers.layer_on(layer);
        } else {
            layers.layer_off(layer);
        }
        layers.update_tri_layer(LOWER_LAYER, RAISE_LAYER, ADJUST_LAYER);
    }
}

impl KeymapHooks for HexHooks {
    fn process_record_user(&self, keycode: KeyCode, event: KeyEvent, layers: &mut impl LayerControl) -> bool {
        match keycode {
            LOWER => {
                self.momentary_layer(LOWER_LAYER, event.pressed, layers);
                false
            }
            RAISE => {
                self.momentary_layer(RAISE_LAYER, event.pressed, layers);
                false
            }
            _ => true,
        }
    }

    fn layer_state_set_user(&self, state: LayerState) -> LayerState {
        state.with_tri_layer(LOWER_LAYER, RAISE_LAYER, ADJUST_LAYER)
    }
}
