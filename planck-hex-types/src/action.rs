//! Keyboard actions.
//!
//! Actions are what the layout tables store at every key position:
//! - [`Action`] - Single operations that a keyboard sends or executes
//! - [`KeyAction`] - Behaviors of a key position, wrapping one or two [`Action`]s

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap hold action, the first action is triggered on tap, the second one while the key is held.
    TapHold(Action, Action),
    /// Reference to an entry of the function action table, resolved when the key is pressed.
    Function(u8),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered, such as `!` (`Shift + 1`).
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Modifier combination, held while the key is pressed.
    Modifier(ModifierCombination),
    /// Activate a layer while the key is pressed
    LayerOn(u8),
    /// Deactivate a layer when the key is pressed, the layer stays off after release
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
    /// Set default layer
    DefaultLayer(u8),
}
