//! User hooks, called by the keyboard while processing key events.
//!
//! They work like QMK's `process_record_user` and `layer_state_set_user`:
//! <https://docs.qmk.fm/custom_quantum_functions>

use crate::event::KeyEvent;
use crate::keycode::KeyCode;
use crate::keymap::{KeyMap, LayerState};

/// Layer operations available to [`KeymapHooks::process_record_user`]
pub trait LayerControl {
    /// Current layer state
    fn layer_state(&self) -> LayerState;

    /// Activate a layer
    fn layer_on(&mut self, layer: u8);

    /// Deactivate a layer
    fn layer_off(&mut self, layer: u8);

    /// Toggle a layer
    fn layer_invert(&mut self, layer: u8);

    /// Activate `layer3` iff `layer1` and `layer2` are both active, deactivate it otherwise
    fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8);
}

/// Hooks of a keymap.
///
/// Both hooks have default implementations which do nothing, so a keymap only
/// overrides what it needs. `()` is a keymap without hooks.
pub trait KeymapHooks {
    /// Called for every key action carrying a keycode, before the keyboard processes it.
    ///
    /// Return `false` when the keycode is fully handled here, the keyboard then skips
    /// its default processing. Return `true` to continue as usual.
    fn process_record_user(&self, keycode: KeyCode, event: KeyEvent, layers: &mut impl LayerControl) -> bool {
        let _ = (keycode, event, layers);
        true
    }

    /// Called every time the layer state changes, the returned state is the one committed
    fn layer_state_set_user(&self, state: LayerState) -> LayerState {
        state
    }
}

impl KeymapHooks for () {}

/// Layer changes on a bare keymap, `layer_state_set_user` is not involved
impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerControl for KeyMap<'_, ROW, COL, NUM_LAYER> {
    fn layer_state(&self) -> LayerState {
        KeyMap::layer_state(self)
    }

    fn layer_on(&mut self, layer: u8) {
        self.activate_layer(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.deactivate_layer(layer);
    }

    fn layer_invert(&mut self, layer: u8) {
        self.toggle_layer(layer);
    }

    fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8) {
        KeyMap::update_tri_layer(self, layer1, layer2, layer3);
    }
}

/// A keymap together with its hooks.
///
/// Every layer change made through it is passed to [`KeymapHooks::layer_state_set_user`]
/// before being committed to the keymap.
pub struct LayerContext<'k, 'a, H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: &'k mut KeyMap<'a, ROW, COL, NUM_LAYER>,
    hooks: &'k H,
}

impl<'k, 'a, H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    LayerContext<'k, 'a, H, ROW, COL, NUM_LAYER>
{
    pub fn new(keymap: &'k mut KeyMap<'a, ROW, COL, NUM_LAYER>, hooks: &'k H) -> Self {
        Self { keymap, hooks }
    }

    /// Apply a layer change to the keymap, then run the changed state through the hook
    fn update(&mut self, f: impl FnOnce(&mut KeyMap<'a, ROW, COL, NUM_LAYER>)) {
        let before = self.keymap.layer_state();
        f(&mut *self.keymap);
        let state = self.keymap.layer_state();
        if state != before {
            let state = self.hooks.layer_state_set_user(state);
            self.keymap.set_layer_state(state);
            debug!("Layer state changed: {:#b} -> {:#b}", before.into_bits(), self.keymap.layer_state().into_bits());
        }
    }
}

impl<H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerControl
    for LayerContext<'_, '_, H, ROW, COL, NUM_LAYER>
{
    fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }

    fn layer_on(&mut self, layer: u8) {
        self.update(|keymap| keymap.activate_layer(layer));
    }

    fn layer_off(&mut self, layer: u8) {
        self.update(|keymap| keymap.deactivate_layer(layer));
    }

    fn layer_invert(&mut self, layer: u8) {
        self.update(|keymap| keymap.toggle_layer(layer));
    }

    fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8) {
        self.update(|keymap| keymap.update_tri_layer(layer1, layer2, layer3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::KeyAction;
    use crate::config::BehaviorConfig;

    static LAYERS: [[[KeyAction; 1]; 1]; 4] = [[[KeyAction::No]]; 4];

    /// Turns on layer 3 whenever layer 1 is on
    struct ShadowHooks;

    impl KeymapHooks for ShadowHooks {
        fn layer_state_set_user(&self, state: LayerState) -> LayerState {
            if state.is_on(1) { state.with_on(3) } else { state.with_off(3) }
        }
    }

    #[test]
    fn test_layer_context_runs_state_hook() {
        let mut keymap = KeyMap::new(&LAYERS, &[], BehaviorConfig::default());
        let hooks = ShadowHooks;
        let mut ctx = LayerContext::new(&mut keymap, &hooks);
        ctx.layer_on(1);
        assert_eq!(ctx.layer_state().into_bits(), 0b1010);
        ctx.layer_invert(1);
        assert_eq!(ctx.layer_state().into_bits(), 0);
        ctx.layer_on(2);
        assert_eq!(ctx.layer_state().into_bits(), 0b0100);
    }

    #[test]
    fn test_bare_keymap_skips_state_hook() {
        let mut keymap = KeyMap::new(&LAYERS, &[], BehaviorConfig::default());
        LayerControl::layer_on(&mut keymap, 1);
        assert_eq!(LayerControl::layer_state(&keymap).into_bits(), 0b0010);
    }

    #[test]
    fn test_default_hooks_continue_processing() {
        let mut keymap = KeyMap::new(&LAYERS, &[], BehaviorConfig::default());
        assert!(().process_record_user(KeyCode::A, KeyEvent::press(0, 0), &mut keymap));
        assert_eq!(().layer_state_set_user(LayerState::from_bits(0b11)).into_bits(), 0b11);
    }
}
