use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;

/// Bitmask of active layers, bit `n` set means layer `n` is active.
///
/// Layers `>= 32` can't be represented, setting them is a no-op and they are never active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u32 {
        self.0
    }

    const fn mask(layer: u8) -> u32 {
        if layer < 32 { 1 << layer } else { 0 }
    }

    pub const fn is_on(self, layer: u8) -> bool {
        self.0 & Self::mask(layer) != 0
    }

    #[must_use]
    pub const fn with_on(self, layer: u8) -> Self {
        Self(self.0 | Self::mask(layer))
    }

    #[must_use]
    pub const fn with_off(self, layer: u8) -> Self {
        Self(self.0 & !Self::mask(layer))
    }

    #[must_use]
    pub const fn with_toggled(self, layer: u8) -> Self {
        Self(self.0 ^ Self::mask(layer))
    }

    /// Highest active layer, `None` if no layer is active
    pub const fn highest(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(31 - self.0.leading_zeros() as u8)
        }
    }

    /// Set `layer3` iff both `layer1` and `layer2` are on, clear it otherwise.
    ///
    /// Same as QMK's `update_tri_layer_state`.
    #[must_use]
    pub const fn with_tri_layer(self, layer1: u8, layer2: u8, layer3: u8) -> Self {
        if self.is_on(layer1) && self.is_on(layer2) {
            self.with_on(layer3)
        } else {
            self.with_off(layer3)
        }
    }
}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// Hardware key strokes use tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Function actions, referenced by `KeyAction::Function(index)`
    fn_actions: &'a [KeyAction],
    /// Current state of each layer
    layer_state: LayerState,
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
    /// Options for configurable action behavior
    pub(crate) behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        fn_actions: &'a [KeyAction],
        behavior: BehaviorConfig,
    ) -> Self {
        KeyMap {
            layers,
            fn_actions,
            layer_state: LayerState::new(),
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            behavior,
        }
    }

    /// Returns `(rows, cols, layers)` of the keymap
    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid default layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        info!("Default layer set to {}", layer_num);
        self.default_layer = layer_num;
    }

    /// Fetch the action in keymap, without layer cache
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> Option<KeyAction> {
        self.layers.get(layer_num)?.get(row)?.get(col).copied()
    }

    /// Resolve an entry of the function action table
    pub fn resolve_function(&self, index: u8) -> KeyAction {
        match self.fn_actions.get(index as usize) {
            // A function can't reference another function
            Some(KeyAction::Function(_)) | None => {
                warn!("Invalid function action index {}", index);
                KeyAction::No
            }
            Some(action) => *action,
        }
    }

    /// Fetch the action in keymap, with layer cache
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the {}x{} keymap", row, col, ROW, COL);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        self.save_layer_cache(row, col, self.default_layer);
        KeyAction::No
    }

    /// The highest activated layer, the default layer if nothing above it is active
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    /// Replace the whole layer state.
    ///
    /// Bits of layers the keymap doesn't have are dropped, the configured tri layer is applied.
    pub fn set_layer_state(&mut self, state: LayerState) {
        let valid = if NUM_LAYER >= 32 {
            u32::MAX
        } else {
            (1u32 << NUM_LAYER) - 1
        };
        let state = LayerState::from_bits(state.into_bits() & valid);
        if state.into_bits() != self.layer_state.into_bits() {
            debug!("Layer state: {:#b}", state.into_bits());
        }
        self.layer_state = state;
        self.apply_behavior_tri_layer();
    }

    fn is_valid_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Apply tri layer of the behavior config
    fn apply_behavior_tri_layer(&mut self) {
        if let Some([layer1, layer2, layer3]) = self.behavior.tri_layer {
            if (layer3 as usize) < NUM_LAYER {
                self.layer_state = self.layer_state.with_tri_layer(layer1, layer2, layer3);
            }
        }
    }

    /// Activate `layer3` iff `layer1` and `layer2` are both active
    pub fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8) {
        if !self.is_valid_layer(layer3) {
            return;
        }
        self.layer_state = self.layer_state.with_tri_layer(layer1, layer2, layer3);
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        self.layer_state = self.layer_state.with_on(layer_num);
        self.apply_behavior_tri_layer();
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        self.layer_state = self.layer_state.with_off(layer_num);
        self.apply_behavior_tri_layer();
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        self.layer_state = self.layer_state.with_toggled(layer_num);
        self.apply_behavior_tri_layer();
    }
}
