use embassy_time::Instant;
use heapless::{Deque, Vec};

use crate::action::{Action, KeyAction};
use crate::config::TapHoldMode;
use crate::descriptor::{KeyboardReport, MediaKeyboardReport};
use crate::event::KeyEvent;
use crate::hid::Report;
use crate::hooks::{KeymapHooks, LayerContext, LayerControl};
use crate::keycode::KeyCode;
use crate::keymap::{KeyMap, LayerState};
use crate::light::BacklightState;
use crate::modifier::{HidModifiers, ModifierCombination};

/// Max number of key events buffered while a tap-hold decision is pending
pub const TAP_HOLD_BUFFER_SIZE: usize = 16;

/// Max number of reports waiting in the report queue.
///
/// Fits every report of one `process` call which resolves a full tap-hold buffer.
pub const REPORT_QUEUE_SIZE: usize = 2 * TAP_HOLD_BUFFER_SIZE + 4;

/// A tap-hold key which is pressed, but not decided yet
#[derive(Clone, Copy, Debug)]
struct PendingTapHold {
    event: KeyEvent,
    tap: Action,
    hold: Action,
    /// Once reached, the key is a hold
    deadline: Instant,
}

pub struct Keyboard<'a, H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    /// User hooks of the keymap
    hooks: H,

    /// The tap-hold key waiting for its decision
    pending: Option<PendingTapHold>,

    /// Events received while a tap-hold key is pending, with their timestamps
    buffered_events: Vec<(KeyEvent, Instant), TAP_HOLD_BUFFER_SIZE>,

    /// The modifiers coming from (last) `Action::KeyWithModifier`
    with_modifiers: HidModifiers,

    /// The held modifiers for the keyboard hid report
    held_modifiers: HidModifiers,

    /// The held keys for the keyboard hid report, except the modifiers
    held_keycodes: [KeyCode; 6],

    /// Registered key position
    registered_keys: [Option<(u8, u8)>; 6],

    /// Internal media report buf
    media_report: MediaKeyboardReport,

    /// Backlight level
    backlight: BacklightState,

    /// Reports waiting to be sent to the host
    reports: Deque<Report, REPORT_QUEUE_SIZE>,
}

impl<'a, H: KeymapHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    Keyboard<'a, H, ROW, COL, NUM_LAYER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, hooks: H) -> Self {
        let backlight = BacklightState::new(keymap.behavior.backlight);
        Keyboard {
            keymap,
            hooks,
            pending: None,
            buffered_events: Vec::new(),
            with_modifiers: HidModifiers::default(),
            held_modifiers: HidModifiers::default(),
            held_keycodes: [KeyCode::No; 6],
            registered_keys: [None; 6],
            media_report: MediaKeyboardReport { usage_id: 0 },
            backlight,
            reports: Deque::new(),
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }

    pub fn backlight(&self) -> &BacklightState {
        &self.backlight
    }

    /// Whether a tap-hold key is waiting for its decision
    pub fn is_tap_hold_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the oldest report waiting to be sent
    pub fn next_report(&mut self) -> Option<Report> {
        self.reports.pop_front()
    }

    /// Process a debounced key event, which happened at `now`
    pub fn process(&mut self, key_event: KeyEvent, now: Instant) {
        self.poll(now);
        self.process_inner(key_event, now);
    }

    /// Resolve the pending tap-hold key as hold if its timeout has elapsed at `now`.
    ///
    /// Should be called periodically while [`Keyboard::is_tap_hold_pending`] is true.
    pub fn poll(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if now >= pending.deadline {
                debug!("Hold timeout, got HOLD: {:?}, {:?}", pending.hold, pending.event);
                self.resolve_hold();
            }
        }
    }

    fn process_inner(&mut self, key_event: KeyEvent, now: Instant) {
        let Some(pending) = self.pending else {
            let key_action = self.keymap.get_action_with_layer_cache(key_event);
            self.process_key_action(key_action, key_event, now);
            return;
        };

        if now >= pending.deadline {
            debug!("Hold timeout, got HOLD: {:?}, {:?}", pending.hold, pending.event);
            self.resolve_hold();
            self.process_inner(key_event, now);
            return;
        }

        if key_event.same_position(&pending.event) {
            if !key_event.pressed {
                debug!("TAP action: {:?}, {:?}", pending.tap, pending.event);
                self.resolve_tap(key_event);
            }
            return;
        }

        if !key_event.pressed
            && !self
                .buffered_events
                .iter()
                .any(|(e, _)| e.pressed && e.same_position(&key_event))
        {
            // The key is pressed BEFORE tap/hold key, so it should be regarded as a normal key
            let key_action = self.keymap.get_action_with_layer_cache(key_event);
            self.process_key_action(key_action, key_event, now);
            return;
        }

        match self.keymap.behavior.tap_hold.mode {
            TapHoldMode::HoldOnOtherPress if key_event.pressed => {
                debug!("Another key pressed, got HOLD: {:?}, {:?}", pending.hold, pending.event);
                self.resolve_hold();
                self.process_inner(key_event, now);
                return;
            }
            TapHoldMode::PermissiveHold if !key_event.pressed => {
                // A key pressed after the tap/hold key is released, trigger hold
                debug!("Another key tapped, got HOLD: {:?}, {:?}", pending.hold, pending.event);
                if self.buffered_events.push((key_event, now)).is_ok() {
                    self.resolve_hold();
                } else {
                    self.resolve_hold();
                    self.process_inner(key_event, now);
                }
                return;
            }
            _ => (),
        }

        if self.buffered_events.push((key_event, now)).is_err() {
            warn!("Tap-hold buffer is full, got HOLD: {:?}, {:?}", pending.hold, pending.event);
            self.resolve_hold();
            self.process_inner(key_event, now);
        }
    }

    /// Trigger the hold action of the pending key, then replay the buffered events
    fn resolve_hold(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.process_action(pending.hold, pending.event);
            self.replay_buffered_events();
        }
    }

    /// Tap the tap action of the pending key, then replay the buffered events
    fn resolve_tap(&mut self, release: KeyEvent) {
        if let Some(pending) = self.pending.take() {
            self.process_action(pending.tap, pending.event);
            self.process_action(pending.tap, release);
            self.replay_buffered_events();
        }
    }

    fn replay_buffered_events(&mut self) {
        let events = core::mem::take(&mut self.buffered_events);
        for (key_event, time) in events {
            self.process_inner(key_event, time);
        }
    }

    fn process_key_action(&mut self, key_action: KeyAction, key_event: KeyEvent, now: Instant) {
        match key_action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(a) => self.process_action(a, key_event),
            KeyAction::TapHold(tap_action, hold_action) => {
                self.process_key_action_tap_hold(tap_action, hold_action, key_event, now)
            }
            KeyAction::Function(index) => {
                let key_action = self.keymap.resolve_function(index);
                self.process_key_action(key_action, key_event, now);
            }
        }
    }

    /// Process tap/hold action.
    ///
    /// The press starts a pending decision, which is made later:
    /// - When current tap/hold key is releasing, before the timeout: tap
    /// - When tap/hold key is expired: hold
    /// - When another key is pressed or tapped, depending on [`TapHoldMode`]: hold
    fn process_key_action_tap_hold(&mut self, tap_action: Action, hold_action: Action, key_event: KeyEvent, now: Instant) {
        if key_event.pressed {
            self.pending = Some(PendingTapHold {
                event: key_event,
                tap: tap_action,
                hold: hold_action,
                deadline: now + self.keymap.behavior.tap_hold.hold_timeout,
            });
        } else {
            // The decision has been made before and it's not a tap, release the hold
            debug!("HOLD releasing: {:?}, {:?}", hold_action, key_event);
            self.process_action(hold_action, key_event);
        }
    }

    fn process_action(&mut self, action: Action, key_event: KeyEvent) {
        match action {
            Action::No => (),
            Action::Key(key) => {
                if self.process_record_user(key, key_event) {
                    self.process_action_keycode(key, key_event);
                }
            }
            Action::KeyWithModifier(key, modifiers) => {
                if !self.process_record_user(key, key_event) {
                    return;
                }
                if key_event.pressed {
                    // These modifiers will be combined into the hid report, so
                    // they will be "pressed" the same time as the key (in same hid report)
                    self.with_modifiers |= modifiers.to_hid_modifiers();
                } else {
                    // The modifiers will not be part of the hid report, so
                    // they will be "released" the same time as the key (in same hid report)
                    self.with_modifiers &= !(modifiers.to_hid_modifiers());
                }
                self.process_action_keycode(key, key_event);
            }
            Action::Modifier(modifiers) => {
                if key_event.pressed {
                    self.register_modifiers(modifiers);
                } else {
                    self.unregister_modifiers(modifiers);
                }
                // Report the modifier press/release in its own hid report
                self.send_keyboard_report(key_event.pressed);
            }
            Action::LayerOn(layer_num) => {
                // Change layer state only when the key's state is changed
                if key_event.pressed {
                    self.layers().layer_on(layer_num);
                } else {
                    self.layers().layer_off(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                // Turn off a layer when the key is pressed, releasing doesn't restore it
                if key_event.pressed {
                    self.layers().layer_off(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                // Toggle a layer when the key is release
                if !key_event.pressed {
                    self.layers().layer_invert(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.keymap.set_default_layer(layer_num);
                }
            }
        }
    }

    /// Layer operations which go through `layer_state_set_user`
    fn layers(&mut self) -> LayerContext<'_, 'a, H, ROW, COL, NUM_LAYER> {
        LayerContext::new(&mut self.keymap, &self.hooks)
    }

    /// Run the user hook, returns whether the keycode should be processed as usual
    fn process_record_user(&mut self, key: KeyCode, key_event: KeyEvent) -> bool {
        let mut layers = LayerContext::new(&mut self.keymap, &self.hooks);
        let proceed = self.hooks.process_record_user(key, key_event, &mut layers);
        if !proceed {
            debug!("Keycode {:?} handled by user hook", key);
        }
        proceed
    }

    // Process a single keycode, typically a basic key or a modifier key.
    fn process_action_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key == KeyCode::No {
            return;
        }

        if key.is_consumer() {
            self.process_action_consumer_control(key, key_event);
        } else if key.is_backlight() {
            if key_event.pressed {
                self.backlight.process(key);
            }
        } else if key.is_user() {
            debug!("User keycode {:?} has no default action", key);
        } else if key.is_basic() || key.is_modifier() {
            self.process_basic(key, key_event);
        } else {
            warn!("Unsupported key: {:?}", key);
        }
    }

    /// Process consumer control action. Consumer control keys are keys in hid consumer page, such as media keys.
    fn process_action_consumer_control(&mut self, key: KeyCode, key_event: KeyEvent) {
        if let Some(consumer) = key.as_consumer_key() {
            self.media_report.usage_id = if key_event.pressed { consumer as u16 } else { 0 };
            self.send_report(Report::MediaKeyboardReport(self.media_report));
        }
    }

    fn process_basic(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key_event.pressed {
            self.register_key(key, key_event);
        } else {
            self.unregister_key(key, key_event);
        }

        self.send_keyboard_report(key_event.pressed);
    }

    /// Calculates the combined effect of all modifiers:
    /// - registered (held) modifiers keys
    /// - effect of `Action::KeyWithModifier` (while they are pressed)
    pub fn resolve_modifiers(&self, pressed: bool) -> HidModifiers {
        let mut result = self.held_modifiers;
        if pressed {
            result |= self.with_modifiers;
        }
        result
    }

    fn send_keyboard_report(&mut self, pressed: bool) {
        let modifier = self.resolve_modifiers(pressed).into_bits();
        self.send_report(Report::KeyboardReport(KeyboardReport {
            modifier,
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }));
    }

    fn send_report(&mut self, report: Report) {
        if self.reports.push_back(report).is_err() {
            warn!("Report queue is full, dropping report");
        }
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    fn register_key(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key.is_modifier() {
            self.register_modifiers(key.to_modifier_combination());
        } else if key.is_basic() {
            self.register_keycode(key, key_event);
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    fn unregister_key(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key.is_modifier() {
            self.unregister_modifiers(key.to_modifier_combination());
        } else if key.is_basic() {
            self.unregister_keycode(key, key_event);
        }
    }

    fn registered_slot(&self, key_event: KeyEvent) -> Option<usize> {
        self.registered_keys
            .iter()
            .position(|k| *k == Some((key_event.row, key_event.col)))
    }

    /// Register a key to be sent in hid report.
    fn register_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        // First, find the key event slot according to the position, otherwise the first free slot
        let slot = self
            .registered_slot(key_event)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == KeyCode::No));

        if let Some(index) = slot {
            self.held_keycodes[index] = key;
            self.registered_keys[index] = Some((key_event.row, key_event.col));
        } else {
            warn!("No free slot in the keyboard report for {:?}", key);
        }
    }

    /// Unregister a key from hid report.
    fn unregister_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        // First, find the key event slot according to the position, otherwise the first same key
        let slot = self
            .registered_slot(key_event)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == key));

        if let Some(index) = slot {
            self.held_keycodes[index] = KeyCode::No;
            self.registered_keys[index] = None;
        }
    }

    /// Register a modifier combination to be sent in hid report.
    fn register_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers |= modifiers.to_hid_modifiers();
    }

    /// Unregister a modifier combination from hid report.
    fn unregister_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers &= !modifiers.to_hid_modifiers();
    }
}
