//! # planck-hex types
//!
//! Value types shared by the keymap tables and the keymap engine.
//!
//! - [`action`] - Key actions stored in the layout tables (plain keys, layer keys, tap/hold)
//! - [`keycode`] - Keycodes: HID keyboard usages, backlight and user keycodes
//! - [`modifier`] - Modifier combinations and the HID modifier byte

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
