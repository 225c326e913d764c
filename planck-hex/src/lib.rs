//! # planck-hex
//!
//! Dvorak keymap for 4x12 ortholinear keyboards, with Lower, Raise and Adjust
//! layers, plus the keymap engine that turns key events into HID reports.
//!
//! - [`keymap`] - The layer stack, layer state and layer cache
//! - [`keyboard`] - Key event processing, tap/hold resolution and report generation
//! - [`hooks`] - User hooks called by the engine before default key processing
//! - [`hex`] - The keymap tables and the Lower/Raise toggle handler
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod config;
pub mod descriptor;
pub mod event;
pub mod hex;
pub mod hid;
pub mod hooks;
pub mod keyboard;
pub mod keymap;
pub mod layout_macro;
pub mod light;

pub use planck_hex_types as types;
pub use planck_hex_types::{action, keycode, modifier};
