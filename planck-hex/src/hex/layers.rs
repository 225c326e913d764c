//! Lower, Raise and Adjust layers, shared by all layout variants.

use super::Layer;
use crate::{a, k, shifted};

/// Lower
///
/// ```text
/// ,-----------------------------------------------------------------------------------.
/// |   0  |   7  |   8  |   9  |   -  |   =  |   !  |   &  |   _  |   ^  |   |  |      |
/// |------+------+------+------+------+-------------+------+------+------+------+------|
/// |      |   4  |   5  |   6  |   +  |   /  |   $  |   {  |   [  |   (  |   ~  |      |
/// |------+------+------+------+------+------|------+------+------+------+------+------|
/// |      |   1  |   2  |   3  |   *  |   \  |   #  |   }  |   ]  |   )  |   %  |      |
/// |------+------+------+------+------+------+------+------+------+------+------+------|
/// |      |      |      |      |      |             |      | HOME | PGUP |PGDOWN| END  |
/// `-----------------------------------------------------------------------------------'
/// ```
#[rustfmt::skip]
pub(crate) const LOWER: Layer = [
    [k!(Kc0),          k!(Kc7),          k!(Kc8),          k!(Kc9),          k!(Minus),        k!(Equal),        shifted!(Kc1),    shifted!(Kc7),          shifted!(Minus),        shifted!(Kc6),    shifted!(Backslash), a!(Transparent)],
    [a!(Transparent),  k!(Kc4),          k!(Kc5),          k!(Kc6),          shifted!(Equal),  k!(KpSlash),      shifted!(Kc4),    shifted!(LeftBracket),  k!(LeftBracket),        shifted!(Kc9),    shifted!(Grave),     a!(Transparent)],
    [a!(Transparent),  k!(Kc1),          k!(Kc2),          k!(Kc3),          shifted!(Kc8),    k!(Backslash),    shifted!(Kc3),    shifted!(RightBracket), k!(RightBracket),       shifted!(Kc0),    shifted!(Kc5),       a!(Transparent)],
    [a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),        k!(Home),               k!(PageUp),       k!(PageDown),        k!(End)],
];

/// Raise
///
/// ```text
/// ,-----------------------------------------------------------------------------------.
/// |      |      |      |      |      |      | Cut  | Copy |  UP  | Paste|      |      |
/// |------+------+------+------+------+-------------+------+------+------+------+------|
/// |      |   @  |      |      |      |      |      | LEFT | DOWN | RIGHT|      |      |
/// |------+------+------+------+------+------|------+------+------+------+------+------|
/// |      |      |      |      |      |      |      |      |      |      |      |  Del |
/// |------+------+------+------+------+------+------+------+------+------+------+------|
/// |      |      |      |      |      |             |      | HOME | PGUP |PGDOWN| END  |
/// `-----------------------------------------------------------------------------------'
/// ```
#[rustfmt::skip]
pub(crate) const RAISE: Layer = [
    [a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(Cut),          k!(Copy),         k!(Up),           k!(Paste),        a!(Transparent),  a!(Transparent)],
    [a!(Transparent),  shifted!(Kc2),    a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(Left),         k!(Down),         k!(Right),        a!(Transparent),  a!(Transparent)],
    [a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(Delete)],
    [a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(Home),         k!(PageUp),       k!(PageDown),     k!(End)],
];

/// Adjust (Lower + Raise)
///
/// ```text
/// ,-----------------------------------------------------------------------------------.
/// |      | F1   | F2   | F3   | F4   | F5   | F6   | F7   | F8   | F9   | F10  |      |
/// |------+------+------+------+------+-------------+------+------+------+------+------|
/// |      | F11  | F12  | F13  | F14  | F15  | F16  | HOME | PGUP |PGDOWN| END  |      |
/// |------+------+------+------+------+------|------+------+------+------+------+------|
/// |      | LED- | LED+ |      |      |      |      |      | VOL- | VOL+ | MUTE |      |
/// |------+------+------+------+------+------+------+------+------+------+------+------|
/// |      |      |      |      |      |             |      | PREV | STOP | PLAY | NEXT |
/// `-----------------------------------------------------------------------------------'
/// ```
#[rustfmt::skip]
pub(crate) const ADJUST: Layer = [
    [a!(Transparent),  k!(F1),             k!(F2),           k!(F3),           k!(F4),           k!(F5),           k!(F6),           k!(F7),           k!(F8),               k!(F9),           k!(F10),              a!(Transparent)],
    [a!(Transparent),  k!(F11),            k!(F12),          k!(F13),          k!(F14),          k!(F15),          k!(F16),          k!(Home),         k!(PageUp),           k!(PageDown),     k!(End),              a!(Transparent)],
    [a!(Transparent),  k!(BacklightDown),  k!(BacklightUp),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(AudioVolDown),     k!(AudioVolUp),   k!(AudioMute),        a!(Transparent)],
    [a!(Transparent),  a!(Transparent),    a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  a!(Transparent),  k!(MediaPrevTrack),   k!(MediaStop),    k!(MediaPlayPause),   k!(MediaNextTrack)],
];
