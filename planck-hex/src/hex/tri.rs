use super::{Layout, layers};
use crate::{f, k, mo};

/// Grid layout with plain momentary layer keys.
///
/// Lower and Raise are `mo!(1)` and `mo!(2)`, Adjust comes only from
/// [`HexHooks::layer_state_set_user`](super::HexHooks).
#[rustfmt::skip]
pub static TRI: Layout = [
    // Dvorak
    // ,-----------------------------------------------------------------------------------.
    // |   /  |   "  |   ,  |   .  |   P  |   Y  |   F  |   G  |   C  |   R  |   L  |   \  |
    // |------+------+------+------+------+-------------+------+------+------+------+------|
    // |  Tab |   A  |   O  |   E  |   U  |   I  |   D  |   H  |   T  |   N  |   S  |Enter |
    // |------+------+------+------+------+------|------+------+------+------+------+------|
    // |Esc/Sh|   ;  |   Q  |   J  |   K  |   X  |   B  |   M  |   W  |   V  |   Z  | Bksp |
    // |------+------+------+------+------+------+------+------+------+------+------+------|
    // | Ctrl | Comp | Meta | Alt  | MO 1 |Space |Space | MO 2 | Left |  Up  | Down |Right |
    // `-----------------------------------------------------------------------------------'
    [
        [k!(Slash),   k!(Quote),     k!(Comma),   k!(Dot),     k!(P),       k!(Y),       k!(F),       k!(G),       k!(C),       k!(R),       k!(L),       k!(Backslash)],
        [k!(Tab),     k!(A),         k!(O),       k!(E),       k!(U),       k!(I),       k!(D),       k!(H),       k!(T),       k!(N),       k!(S),       k!(Enter)],
        [f!(0),       k!(Semicolon), k!(Q),       k!(J),       k!(K),       k!(X),       k!(B),       k!(M),       k!(W),       k!(V),       k!(Z),       k!(Backspace)],
        [k!(LCtrl),   k!(RAlt),      k!(LGui),    k!(LAlt),    mo!(1),      k!(Space),   k!(Space),   mo!(2),      k!(Left),    k!(Up),      k!(Down),    k!(Right)],
    ],
    layers::LOWER,
    layers::RAISE,
    layers::ADJUST,
];
