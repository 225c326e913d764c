use super::{Layout, LWR, RSE, layers};
use crate::{a, f, k};

/// MIT layout, one 2u space bar wired at `(3, 5)`.
///
/// `(3, 6)` has no switch under the space bar.
#[rustfmt::skip]
pub static MIT: Layout = [
    // Dvorak
    // ,-----------------------------------------------------------------------------------.
    // |   /  |   "  |   ,  |   .  |   P  |   Y  |   F  |   G  |   C  |   R  |   L  |   \  |
    // |------+------+------+------+------+-------------+------+------+------+------+------|
    // |  Tab |   A  |   O  |   E  |   U  |   I  |   D  |   H  |   T  |   N  |   S  |Enter |
    // |------+------+------+------+------+------|------+------+------+------+------+------|
    // |Esc/Sh|   ;  |   Q  |   J  |   K  |   X  |   B  |   M  |   W  |   V  |   Z  | Bksp |
    // |------+------+------+------+------+------+------+------+------+------+------+------|
    // | Ctrl | Comp | Meta | Alt  |Lower |    Space    |Raise | Left |  Up  | Down |Right |
    // `-----------------------------------------------------------------------------------'
    [
        [k!(Slash),   k!(Quote),     k!(Comma),   k!(Dot),     k!(P),       k!(Y),       k!(F),       k!(G),       k!(C),       k!(R),       k!(L),       k!(Backslash)],
        [k!(Tab),     k!(A),         k!(O),       k!(E),       k!(U),       k!(I),       k!(D),       k!(H),       k!(T),       k!(N),       k!(S),       k!(Enter)],
        [f!(0),       k!(Semicolon), k!(Q),       k!(J),       k!(K),       k!(X),       k!(B),       k!(M),       k!(W),       k!(V),       k!(Z),       k!(Backspace)],
        [k!(LCtrl),   k!(RAlt),      k!(LGui),    k!(LAlt),    LWR,         k!(Space),   a!(No),      RSE,         k!(Left),    k!(Up),      k!(Down),    k!(Right)],
    ],
    layers::LOWER,
    layers::RAISE,
    layers::ADJUST,
];
