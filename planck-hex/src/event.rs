use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// A debounced state change of the key at `(row, col)`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            pressed: false,
        }
    }

    /// Whether two events come from the same key position
    pub fn same_position(&self, other: &KeyEvent) -> bool {
        self.row == other.row && self.col == other.col
    }
}
