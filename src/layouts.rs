use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::geometry::{KeyRect, KeySlot, KeyboardGeometry};

/// Key cell size for the built-in layouts, in touch units.
pub const KEY_WIDTH: f32 = 50.0;
pub const KEY_HEIGHT: f32 = 50.0;

// Horizontal offset per row, mimicking phone keyboard stagger.
const ROW_STAGGER: [f32; 3] = [0.0, 25.0, 75.0];

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinLayout {
    Qwerty,
    Azerty,
    Qwertz,
}

impl BuiltinLayout {
    fn rows(&self) -> [&'static str; 3] {
        match self {
            Self::Qwerty => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
            Self::Azerty => ["azertyuiop", "qsdfghjklm", "wxcvbn"],
            Self::Qwertz => ["qwertzuiop", "asdfghjkl", "yxcvbnm"],
        }
    }

    /// Generates the letter-key geometry for this layout. Row 0 starts at the
    /// origin; each key occupies a KEY_WIDTH x KEY_HEIGHT cell.
    pub fn geometry(&self) -> KeyboardGeometry {
        let mut keys = Vec::new();
        for (row_idx, row) in self.rows().iter().enumerate() {
            let x0 = ROW_STAGGER[row_idx];
            let top = row_idx as f32 * KEY_HEIGHT;
            for (col, ch) in row.chars().enumerate() {
                let left = x0 + col as f32 * KEY_WIDTH;
                keys.push(KeySlot {
                    id: ch.to_string(),
                    rect: KeyRect::new(left, top, left + KEY_WIDTH, top + KEY_HEIGHT),
                });
            }
        }
        KeyboardGeometry {
            name: self.to_string(),
            keys,
        }
    }

    pub fn names() -> Vec<String> {
        Self::iter().map(|l| l.to_string()).collect()
    }
}
