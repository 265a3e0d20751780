use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{GlideError, GtResult};

/// Axis-aligned key bounds, in the same coordinate space as touch samples.
/// Degenerate (zero-area) rects are legal; their center is still a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl KeyRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// One key on the visible layout: identifier plus hit rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySlot {
    pub id: String,
    pub rect: KeyRect,
}

impl KeySlot {
    /// The letter this slot types, if it is an eligible hit target.
    /// Only single alphabetic characters participate in hit resolution;
    /// everything else (space, shift, multi-char ids) is skipped.
    pub fn letter(&self) -> Option<char> {
        let mut chars = self.id.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Some(c),
            _ => None,
        }
    }
}

/// The visible layout's key map. Key order is layout order; nearest-key
/// distance ties resolve to the earliest entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardGeometry {
    #[serde(default)]
    pub name: String,
    pub keys: Vec<KeySlot>,
}

impl KeyboardGeometry {
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn find(&self, id: &str) -> Option<&KeySlot> {
        self.keys.iter().find(|k| k.id == id)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GtResult<Self> {
        let content = fs::read_to_string(path)?;
        let geometry: Self = serde_json::from_str(&content)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Loader-level sanity check. The decode core tolerates anything, but a
    /// geometry file with duplicate ids is almost certainly an export bug.
    pub fn validate(&self) -> GtResult<()> {
        let mut seen = HashSet::new();
        for key in &self.keys {
            if !seen.insert(key.id.as_str()) {
                return Err(GlideError::Validation(format!(
                    "duplicate key id '{}' in geometry '{}'",
                    key.id, self.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> KeySlot {
        KeySlot {
            id: id.to_string(),
            rect: KeyRect::new(0.0, 0.0, 50.0, 50.0),
        }
    }

    #[test]
    fn test_center_of_rect() {
        let rect = KeyRect::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(rect.center(), (25.0, 25.0));
    }

    #[test]
    fn test_letter_eligibility() {
        assert_eq!(slot("q").letter(), Some('q'));
        assert_eq!(slot("Q").letter(), Some('Q'));
        assert_eq!(slot("shift").letter(), None);
        assert_eq!(slot(" ").letter(), None);
        assert_eq!(slot("1").letter(), None);
        assert_eq!(slot("").letter(), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let geometry = KeyboardGeometry {
            name: "dup".to_string(),
            keys: vec![slot("a"), slot("a")],
        };
        assert!(geometry.validate().is_err());
    }
}
