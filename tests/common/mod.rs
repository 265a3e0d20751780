#![allow(dead_code)]

use glidetype::config::DecoderConfig;
use glidetype::decoder::SwipeDecoder;
use glidetype::geometry::{KeyRect, KeySlot, KeyboardGeometry};

/// Builder for KeySlot to clean up tests.
pub struct KeyBuilder {
    slot: KeySlot,
}

impl KeyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            slot: KeySlot {
                id: id.to_string(),
                rect: KeyRect::new(0.0, 0.0, 50.0, 50.0),
            },
        }
    }

    /// Places the key on a 50-unit grid cell.
    pub fn at(mut self, col: usize, row: usize) -> Self {
        let left = col as f32 * 50.0;
        let top = row as f32 * 50.0;
        self.slot.rect = KeyRect::new(left, top, left + 50.0, top + 50.0);
        self
    }

    pub fn rect(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.slot.rect = KeyRect::new(left, top, right, bottom);
        self
    }

    pub fn build(self) -> KeySlot {
        self.slot
    }
}

pub fn create_geom(keys: Vec<KeySlot>) -> KeyboardGeometry {
    KeyboardGeometry {
        name: "test".to_string(),
        keys,
    }
}

/// Three 50x50 keys q/w/e in a row, centers at x = 25/75/125, y = 25.
pub fn qwe_row() -> KeyboardGeometry {
    create_geom(vec![
        KeyBuilder::new("q").at(0, 0).build(),
        KeyBuilder::new("w").at(1, 0).build(),
        KeyBuilder::new("e").at(2, 0).build(),
    ])
}

/// Five keys a..e in a row, centers at x = 25/75/125/175/225.
pub fn abcde_row() -> KeyboardGeometry {
    create_geom(
        ["a", "b", "c", "d", "e"]
            .iter()
            .enumerate()
            .map(|(i, id)| KeyBuilder::new(id).at(i, 0).build())
            .collect(),
    )
}

pub fn test_decoder() -> SwipeDecoder {
    SwipeDecoder::new(DecoderConfig::default())
}

/// Starts a gesture at the first point and feeds the rest with a fixed
/// inter-sample interval.
pub fn feed(decoder: &mut SwipeDecoder, points: &[(f32, f32)], step_ms: u64) {
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        decoder.start_swipe_at(x, y, 0);
    }
    for (i, &(x, y)) in iter.enumerate() {
        decoder.add_point_at(x, y, (i as u64 + 1) * step_ms);
    }
}
