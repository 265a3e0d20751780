use crate::geometry::KeyboardGeometry;

use super::path::SwipeSample;

/// Nearest eligible key for a single touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyHit {
    pub key: char,
    pub distance: f32,
    pub confidence: f32,
}

/// Distance-based quality score: 1.0 at the key center, 0.0 at the radius.
#[inline]
pub fn confidence(distance: f32, hit_radius: f32) -> f32 {
    if hit_radius <= 0.0 {
        return 0.0;
    }
    1.0 - (distance / hit_radius).clamp(0.0, 1.0)
}

/// Finds the nearest letter key within `hit_radius` of the sample.
/// The strict `<` comparison keeps the earliest layout entry on exact
/// distance ties.
pub fn resolve_hit(
    sample: &SwipeSample,
    geometry: &KeyboardGeometry,
    hit_radius: f32,
) -> Option<KeyHit> {
    let mut best: Option<(char, f32)> = None;

    for key in &geometry.keys {
        let Some(letter) = key.letter() else {
            continue;
        };
        let (cx, cy) = key.rect.center();
        let dx = sample.x - cx;
        let dy = sample.y - cy;
        let distance = (dx * dx + dy * dy).sqrt();

        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((letter, distance)),
        }
    }

    let (key, distance) = best?;
    if distance > hit_radius {
        return None;
    }

    Some(KeyHit {
        key,
        distance,
        confidence: confidence(distance, hit_radius),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{KeyRect, KeySlot};

    fn key(id: &str, left: f32, top: f32) -> KeySlot {
        KeySlot {
            id: id.to_string(),
            rect: KeyRect::new(left, top, left + 50.0, top + 50.0),
        }
    }

    fn geom(keys: Vec<KeySlot>) -> KeyboardGeometry {
        KeyboardGeometry {
            name: "test".to_string(),
            keys,
        }
    }

    fn sample(x: f32, y: f32) -> SwipeSample {
        SwipeSample { x, y, t_ms: 0 }
    }

    #[test]
    fn test_center_hit_is_full_confidence() {
        let geometry = geom(vec![key("q", 0.0, 0.0)]);
        let hit = resolve_hit(&sample(25.0, 25.0), &geometry, 60.0).unwrap();
        assert_eq!(hit.key, 'q');
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.confidence, 1.0);
    }

    #[test]
    fn test_hit_exactly_at_radius_scores_zero() {
        let geometry = geom(vec![key("q", 0.0, 0.0)]);
        // Center is (25, 25); (85, 25) is exactly 60 away.
        let hit = resolve_hit(&sample(85.0, 25.0), &geometry, 60.0).unwrap();
        assert_eq!(hit.confidence, 0.0);
    }

    #[test]
    fn test_beyond_radius_is_no_hit() {
        let geometry = geom(vec![key("q", 0.0, 0.0)]);
        assert!(resolve_hit(&sample(86.0, 25.0), &geometry, 60.0).is_none());
    }

    #[test]
    fn test_non_letter_keys_ignored() {
        // "shift" sits right under the sample but is not eligible.
        let geometry = geom(vec![key("shift", 0.0, 0.0), key("z", 50.0, 0.0)]);
        let hit = resolve_hit(&sample(25.0, 25.0), &geometry, 60.0).unwrap();
        assert_eq!(hit.key, 'z');
    }

    #[test]
    fn test_empty_geometry_is_no_hit() {
        let geometry = geom(vec![]);
        assert!(resolve_hit(&sample(25.0, 25.0), &geometry, 60.0).is_none());
    }

    #[test]
    fn test_tie_resolves_to_earlier_layout_entry() {
        // Sample at x=50 is equidistant from both centers (25 and 75).
        let geometry = geom(vec![key("a", 0.0, 0.0), key("b", 50.0, 0.0)]);
        let hit = resolve_hit(&sample(50.0, 25.0), &geometry, 60.0).unwrap();
        assert_eq!(hit.key, 'a');
    }

    #[test]
    fn test_degenerate_rect_still_has_a_center() {
        let zero = KeySlot {
            id: "x".to_string(),
            rect: KeyRect::new(25.0, 25.0, 25.0, 25.0),
        };
        let geometry = geom(vec![zero]);
        let hit = resolve_hit(&sample(25.0, 25.0), &geometry, 60.0).unwrap();
        assert_eq!(hit.key, 'x');
        assert_eq!(hit.confidence, 1.0);
    }
}
