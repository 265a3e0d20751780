use tracing::trace;

use crate::config::DecoderConfig;
use crate::geometry::KeyboardGeometry;

use super::hit::resolve_hit;
use super::path::SwipePath;

/// A deduplicated, debounced traversal of one key during a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyVisit {
    pub key: char,
    pub confidence: f32,
    pub t_ms: u64,
}

/// Compresses the raw per-sample hit stream into distinct key visits.
///
/// Single forward pass, in original temporal order. Order matters: the merge
/// and debounce decisions depend on sequence adjacency, so reordering samples
/// changes the result.
pub fn reduce(
    path: &SwipePath,
    geometry: &KeyboardGeometry,
    config: &DecoderConfig,
) -> Vec<KeyVisit> {
    let mut visits: Vec<KeyVisit> = Vec::new();
    let mut last_recorded_ms: u64 = 0;

    for sample in path.samples() {
        let Some(hit) = resolve_hit(sample, geometry, config.hit_radius) else {
            continue;
        };

        if let Some(last) = visits.last_mut() {
            // Same key as the last visit: keep the best observation seen.
            // The visit timestamp is not revised.
            if last.key == hit.key {
                if hit.confidence > last.confidence {
                    last.confidence = hit.confidence;
                }
                continue;
            }
            // Key change arriving inside the debounce window: dropped.
            if sample.t_ms.saturating_sub(last_recorded_ms) < config.min_key_interval_ms {
                trace!(key = %hit.key, t_ms = sample.t_ms, "debounced key change");
                continue;
            }
        }

        last_recorded_ms = sample.t_ms;
        visits.push(KeyVisit {
            key: hit.key,
            confidence: hit.confidence,
            t_ms: sample.t_ms,
        });
    }

    visits
}
