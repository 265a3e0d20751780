use crate::geometry::KeyboardGeometry;
use crate::trace::{GestureTrace, TracePoint};

/// Controls for synthetic gesture generation.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Interpolated samples per key-to-key segment.
    pub samples_per_segment: usize,
    /// Milliseconds between consecutive samples.
    pub sample_interval_ms: u64,
    /// Uniform positional jitter amplitude, in touch units.
    pub jitter: f32,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: 6,
            sample_interval_ms: 16,
            jitter: 0.0,
        }
    }
}

fn wobble(rng: &mut fastrand::Rng, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        (rng.f32() * 2.0 - 1.0) * amplitude
    } else {
        0.0
    }
}

/// Builds a trace that glides through the centers of the word's keys with
/// linear interpolation between them.
///
/// Returns `None` for an empty word or a word using a key the geometry does
/// not have. Single-key words produce a one-point trace, which will never
/// validate as a swipe; that mirrors reality.
pub fn synthesize(
    word: &str,
    geometry: &KeyboardGeometry,
    opts: &SynthOptions,
    rng: &mut fastrand::Rng,
) -> Option<GestureTrace> {
    let mut centers = Vec::with_capacity(word.len());
    for ch in word.chars() {
        let slot = geometry.find(&ch.to_string())?;
        centers.push(slot.rect.center());
    }
    let (first_x, first_y) = *centers.first()?;

    let mut points = Vec::new();
    let mut t_ms = 0u64;
    points.push(TracePoint {
        x: first_x + wobble(rng, opts.jitter),
        y: first_y + wobble(rng, opts.jitter),
        t_ms,
    });

    for pair in centers.windows(2) {
        let (ax, ay) = pair[0];
        let (bx, by) = pair[1];
        for step in 1..=opts.samples_per_segment {
            let f = step as f32 / opts.samples_per_segment as f32;
            t_ms += opts.sample_interval_ms;
            points.push(TracePoint {
                x: ax + (bx - ax) * f + wobble(rng, opts.jitter),
                y: ay + (by - ay) * f + wobble(rng, opts.jitter),
                t_ms,
            });
        }
    }

    Some(GestureTrace::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::BuiltinLayout;

    #[test]
    fn test_unknown_key_yields_none() {
        let geometry = BuiltinLayout::Qwerty.geometry();
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(synthesize("naïve", &geometry, &SynthOptions::default(), &mut rng).is_none());
    }

    #[test]
    fn test_empty_word_yields_none() {
        let geometry = BuiltinLayout::Qwerty.geometry();
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(synthesize("", &geometry, &SynthOptions::default(), &mut rng).is_none());
    }

    #[test]
    fn test_point_count_and_timing() {
        let geometry = BuiltinLayout::Qwerty.geometry();
        let opts = SynthOptions::default();
        let mut rng = fastrand::Rng::with_seed(1);

        let trace = synthesize("cat", &geometry, &opts, &mut rng).unwrap();
        // 1 start point + 6 per segment, 2 segments.
        assert_eq!(trace.points.len(), 13);
        assert_eq!(trace.points.last().unwrap().t_ms, 12 * 16);
    }

    #[test]
    fn test_same_seed_same_trace() {
        let geometry = BuiltinLayout::Qwerty.geometry();
        let opts = SynthOptions {
            jitter: 10.0,
            ..Default::default()
        };

        let mut rng_a = fastrand::Rng::with_seed(99);
        let mut rng_b = fastrand::Rng::with_seed(99);
        let a = synthesize("hello", &geometry, &opts, &mut rng_a).unwrap();
        let b = synthesize("hello", &geometry, &opts, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
