pub mod hit;
pub mod path;
pub mod reduce;
pub mod word;

pub use self::hit::{confidence, resolve_hit, KeyHit};
pub use self::path::{GestureSnapshot, SwipePath, SwipeSample};
pub use self::reduce::{reduce, KeyVisit};
pub use self::word::build_word;

use std::time::Instant;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::dictionary::Dictionary;
use crate::geometry::KeyboardGeometry;
use crate::suggest;

/// Swipe-to-word decoder for one input session.
///
/// A plain stateful value object: construct one per session, call
/// `start_swipe` / `add_point` / `end_swipe` in temporal order from a single
/// thread. Geometry and dictionary are borrowed per call and never retained,
/// so the caller may mutate them freely between gestures.
pub struct SwipeDecoder {
    config: DecoderConfig,
    path: SwipePath,
    visits: Vec<KeyVisit>,
    epoch: Instant,
}

impl SwipeDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            path: SwipePath::default(),
            visits: Vec::new(),
            epoch: Instant::now(),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Begins a new gesture, discarding any unfinished one. Restarting while
    /// already recording is legal; it is the only cancellation mechanism.
    pub fn start_swipe(&mut self, x: f32, y: f32) {
        let t_ms = self.now_ms();
        self.start_swipe_at(x, y, t_ms);
    }

    /// `start_swipe` with an explicit timestamp, for trace replay.
    pub fn start_swipe_at(&mut self, x: f32, y: f32, t_ms: u64) {
        self.path.clear();
        self.visits.clear();
        self.path.push(x, y, t_ms);
    }

    /// Appends a sample to the gesture in flight. Always accepted; there is
    /// no upper bound on sample count here.
    pub fn add_point(&mut self, x: f32, y: f32) {
        let t_ms = self.now_ms();
        self.add_point_at(x, y, t_ms);
    }

    /// `add_point` with an explicit timestamp, for trace replay.
    pub fn add_point_at(&mut self, x: f32, y: f32, t_ms: u64) {
        self.path.push(x, y, t_ms);
    }

    /// True iff the gesture has at least 3 samples and covered enough ground.
    /// Side-effect free; callable mid-gesture.
    pub fn is_valid_swipe(&self) -> bool {
        self.path.len() >= 3 && self.path.total_length() >= self.config.min_swipe_distance
    }

    /// Ends the gesture and decodes it into a word. Gesture state is cleared
    /// regardless of the outcome; afterwards the decoder is idle.
    pub fn end_swipe(&mut self, geometry: &KeyboardGeometry) -> Option<String> {
        let decoded = if self.is_valid_swipe() {
            self.visits = reduce(&self.path, geometry, &self.config);
            let word = build_word(&self.visits, self.config.confidence_threshold);
            debug!(
                samples = self.path.len(),
                visits = self.visits.len(),
                word = word.as_deref().unwrap_or("-"),
                "gesture decoded"
            );
            word
        } else {
            debug!(samples = self.path.len(), "gesture rejected: not a swipe");
            None
        };

        self.path.clear();
        self.visits.clear();
        decoded
    }

    /// Read-only suggestion probe, usable while recording. Runs the reducer
    /// over a scratch copy of the path; stored gesture state is untouched.
    ///
    /// Without a dictionary the candidate itself is the only suggestion.
    /// With one, dictionary words are ranked by edit distance.
    pub fn suggest(
        &self,
        geometry: &KeyboardGeometry,
        dictionary: Option<&Dictionary>,
        limit: usize,
    ) -> Vec<String> {
        if !self.is_valid_swipe() {
            return Vec::new();
        }

        let scratch = reduce(&self.path, geometry, &self.config);
        let Some(candidate) = build_word(&scratch, self.config.confidence_threshold) else {
            return Vec::new();
        };

        match dictionary {
            Some(dict) => suggest::rank(&candidate, dict, limit),
            None => vec![candidate],
        }
    }

    /// Diagnostic summary of the gesture in flight. Zeros when idle.
    pub fn analyze_gesture(&self) -> GestureSnapshot {
        GestureSnapshot {
            sample_count: self.path.len(),
            total_path_length: self.path.total_length(),
            visit_count: self.visits.len(),
            duration_ms: self.path.duration_ms(),
        }
    }
}
