use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GlideError, GtResult};

/// Decoder tunables. Fixed at construction time; the decoder never re-reads
/// them mid-gesture.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Minimum cumulative path length before a gesture counts as a swipe.
    #[arg(long, default_value_t = 50.0)]
    pub min_swipe_distance: f32,

    /// Maximum distance from a sample to a key center that still registers a hit.
    #[arg(long, default_value_t = 60.0)]
    pub hit_radius: f32,

    /// Debounce window between visits to different keys.
    #[arg(long, default_value_t = 30)]
    pub min_key_interval_ms: u64,

    /// Visits at or below this confidence are dropped from the built word.
    #[arg(long, default_value_t = 0.3)]
    pub confidence_threshold: f32,

    /// Maximum number of suggestions returned by the ranker.
    #[arg(long, default_value_t = 5)]
    pub suggest_limit: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
            hit_radius: 60.0,
            min_key_interval_ms: 30,
            confidence_threshold: 0.3,
            suggest_limit: 5,
        }
    }
}

impl DecoderConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GtResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> GtResult<()> {
        if self.hit_radius <= 0.0 {
            return Err(GlideError::Config(format!(
                "hit_radius must be positive, got {}",
                self.hit_radius
            )));
        }
        if self.min_swipe_distance < 0.0 {
            return Err(GlideError::Config(format!(
                "min_swipe_distance must not be negative, got {}",
                self.min_swipe_distance
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(GlideError::Config(format!(
                "confidence_threshold must lie in [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DecoderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_radius() {
        let config = DecoderConfig {
            hit_radius: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_threshold_above_one() {
        let config = DecoderConfig {
            confidence_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
