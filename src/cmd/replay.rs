use clap::Args;
use tracing::{info, warn};

use glidetype::config::DecoderConfig;
use glidetype::decoder::SwipeDecoder;
use glidetype::dictionary::Dictionary;
use glidetype::error::GtResult;
use glidetype::trace::GestureTrace;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Recorded gesture trace (CSV: x,y,t_ms).
    #[arg(long)]
    pub trace: String,

    /// Keyboard geometry JSON. Overrides --layout.
    #[arg(long)]
    pub geometry: Option<String>,

    /// Built-in layout used when no geometry file is given.
    #[arg(long, default_value = "qwerty")]
    pub layout: String,

    /// Wordlist for suggestion ranking (one word per line).
    #[arg(long)]
    pub dict: Option<String>,

    #[command(flatten)]
    pub config: DecoderConfig,
}

pub fn run(args: ReplayArgs, config_path: Option<&str>) -> GtResult<()> {
    let config = super::resolve_config(config_path, &args.config)?;
    let geometry = super::resolve_geometry(args.geometry.as_deref(), &args.layout)?;

    let dictionary = match &args.dict {
        Some(path) => {
            info!("Loading dictionary: {}", path);
            Some(Dictionary::load_from_file(path)?)
        }
        None => None,
    };

    let trace = GestureTrace::load_from_file(&args.trace)?;
    info!(
        "Replaying {} samples against '{}' ({} keys)",
        trace.points.len(),
        geometry.name,
        geometry.key_count()
    );

    let limit = config.suggest_limit;
    let mut decoder = SwipeDecoder::new(config);

    let mut points = trace.points.iter();
    let Some(first) = points.next() else {
        warn!("Trace is empty; nothing to decode.");
        return Ok(());
    };
    decoder.start_swipe_at(first.x, first.y, first.t_ms);
    for point in points {
        decoder.add_point_at(point.x, point.y, point.t_ms);
    }

    // Probe before ending the gesture: suggest() is read-only, end_swipe()
    // clears everything.
    let snapshot = decoder.analyze_gesture();
    let valid = decoder.is_valid_swipe();
    let suggestions = decoder.suggest(&geometry, dictionary.as_ref(), limit);
    let word = decoder.end_swipe(&geometry);

    reports::print_snapshot(&snapshot, valid);
    reports::print_decode(word.as_deref(), &suggestions);
    Ok(())
}
