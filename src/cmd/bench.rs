use clap::Args;
use rayon::prelude::*;
use tracing::info;

use glidetype::config::DecoderConfig;
use glidetype::decoder::SwipeDecoder;
use glidetype::dictionary::Dictionary;
use glidetype::error::GtResult;
use glidetype::synth::{synthesize, SynthOptions};

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Wordlist to draw benchmark words from (also used for ranking).
    #[arg(long)]
    pub dict: String,

    /// Keyboard geometry JSON. Overrides --layout.
    #[arg(long)]
    pub geometry: Option<String>,

    /// Built-in layout used when no geometry file is given.
    #[arg(long, default_value = "qwerty")]
    pub layout: String,

    /// Number of words to synthesize gestures for.
    #[arg(long, default_value_t = 500)]
    pub words: usize,

    /// Positional jitter amplitude, in touch units.
    #[arg(long, default_value_t = 12.0)]
    pub jitter: f32,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub config: DecoderConfig,
}

enum Outcome {
    Skipped,
    Decoded { exact: bool, suggested: bool },
}

pub fn run(args: BenchArgs, config_path: Option<&str>) -> GtResult<()> {
    let config = super::resolve_config(config_path, &args.config)?;
    let geometry = super::resolve_geometry(args.geometry.as_deref(), &args.layout)?;
    let dictionary = Dictionary::load_from_file(&args.dict)?;

    let candidates: Vec<String> = dictionary
        .words()
        .iter()
        .filter(|w| w.chars().count() >= 2 && w.chars().all(|c| c.is_alphabetic()))
        .take(args.words)
        .cloned()
        .collect();

    info!(
        "Benchmarking {} words on '{}' ({} keys), jitter {}, seed {}",
        candidates.len(),
        geometry.name,
        geometry.key_count(),
        args.jitter,
        args.seed
    );

    let opts = SynthOptions {
        jitter: args.jitter,
        ..Default::default()
    };

    // One rng per word, derived from the run seed, keeps the sweep
    // reproducible regardless of rayon's scheduling.
    let outcomes: Vec<Outcome> = candidates
        .par_iter()
        .enumerate()
        .map(|(i, word)| {
            let mut rng = fastrand::Rng::with_seed(args.seed.wrapping_add(i as u64));
            let Some(trace) = synthesize(word, &geometry, &opts, &mut rng) else {
                return Outcome::Skipped;
            };

            let mut decoder = SwipeDecoder::new(config.clone());
            let mut points = trace.points.iter();
            let Some(first) = points.next() else {
                return Outcome::Skipped;
            };
            decoder.start_swipe_at(first.x, first.y, first.t_ms);
            for point in points {
                decoder.add_point_at(point.x, point.y, point.t_ms);
            }

            let suggestions = decoder.suggest(&geometry, Some(&dictionary), config.suggest_limit);
            let decoded = decoder.end_swipe(&geometry);

            Outcome::Decoded {
                exact: decoded.as_deref() == Some(word.as_str()),
                suggested: suggestions.iter().any(|s| s == word),
            }
        })
        .collect();

    let mut total = 0usize;
    let mut exact = 0usize;
    let mut suggested = 0usize;
    let mut skipped = 0usize;
    for outcome in &outcomes {
        match outcome {
            Outcome::Skipped => skipped += 1,
            Outcome::Decoded {
                exact: e,
                suggested: s,
            } => {
                total += 1;
                if *e {
                    exact += 1;
                }
                if *s {
                    suggested += 1;
                }
            }
        }
    }

    reports::print_bench_summary(total, exact, suggested, skipped);
    Ok(())
}
