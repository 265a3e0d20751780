pub mod bench;
pub mod replay;

use std::str::FromStr;
use tracing::info;

use glidetype::config::DecoderConfig;
use glidetype::error::{GlideError, GtResult};
use glidetype::geometry::KeyboardGeometry;
use glidetype::layouts::BuiltinLayout;

/// A `--config` file wins over the flattened CLI flags wholesale.
pub fn resolve_config(path: Option<&str>, flags: &DecoderConfig) -> GtResult<DecoderConfig> {
    let config = match path {
        Some(p) => {
            info!("Loading decoder config: {}", p);
            DecoderConfig::load_from_file(p)?
        }
        None => flags.clone(),
    };
    config.validate()?;
    Ok(config)
}

pub fn resolve_geometry(geometry: Option<&str>, layout: &str) -> GtResult<KeyboardGeometry> {
    match geometry {
        Some(path) => {
            info!("Loading keyboard geometry: {}", path);
            KeyboardGeometry::load_from_file(path)
        }
        None => {
            let builtin = BuiltinLayout::from_str(layout).map_err(|_| {
                GlideError::Config(format!(
                    "unknown builtin layout '{}' (expected one of: {})",
                    layout,
                    BuiltinLayout::names().join(", ")
                ))
            })?;
            Ok(builtin.geometry())
        }
    }
}
