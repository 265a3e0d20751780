use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::warn;

use crate::decoder::SwipeDecoder;
use crate::error::GtResult;
use crate::geometry::KeyboardGeometry;

/// One row of a recorded gesture trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f32,
    pub y: f32,
    pub t_ms: u64,
}

/// A gesture as captured from a touch surface, stored as CSV (`x,y,t_ms`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureTrace {
    pub points: Vec<TracePoint>,
}

impl GestureTrace {
    pub fn new(points: Vec<TracePoint>) -> Self {
        Self { points }
    }

    /// Reads a trace file, tolerating malformed rows (skipped and counted,
    /// like the corpus loaders this codebase grew up with).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GtResult<Self> {
        let file = File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(file);

        let mut points = Vec::new();
        let mut skipped = 0usize;

        for result in rdr.deserialize::<TracePoint>() {
            match result {
                Ok(point) => points.push(point),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped malformed trace rows");
        }

        Ok(Self { points })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GtResult<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for point in &self.points {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Drives a decoder through the whole trace with its recorded timing and
    /// decodes it. An empty trace decodes to nothing.
    pub fn replay(
        &self,
        decoder: &mut SwipeDecoder,
        geometry: &KeyboardGeometry,
    ) -> Option<String> {
        let mut points = self.points.iter();
        let first = points.next()?;

        decoder.start_swipe_at(first.x, first.y, first.t_ms);
        for point in points {
            decoder.add_point_at(point.x, point.y, point.t_ms);
        }
        decoder.end_swipe(geometry)
    }
}
