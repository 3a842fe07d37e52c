//! Contour extraction for gridded scalar data.
//!
//! Implements the full pipeline: sentinel boundary padding, marching
//! squares cell classification, edge interpolation, ring assembly, and
//! mapping back into caller coordinates. Thresholds are traced in
//! parallel; results come back in the caller's requested order.

pub mod assemble;
pub mod cell;
pub mod mapper;
pub mod path;
pub mod smooth;

use rayon::prelude::*;
use tracing::debug;

use contour_core::{ContourSet, Grid, ThresholdSpec};

pub use path::{ContourPath, DrawCommand};

/// Trace contours for every resolved threshold level.
///
/// Each returned [`ContourSet`] carries the threshold it was traced at and
/// its rings grouped as one even-odd polygon (empty when no samples cross
/// the level). With `smooth` set, crossing points are linearly
/// interpolated along cell edges; otherwise they sit at edge midpoints.
pub fn compute(grid: &Grid, thresholds: &ThresholdSpec, smooth: bool) -> Vec<ContourSet> {
    let (min, max) = grid.value_range();
    let levels = thresholds.resolve(min, max);

    debug!(
        width = grid.width(),
        height = grid.height(),
        data_min = min,
        data_max = max,
        num_levels = levels.len(),
        smooth = smooth,
        "compute contours"
    );

    if levels.is_empty() {
        return vec![];
    }

    let padded = grid.padded();

    // Levels are independent; ordered collect restores the caller's order.
    levels
        .par_iter()
        .map(|&threshold| trace_level(&padded, grid.width(), grid.height(), threshold, smooth))
        .collect()
}

/// Trace contours and adapt them to draw-command sequences, one entry per
/// resolved threshold.
pub fn render(grid: &Grid, thresholds: &ThresholdSpec, smooth: bool) -> Vec<ContourPath> {
    compute(grid, thresholds, smooth)
        .iter()
        .map(path::to_path)
        .collect()
}

/// Run one threshold through the cell/assembly/mapping stages.
fn trace_level(
    padded: &Grid,
    source_width: usize,
    source_height: usize,
    threshold: f64,
    smooth: bool,
) -> ContourSet {
    let segments = cell::march_cells(padded, threshold, smooth);
    let rings = assemble::assemble_rings(&segments);
    let rings = mapper::unpad_rings(rings, source_width, source_height);

    debug!(
        threshold = threshold,
        segments = segments.len(),
        rings = rings.len(),
        "traced level"
    );

    let polygons = if rings.is_empty() {
        vec![]
    } else {
        vec![rings]
    };

    ContourSet {
        threshold,
        polygons,
    }
}
