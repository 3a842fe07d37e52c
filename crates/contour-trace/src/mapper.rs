//! Mapping rings from padded-grid space back to caller coordinates.

use contour_core::Ring;

/// Undo the one-cell boundary pad and clamp every point into the caller's
/// original grid bounds `[0, width-1] x [0, height-1]`.
///
/// The clamp is post-hoc: contours passing very close to the original edge
/// get flattened against it instead of being re-derived. Accepted tradeoff
/// for interior contours.
pub fn unpad_rings(rings: Vec<Ring>, width: usize, height: usize) -> Vec<Ring> {
    let max_x = (width.saturating_sub(1)) as f64;
    let max_y = (height.saturating_sub(1)) as f64;

    rings
        .into_iter()
        .map(|mut ring| {
            for p in &mut ring.points {
                p.x = (p.x - 1.0).clamp(0.0, max_x);
                p.y = (p.y - 1.0).clamp(0.0, max_y);
            }
            ring
        })
        .collect()
}
