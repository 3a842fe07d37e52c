//! Synthetic grid generators for contour tests and benchmarks.
//!
//! These produce predictable scalar fields whose contour topology is easy
//! to reason about in assertions.

use contour_core::Grid;

/// The classic single-interior-peak grid used throughout the test suite.
///
/// At threshold 2.5 it produces exactly one closed ring around the nonzero
/// region; at 7.5 a smaller ring nested inside it.
pub fn peak_grid() -> Grid {
    Grid::from_rows(&[
        vec![0.0, 0.0, 0.0, 0.0],
        vec![0.0, 5.0, 5.0, 0.0],
        vec![0.0, 5.0, 10.0, 5.0],
        vec![0.0, 0.0, 5.0, 0.0],
    ])
    .expect("peak grid is rectangular")
}

/// Horizontal gradient running 0..max left to right.
pub fn gradient_grid(width: usize, height: usize, max: f64) -> Grid {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 / (width.max(2) - 1) as f64 * max);
        }
    }
    Grid::from_flat(data, width, height).expect("dimensions match")
}

/// Radial bump: highest in the center, falling to zero at the edges.
pub fn radial_grid(width: usize, height: usize, peak: f64) -> Grid {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            data.push(peak * (1.0 - dist / max_dist).max(0.0));
        }
    }
    Grid::from_flat(data, width, height).expect("dimensions match")
}

/// Overlapping sine waves, a smooth field with several hills and valleys.
pub fn wave_grid(width: usize, height: usize) -> Grid {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width as f64;
            let fy = row as f64 / height as f64;

            let v1 = (fx * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f64::consts::PI * 2.0).sin() * 10.0;

            data.push(50.0 + v1 + v2 + v3);
        }
    }
    Grid::from_flat(data, width, height).expect("dimensions match")
}

/// 2x2 checkerboard cell: the ambiguous saddle configuration.
pub fn saddle_grid() -> Grid {
    Grid::from_rows(&[vec![10.0, 0.0], vec![0.0, 10.0]]).expect("saddle grid is rectangular")
}
