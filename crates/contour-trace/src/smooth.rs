//! Chaikin corner-cutting smoothing for rings.
//!
//! Geometric polish applied after tracing; distinct from the interpolation
//! `smooth` flag, which only affects where edge crossings are placed.

use contour_core::{Point, Ring};

/// Apply `passes` rounds of Chaikin's corner cutting.
///
/// Closed rings wrap around; open chains keep their endpoints. Rings with
/// fewer than three points are returned unchanged.
pub fn smooth_ring(ring: &Ring, passes: u32) -> Ring {
    if passes == 0 || ring.points.len() < 3 {
        return ring.clone();
    }

    let mut points = ring.points.clone();

    for _ in 0..passes {
        let mut new_points = Vec::with_capacity(points.len() * 2);

        for i in 0..points.len() {
            let p1 = points[i];
            let p2 = if ring.closed {
                points[(i + 1) % points.len()]
            } else if i + 1 < points.len() {
                points[i + 1]
            } else {
                break;
            };

            // Cut each segment at 25% and 75%
            new_points.push(Point::new(
                0.75 * p1.x + 0.25 * p2.x,
                0.75 * p1.y + 0.25 * p2.y,
            ));
            new_points.push(Point::new(
                0.25 * p1.x + 0.75 * p2.x,
                0.25 * p1.y + 0.75 * p2.y,
            ));
        }

        if !ring.closed && !points.is_empty() {
            new_points.insert(0, points[0]);
            if let Some(&last) = points.last() {
                new_points.push(last);
            }
        }

        points = new_points;
    }

    Ring {
        points,
        closed: ring.closed,
    }
}
