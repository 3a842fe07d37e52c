//! Geometry produced by contour extraction.

use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether a ring's endpoints coincide.
pub const CLOSE_TOLERANCE: f64 = 1.0e-3;

/// A point in grid coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One contour loop: an ordered point sequence, closed or open.
///
/// A ring is closed when its first and last points coincide within
/// [`CLOSE_TOLERANCE`] and it holds more than two points. Open rings are
/// degenerate chains that a well-padded grid should not produce, but they
/// are carried through rather than treated as fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Ring {
    /// Build a ring, classifying it as closed or open from its endpoints.
    pub fn from_points(points: Vec<Point>) -> Self {
        let closed = points.len() > 2
            && points
                .first()
                .zip(points.last())
                .map(|(a, b)| a.distance(b) < CLOSE_TOLERANCE)
                .unwrap_or(false);
        Self { points, closed }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A polygon is a group of rings rendered together under an even-odd fill
/// rule; no explicit outer/hole classification is carried.
pub type Polygon = Vec<Ring>;

/// All contours extracted at a single threshold level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    /// The iso-value this set was traced at.
    pub threshold: f64,
    /// Polygon groups; empty when the threshold produced no crossings.
    pub polygons: Vec<Polygon>,
}

impl ContourSet {
    /// Total number of rings across all polygon groups.
    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_ring_closed_classification() {
        let ring = Ring::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(ring.closed);
    }

    #[test]
    fn test_ring_open_when_endpoints_differ() {
        let ring = Ring::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        assert!(!ring.closed);
    }

    #[test]
    fn test_ring_two_points_never_closed() {
        // Coincident endpoints but too short to form a loop
        let ring = Ring::from_points(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
        assert!(!ring.closed);
    }

    #[test]
    fn test_ring_closure_tolerance() {
        let ring = Ring::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0005, 0.0),
        ]);
        assert!(ring.closed);

        let ring = Ring::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.01, 0.0),
        ]);
        assert!(!ring.closed);
    }

    #[test]
    fn test_contour_set_serde_round_trip() {
        let set = ContourSet {
            threshold: 2.5,
            polygons: vec![vec![Ring::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 0.0),
            ])]],
        };
        let json = serde_json::to_string(&set).unwrap();
        let back: ContourSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
