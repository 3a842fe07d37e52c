//! Common types for the contour-engine workspace.
//!
//! Holds the data model shared between the tracing engine and its
//! consumers: grids, threshold specifications, geometry, and errors.

pub mod error;
pub mod geom;
pub mod grid;
pub mod threshold;

pub use error::{ContourError, ContourResult};
pub use geom::{ContourSet, Point, Polygon, Ring, CLOSE_TOLERANCE};
pub use grid::Grid;
pub use threshold::{generate_levels, ThresholdSpec};
