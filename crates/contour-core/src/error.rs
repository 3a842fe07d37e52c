//! Error types for contour extraction.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Errors raised while validating input grids.
///
/// Both variants are detected at `Grid` construction time; the tracing
/// engine itself never fails once it holds a valid grid.
#[derive(Debug, Error)]
pub enum ContourError {
    #[error("Ragged grid: row {row} has {actual} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Grid dimension mismatch: declared {width}x{height} but got {samples} samples")]
    DimensionMismatch {
        width: usize,
        height: usize,
        samples: usize,
    },
}
