//! Rectangular sample grids and the sentinel boundary pad.

use serde::{Deserialize, Serialize};

use crate::error::{ContourError, ContourResult};

/// How far below the data minimum the sentinel border sits. Large enough
/// to fall below any realistic threshold.
pub const SENTINEL_DROP: f64 = 1000.0;

/// A rectangular grid of scalar samples in row-major order.
///
/// Invariant: `samples.len() == width * height`, enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    samples: Vec<f64>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from nested rows. Fails if row lengths are unequal.
    pub fn from_rows(rows: &[Vec<f64>]) -> ContourResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ContourError::RaggedRows {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        let mut samples = Vec::with_capacity(width * height);
        for row in rows {
            samples.extend_from_slice(row);
        }

        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// Build a grid from a flat row-major array with explicit dimensions.
    /// Fails if the declared dimensions do not match the sample count.
    pub fn from_flat(samples: Vec<f64>, width: usize, height: usize) -> ContourResult<Self> {
        if samples.len() != width * height {
            return Err(ContourError::DimensionMismatch {
                width,
                height,
                samples: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample at column `x`, row `y`. Callers stay in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.samples[y * self.width + x]
    }

    /// NaN-filtered (min, max) over all samples. Returns infinities when
    /// the grid is empty or all-NaN.
    pub fn value_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }

    /// Wrap the grid with a one-cell border of sentinel low values so every
    /// iso-region closes inside the padded bounds, including regions that
    /// touch the original edge.
    pub fn padded(&self) -> Grid {
        let (min, _) = self.value_range();
        let sentinel = if min.is_finite() {
            min - SENTINEL_DROP
        } else {
            -SENTINEL_DROP
        };

        let pw = self.width + 2;
        let ph = self.height + 2;
        let mut samples = vec![sentinel; pw * ph];
        for y in 0..self.height {
            let src = y * self.width;
            let dst = (y + 1) * pw + 1;
            samples[dst..dst + self.width].copy_from_slice(&self.samples[src..src + self.width]);
        }

        Grid {
            samples,
            width: pw,
            height: ph,
        }
    }
}
