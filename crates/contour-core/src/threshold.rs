//! Threshold (iso-value) specification and resolution.

use serde::{Deserialize, Serialize};

/// How the caller asks for contour levels: an explicit ordered list, or a
/// count to be spaced linearly across the data range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ThresholdSpec {
    /// Explicit levels, used verbatim in the given order.
    Levels(Vec<f64>),
    /// `n` interior levels spaced as `min + i*(max-min)/(n+1)` for
    /// `i in 1..=n`.
    Count(usize),
}

impl ThresholdSpec {
    /// Resolve to a concrete level list for the given data range.
    ///
    /// Permissive by design: a zero count or a degenerate range resolves to
    /// an empty list rather than an error.
    pub fn resolve(&self, min: f64, max: f64) -> Vec<f64> {
        match self {
            ThresholdSpec::Levels(levels) => levels.clone(),
            ThresholdSpec::Count(0) => vec![],
            ThresholdSpec::Count(n) => {
                if !min.is_finite() || !max.is_finite() {
                    return vec![];
                }
                let step = (max - min) / (*n as f64 + 1.0);
                (1..=*n).map(|i| min + i as f64 * step).collect()
            }
        }
    }
}

impl From<Vec<f64>> for ThresholdSpec {
    fn from(levels: Vec<f64>) -> Self {
        ThresholdSpec::Levels(levels)
    }
}

impl From<usize> for ThresholdSpec {
    fn from(count: usize) -> Self {
        ThresholdSpec::Count(count)
    }
}

/// Generate levels at multiples of `interval` within `[min, max]`.
///
/// Returns an empty list for a non-positive interval or an inverted range.
pub fn generate_levels(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || max <= min {
        return vec![];
    }

    // Start from the first multiple of interval at or above min
    let start = (min / interval).ceil() * interval;
    let mut levels = Vec::new();

    let mut level = start;
    while level <= max {
        levels.push(level);
        level += interval;
    }

    levels
}
