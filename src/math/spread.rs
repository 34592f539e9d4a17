//! Min/max/relative-discrepancy statistics and uniform sampling grids.

use serde::Serialize;

/// Extremes of one property across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
    pub min: f64,
    pub max: f64,
    /// `(max - min) / min`.
    pub discrepancy: f64,
}

impl Spread {
    /// Compute the spread of `values`. Returns `None` for an empty slice.
    ///
    /// Discrepancy conventions:
    /// - `0` when every value is equal (including all zeros)
    /// - `+inf` when `min <= 0 < max`, so any gate on it fails
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            min,
            max,
            discrepancy: relative_discrepancy(min, max),
        })
    }

    /// Midpoint of the extremes.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

pub fn relative_discrepancy(min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    if min <= 0.0 {
        return f64::INFINITY;
    }
    (max - min) / min
}

/// `divisions` evenly spaced times over `[0, span]`, endpoints included.
pub fn sample_times(span: f64, divisions: usize) -> Vec<f64> {
    match divisions {
        0 => Vec::new(),
        1 => vec![0.0],
        d => (0..d).map(|i| span * i as f64 / (d - 1) as f64).collect(),
    }
}
