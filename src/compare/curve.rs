//! Thrust-curve consistency check.
//!
//! Every motor's thrust is resampled at `D` evenly spaced times over
//! `[0, sample_span]`. At each time the spread across the batch is measured
//! relative to the reference thrust; divisions whose spread exceeds the thrust
//! margin are counted as invalid.
//!
//! Normalizing by the reference (peak) thrust instead of the local thrust keeps
//! ignition and burnout, where thrust is small, from producing false positives.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::{ComparePolicy, CurveReport, DivisionSample, SourceBatch};
use crate::math::sample_times;
use crate::models::MotorRecord;

/// Thrust of every motor at every sampled time.
///
/// Rows are divisions, columns are motors in batch order.
#[derive(Debug, Clone)]
pub struct ThrustGrid {
    times: Vec<f64>,
    thrust: DMatrix<f64>,
}

impl ThrustGrid {
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn divisions(&self) -> usize {
        self.times.len()
    }

    pub fn motor_count(&self) -> usize {
        self.thrust.ncols()
    }

    pub fn thrust(&self, division: usize, motor: usize) -> f64 {
        self.thrust[(division, motor)]
    }

    /// Thrust of every motor at one division.
    pub fn division(&self, division: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.thrust.ncols()).map(move |j| self.thrust[(division, j)])
    }

    /// The resampled curve of one motor as `(time, thrust)` pairs.
    pub fn curve(&self, motor: usize) -> Vec<(f64, f64)> {
        self.times
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, self.thrust[(i, motor)]))
            .collect()
    }
}

/// Resample every motor in the batch at `divisions` times over `[0, span]`.
///
/// Divisions are evaluated in parallel; the grid keeps batch and time order.
pub fn resample(batch: &SourceBatch, span: f64, divisions: usize) -> ThrustGrid {
    let times = sample_times(span, divisions);
    let motors: Vec<&MotorRecord> = batch.motors().collect();

    let rows: Vec<Vec<f64>> = times
        .par_iter()
        .map(|&t| motors.iter().map(|m| m.thrust_at(t)).collect())
        .collect();

    let thrust = DMatrix::from_fn(times.len(), motors.len(), |i, j| rows[i][j]);
    ThrustGrid { times, thrust }
}

/// Count the divisions whose thrust spread exceeds the policy margin.
pub fn check_curves(grid: &ThrustGrid, reference_thrust: f64, policy: &ComparePolicy) -> CurveReport {
    let samples: Vec<DivisionSample> = (0..grid.divisions())
        .map(|i| {
            let (min, max) = grid
                .division(i)
                .fold(None, |acc: Option<(f64, f64)>, f| match acc {
                    None => Some((f, f)),
                    Some((lo, hi)) => Some((lo.min(f), hi.max(f))),
                })
                .unwrap_or((0.0, 0.0));
            let diff = (max - min) / reference_thrust;
            DivisionSample {
                time: grid.times()[i],
                min,
                max,
                diff,
                invalid: diff > policy.thrust_margin,
            }
        })
        .collect();

    let invalid = samples.iter().filter(|s| s.invalid).count();

    CurveReport {
        reference_thrust,
        tolerance: policy.thrust_margin,
        allowance: policy.allowed_invalid_points,
        samples,
        invalid,
    }
}
