//! Cross-source motor reconciliation.
//!
//! A run moves through three stages over one in-memory batch:
//!
//! - scalar comparison (manufacturer, peak thrust, impulse, masses)
//! - thrust-curve consistency over a fixed sampling grid
//! - canonical selection plus a minimum sample-density gate
//!
//! Each stage only runs if the previous one passed. `compare_batch` is pure: it
//! returns every diagnostic it computed and leaves rendering to the caller.

pub mod curve;
pub mod scalar;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;

pub use curve::*;
pub use scalar::*;
pub use selection::*;

use tracing::debug;

use crate::domain::{ComparePolicy, Comparison, SourceBatch, Verdict};

/// Compare the motors in `batch` and pick the canonical one.
///
/// `policy` is used as given; front-ends run `ComparePolicy::validate` first.
/// A policy with no divisions still cannot pass the curve stage.
pub fn compare_batch(batch: &SourceBatch, policy: &ComparePolicy) -> Comparison {
    match batch.len() {
        0 => return Comparison::terminal(Verdict::Empty),
        1 => {
            let source = batch.entries()[0].source.clone();
            return Comparison::terminal(Verdict::SingleCandidate { index: 0, source });
        }
        _ => {}
    }

    let Some(scalars) = compare_scalars(batch, policy) else {
        return Comparison::terminal(Verdict::Empty);
    };
    debug!(
        motors = batch.len(),
        causes = ?scalars.causes,
        peak_discrepancy = scalars.peak_thrust.spread.discrepancy,
        impulse_discrepancy = scalars.total_impulse.spread.discrepancy,
        "scalar comparison finished"
    );

    if !scalars.passed() {
        return Comparison {
            verdict: Verdict::Mismatch {
                causes: scalars.causes.clone(),
            },
            scalars: Some(scalars),
            curve: None,
            goodness: Vec::new(),
        };
    }

    let grid = resample(batch, scalars.sample_span, policy.divisions);
    let curve = check_curves(&grid, scalars.reference_thrust, policy);
    debug!(
        invalid = curve.invalid,
        divisions = curve.divisions(),
        allowance = curve.allowance,
        "curve consistency finished"
    );

    if !curve.passed() {
        return Comparison {
            verdict: Verdict::CurveMismatch {
                invalid: curve.invalid,
                divisions: curve.divisions(),
            },
            scalars: Some(scalars),
            curve: Some(curve),
            goodness: Vec::new(),
        };
    }

    let goodness = score_candidates(batch, policy);
    let verdict = match select_best(&goodness) {
        None => Verdict::Empty,
        Some(best) => {
            let entry = &batch.entries()[best.index];
            let points = entry.motor.point_count();
            debug!(index = best.index, score = best.score, points, "selected candidate");
            if points < policy.min_points {
                Verdict::InsufficientData {
                    index: best.index,
                    source: entry.source.clone(),
                    points,
                }
            } else {
                Verdict::Consistent {
                    index: best.index,
                    score: best.score,
                    source: entry.source.clone(),
                }
            }
        }
    };

    Comparison {
        verdict,
        scalars: Some(scalars),
        curve: Some(curve),
        goodness,
    }
}
