//! Aggregate scalar comparison.
//!
//! For each scalar property we collect the per-motor values in batch order and
//! compute min / max / relative discrepancy. Gated properties that exceed their
//! tolerance are recorded as mismatch causes; the caller stops the run if any
//! cause is present.

use crate::domain::{
    ComparePolicy, CountStats, MismatchCause, PropertyStats, ScalarReport, SourceBatch,
};
use crate::math::Spread;
use crate::models::MotorRecord;

/// Compare every scalar property across the batch.
///
/// Returns `None` for an empty batch, where no statistic is defined.
pub fn compare_scalars(batch: &SourceBatch, policy: &ComparePolicy) -> Option<ScalarReport> {
    let reference = batch.get(0)?.motor.manufacturer().clone();
    let manufacturers: Vec<_> = batch.motors().map(|m| m.manufacturer().clone()).collect();
    let manufacturer_consistent = manufacturers.iter().all(|m| *m == reference);

    let peak_thrust = property(batch, MotorRecord::peak_thrust, Some(policy.max_thrust_margin))?;
    let burn_time = property(batch, MotorRecord::burn_time, None)?;
    let total_impulse = property(
        batch,
        MotorRecord::total_impulse,
        Some(policy.total_impulse_margin),
    )?;
    let initial_mass = property(
        batch,
        |m| m.mass_at(0.0),
        Some(policy.initial_mass_margin),
    )?;
    let burnout_mass = property(
        batch,
        |m| m.mass_at(f64::INFINITY),
        Some(policy.burnout_mass_margin),
    )?;

    let delays = CountStats::from_values(batch.motors().map(|m| m.delays().len()).collect());
    let points = CountStats::from_values(batch.motors().map(MotorRecord::point_count).collect());
    let description_len =
        CountStats::from_values(batch.motors().map(MotorRecord::description_len).collect());

    let mut causes = Vec::new();
    if !manufacturer_consistent {
        causes.push(MismatchCause::Manufacturer);
    }
    let gated = [
        (&peak_thrust, MismatchCause::MaxThrust),
        (&total_impulse, MismatchCause::TotalImpulse),
        (&initial_mass, MismatchCause::InitialMass),
        (&burnout_mass, MismatchCause::EmptyMass),
    ];
    for (stats, cause) in gated {
        if stats.exceeds_tolerance() {
            causes.push(cause);
        }
    }

    // Averaging the extremes keeps a single outlier from dominating the
    // curve-check denominator; the span must cover the longest burn.
    let reference_thrust = peak_thrust.spread.midpoint();
    let sample_span = burn_time.spread.max;

    Some(ScalarReport {
        manufacturers,
        manufacturer_consistent,
        peak_thrust,
        burn_time,
        total_impulse,
        initial_mass,
        burnout_mass,
        delays,
        points,
        description_len,
        reference_thrust,
        sample_span,
        causes,
    })
}

fn property(
    batch: &SourceBatch,
    value: impl Fn(&MotorRecord) -> f64,
    tolerance: Option<f64>,
) -> Option<PropertyStats> {
    let values: Vec<f64> = batch.motors().map(value).collect();
    let spread = Spread::of(&values)?;
    Some(PropertyStats {
        values,
        spread,
        tolerance,
    })
}
