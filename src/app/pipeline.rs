//! Shared "compare pipeline" logic used by the `compare` and `plot` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load files -> build batch -> compare -> resample for display
//!
//! The commands can then focus on presentation (printing vs exports).

use std::path::PathBuf;

use crate::compare::{ThrustGrid, compare_batch, resample};
use crate::domain::{ComparePolicy, Comparison, SourceBatch};
use crate::error::AppError;
use crate::io::load::{LoadOutcome, load_batch};
use crate::io::motor::JsonMotorLoader;

/// All computed outputs of a single `motorcmp compare` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub outcome: LoadOutcome,
    pub comparison: Comparison,
    /// Resampled curves for plotting/export; `None` when nothing was loaded.
    pub grid: Option<ThrustGrid>,
}

/// Load `paths`, compare the batch and resample it for display.
pub fn run_compare(paths: &[PathBuf], policy: &ComparePolicy) -> Result<RunOutput, AppError> {
    policy.validate()?;

    let outcome = load_batch(paths, &JsonMotorLoader);
    let comparison = compare_batch(&outcome.batch, policy);

    // Reuse the span the curve check sampled when it ran.
    let span = comparison
        .scalars
        .as_ref()
        .map(|s| s.sample_span)
        .unwrap_or_else(|| longest_burn(&outcome.batch));
    let grid = display_grid(&outcome.batch, span, policy.divisions);

    Ok(RunOutput {
        outcome,
        comparison,
        grid,
    })
}

/// Load `paths` and resample them without comparing.
pub fn run_plot(paths: &[PathBuf], divisions: usize) -> Result<(LoadOutcome, Option<ThrustGrid>), AppError> {
    if divisions < 2 {
        return Err(AppError::new(2, "Divisions must be >= 2."));
    }
    let outcome = load_batch(paths, &JsonMotorLoader);
    let grid = display_grid(&outcome.batch, longest_burn(&outcome.batch), divisions);
    Ok((outcome, grid))
}

fn longest_burn(batch: &SourceBatch) -> f64 {
    batch.motors().map(|m| m.burn_time()).fold(0.0, f64::max)
}

fn display_grid(batch: &SourceBatch, span: f64, divisions: usize) -> Option<ThrustGrid> {
    if batch.is_empty() || span <= 0.0 {
        return None;
    }
    Some(resample(batch, span, divisions))
}
