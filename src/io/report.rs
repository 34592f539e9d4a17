//! Write the comparison as a portable JSON report.
//!
//! The report carries the policy that was applied, the load outcome and the full
//! `Comparison`, so a verdict can be audited without re-running the tool.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{ComparePolicy, Comparison};
use crate::error::AppError;
use crate::io::load::{LoadFailure, LoadOutcome};

#[derive(Debug, Serialize)]
pub struct ReportFile<'a> {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub policy: &'a ComparePolicy,
    pub files: &'a [String],
    pub failures: &'a [LoadFailure],
    pub motors: Vec<MotorSummary<'a>>,
    pub comparison: &'a Comparison,
}

#[derive(Debug, Serialize)]
pub struct MotorSummary<'a> {
    pub index: usize,
    pub source: &'a str,
    pub manufacturer: &'a str,
    pub designation: &'a str,
    pub points: usize,
}

pub fn build_report<'a>(
    outcome: &'a LoadOutcome,
    comparison: &'a Comparison,
    policy: &'a ComparePolicy,
) -> ReportFile<'a> {
    let motors = outcome
        .batch
        .entries()
        .iter()
        .enumerate()
        .map(|(index, e)| MotorSummary {
            index,
            source: &e.source,
            manufacturer: e.motor.manufacturer().name(),
            designation: e.motor.designation(),
            points: e.motor.point_count(),
        })
        .collect();

    ReportFile {
        tool: "motorcmp".to_string(),
        generated_at: Utc::now(),
        policy,
        files: &outcome.files,
        failures: &outcome.failures,
        motors,
        comparison,
    }
}

/// Write the comparison report as pretty-printed JSON.
pub fn write_comparison_json(
    path: &Path,
    outcome: &LoadOutcome,
    comparison: &Comparison,
    policy: &ComparePolicy,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, &build_report(outcome, comparison, policy))
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}
