//! Shared domain types.
//!
//! Everything produced by a comparison run is plain data deriving `Serialize`, so
//! it can be:
//!
//! - rendered to the terminal by `report`
//! - exported as a JSON report
//! - asserted on directly in tests

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::error::AppError;
use crate::math::Spread;

/// Motor manufacturer identity.
///
/// Two manufacturers are the same when their normalized keys match
/// (case, surrounding and repeated whitespace are ignored). The display name keeps
/// the spelling it was constructed with.
#[derive(Debug, Clone)]
pub struct Manufacturer {
    name: String,
    key: String,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        let key = name
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Self { name, key }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Manufacturer {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Manufacturer {}

impl Hash for Manufacturer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Manufacturer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Tolerances and thresholds applied by a comparison run.
///
/// Defaults reproduce the reference policy; every field can be overridden from
/// the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparePolicy {
    /// Maximum relative discrepancy of peak thrust.
    pub max_thrust_margin: f64,
    /// Maximum relative discrepancy of total impulse.
    pub total_impulse_margin: f64,
    /// Maximum relative discrepancy of mass at ignition.
    pub initial_mass_margin: f64,
    /// Maximum relative discrepancy of mass after burnout.
    pub burnout_mass_margin: f64,
    /// Per-division thrust spread, relative to the reference thrust.
    pub thrust_margin: f64,
    /// Number of sampled divisions over the longest burn.
    pub divisions: usize,
    /// How many divisions may exceed `thrust_margin` before the curves disagree.
    pub allowed_invalid_points: usize,
    /// Minimum native sample count of the selected motor.
    pub min_points: usize,
    /// Source suffix (case-insensitive) of the preferred export format.
    pub trusted_suffix: Option<String>,
}

impl Default for ComparePolicy {
    fn default() -> Self {
        Self {
            max_thrust_margin: 0.20,
            total_impulse_margin: 0.10,
            initial_mass_margin: 0.10,
            burnout_mass_margin: 0.10,
            thrust_margin: 0.15,
            divisions: 100,
            allowed_invalid_points: 15,
            min_points: 7,
            trusted_suffix: Some(".rse".to_string()),
        }
    }
}

impl ComparePolicy {
    pub fn validate(&self) -> Result<(), AppError> {
        let margins = [
            ("max_thrust_margin", self.max_thrust_margin),
            ("total_impulse_margin", self.total_impulse_margin),
            ("initial_mass_margin", self.initial_mass_margin),
            ("burnout_mass_margin", self.burnout_mass_margin),
            ("thrust_margin", self.thrust_margin),
        ];
        for (name, value) in margins {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AppError::new(
                    2,
                    format!("Invalid {name}: {value} (must be finite and >= 0)."),
                ));
            }
        }
        if self.divisions < 2 {
            return Err(AppError::new(2, "Divisions must be >= 2."));
        }
        if self.trusted_suffix.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::new(2, "Trusted suffix must not be empty."));
        }
        Ok(())
    }

    /// Whether `source` ends with the trusted suffix, ignoring case.
    pub fn is_trusted_source(&self, source: &str) -> bool {
        let Some(suffix) = self.trusted_suffix.as_deref() else {
            return false;
        };
        source.to_lowercase().ends_with(&suffix.to_lowercase())
    }
}

/// A gated scalar property that disagreed across the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchCause {
    Manufacturer,
    MaxThrust,
    TotalImpulse,
    InitialMass,
    EmptyMass,
}

impl MismatchCause {
    /// Human-readable label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            MismatchCause::Manufacturer => "Manufacturer",
            MismatchCause::MaxThrust => "Max thrust",
            MismatchCause::TotalImpulse => "Total impulse",
            MismatchCause::InitialMass => "Initial mass",
            MismatchCause::EmptyMass => "Empty mass",
        }
    }
}

impl fmt::Display for MismatchCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-motor values of one real-valued property plus their spread.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyStats {
    pub values: Vec<f64>,
    pub spread: Spread,
    /// `None` for properties that are reported but not gated.
    pub tolerance: Option<f64>,
}

impl PropertyStats {
    pub fn exceeds_tolerance(&self) -> bool {
        self.tolerance
            .is_some_and(|tol| self.spread.discrepancy > tol)
    }
}

/// Per-motor values of one count property plus the batch maximum.
#[derive(Debug, Clone, Serialize)]
pub struct CountStats {
    pub values: Vec<usize>,
    pub max: usize,
}

impl CountStats {
    pub fn from_values(values: Vec<usize>) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        Self { values, max }
    }
}

/// Output of the scalar comparison stage.
#[derive(Debug, Clone, Serialize)]
pub struct ScalarReport {
    pub manufacturers: Vec<Manufacturer>,
    pub manufacturer_consistent: bool,
    pub peak_thrust: PropertyStats,
    pub burn_time: PropertyStats,
    pub total_impulse: PropertyStats,
    pub initial_mass: PropertyStats,
    pub burnout_mass: PropertyStats,
    pub delays: CountStats,
    pub points: CountStats,
    pub description_len: CountStats,
    /// Midpoint of the peak-thrust extremes; denominator of the curve check.
    pub reference_thrust: f64,
    /// Longest total burn time; the curve check samples `[0, sample_span]`.
    pub sample_span: f64,
    /// Every gated property that exceeded its tolerance, in check order.
    pub causes: Vec<MismatchCause>,
}

impl ScalarReport {
    pub fn passed(&self) -> bool {
        self.causes.is_empty()
    }
}

/// Thrust spread at one sampled division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionSample {
    pub time: f64,
    pub min: f64,
    pub max: f64,
    /// `(max - min) / reference_thrust`.
    pub diff: f64,
    pub invalid: bool,
}

/// Output of the curve consistency stage.
#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    pub reference_thrust: f64,
    pub tolerance: f64,
    pub allowance: usize,
    pub samples: Vec<DivisionSample>,
    pub invalid: usize,
}

impl CurveReport {
    pub fn divisions(&self) -> usize {
        self.samples.len()
    }

    /// A check that sampled nothing proves nothing, so it never passes.
    pub fn passed(&self) -> bool {
        !self.samples.is_empty() && self.invalid <= self.allowance
    }
}

/// Tie-break score of one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goodness {
    pub index: usize,
    pub max_delays: bool,
    pub max_points: bool,
    pub max_description: bool,
    pub trusted_format: bool,
    pub score: u32,
}

/// Terminal state of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// No motors survived loading.
    Empty,
    /// Exactly one motor; it is the canonical file without any checks.
    SingleCandidate { index: usize, source: String },
    /// Gated scalar properties disagree.
    Mismatch { causes: Vec<MismatchCause> },
    /// Too many sampled divisions disagree on thrust.
    CurveMismatch { invalid: usize, divisions: usize },
    /// The selected motor has too few native samples to be usable.
    InsufficientData {
        index: usize,
        source: String,
        points: usize,
    },
    /// All checks passed; `index` is the canonical motor.
    Consistent {
        index: usize,
        score: u32,
        source: String,
    },
}

impl Verdict {
    /// Whether the run produced a usable canonical motor.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Verdict::SingleCandidate { .. } | Verdict::Consistent { .. }
        )
    }

    /// Index of the motor selection settled on, if any.
    ///
    /// `InsufficientData` still names its winner even though the run failed.
    pub fn selected(&self) -> Option<usize> {
        match self {
            Verdict::SingleCandidate { index, .. }
            | Verdict::Consistent { index, .. }
            | Verdict::InsufficientData { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Everything a comparison run computed.
///
/// Stages that did not run leave their report empty: a `Mismatch` has scalars but
/// no curve report, a `CurveMismatch` has no goodness scores.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub verdict: Verdict,
    pub scalars: Option<ScalarReport>,
    pub curve: Option<CurveReport>,
    pub goodness: Vec<Goodness>,
}

impl Comparison {
    pub fn terminal(verdict: Verdict) -> Self {
        Self {
            verdict,
            scalars: None,
            curve: None,
            goodness: Vec::new(),
        }
    }
}
