//! Thrust-curve motor records.
//!
//! A `MotorRecord` is built once from loader output and never mutated. The
//! derived quantities used by the comparison (peak thrust, burn time, total
//! impulse) are computed at construction from the native samples, so every
//! source file is judged by the same arithmetic regardless of what its header
//! claims.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Manufacturer;
use crate::math::{cumulative_trapezoid, interpolate_samples, trapezoid};

/// Raw parts of a motor, before validation.
#[derive(Debug, Clone, Default)]
pub struct MotorParts {
    pub manufacturer: String,
    pub designation: String,
    /// `(time, thrust)` pairs in seconds and newtons.
    pub samples: Vec<(f64, f64)>,
    /// Mass at ignition (kg).
    pub initial_mass: f64,
    /// Mass after the propellant is consumed (kg).
    pub burnout_mass: f64,
    /// Standard ejection delays (s).
    pub delays: Vec<f64>,
    pub description: String,
}

/// Why a set of motor parts is not a usable record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("thrust curve has {0} samples, at least 2 are required")]
    TooFewSamples(usize),
    #[error("sample {index}: time {time} is not finite and >= 0")]
    InvalidTime { index: usize, time: f64 },
    #[error("sample {index}: time {time} does not increase")]
    NonIncreasingTime { index: usize, time: f64 },
    #[error("sample {index}: thrust {thrust} is not finite and >= 0")]
    InvalidThrust { index: usize, thrust: f64 },
    #[error("thrust curve never rises above zero")]
    ZeroThrust,
    #[error("thrust curve delivers no impulse")]
    ZeroImpulse,
    #[error("initial mass {0} must be finite and > 0")]
    InvalidInitialMass(f64),
    #[error("burnout mass {burnout} must be finite and within [0, {initial}]")]
    InvalidBurnoutMass { burnout: f64, initial: f64 },
    #[error("delay {0} must be finite and >= 0")]
    InvalidDelay(f64),
}

/// One parsed motor description.
#[derive(Debug, Clone, Serialize)]
pub struct MotorRecord {
    manufacturer: Manufacturer,
    designation: String,
    times: Vec<f64>,
    thrusts: Vec<f64>,
    initial_mass: f64,
    burnout_mass: f64,
    delays: Vec<f64>,
    description: String,

    peak_thrust: f64,
    burn_time: f64,
    total_impulse: f64,
}

impl MotorRecord {
    pub fn new(parts: MotorParts) -> Result<Self, RecordError> {
        if parts.samples.len() < 2 {
            return Err(RecordError::TooFewSamples(parts.samples.len()));
        }

        let mut times = Vec::with_capacity(parts.samples.len());
        let mut thrusts = Vec::with_capacity(parts.samples.len());
        for (index, &(time, thrust)) in parts.samples.iter().enumerate() {
            if !(time.is_finite() && time >= 0.0) {
                return Err(RecordError::InvalidTime { index, time });
            }
            if times.last().is_some_and(|&prev| time <= prev) {
                return Err(RecordError::NonIncreasingTime { index, time });
            }
            if !(thrust.is_finite() && thrust >= 0.0) {
                return Err(RecordError::InvalidThrust { index, thrust });
            }
            times.push(time);
            thrusts.push(thrust);
        }

        let peak_thrust = thrusts.iter().copied().fold(0.0, f64::max);
        if peak_thrust <= 0.0 {
            return Err(RecordError::ZeroThrust);
        }

        let initial = parts.initial_mass;
        if !(initial.is_finite() && initial > 0.0) {
            return Err(RecordError::InvalidInitialMass(initial));
        }
        let burnout = parts.burnout_mass;
        if !(burnout.is_finite() && (0.0..=initial).contains(&burnout)) {
            return Err(RecordError::InvalidBurnoutMass { burnout, initial });
        }

        let mut delays = parts.delays;
        if let Some(&bad) = delays.iter().find(|d| !(d.is_finite() && **d >= 0.0)) {
            return Err(RecordError::InvalidDelay(bad));
        }
        delays.sort_by(f64::total_cmp);
        delays.dedup();

        let burn_time = times[times.len() - 1];
        let total_impulse = trapezoid(&times, &thrusts);
        if !(total_impulse > 0.0) {
            return Err(RecordError::ZeroImpulse);
        }

        Ok(Self {
            manufacturer: Manufacturer::new(parts.manufacturer),
            designation: parts.designation,
            times,
            thrusts,
            initial_mass: initial,
            burnout_mass: burnout,
            delays,
            description: parts.description,
            peak_thrust,
            burn_time,
            total_impulse,
        })
    }

    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn point_count(&self) -> usize {
        self.times.len()
    }

    pub fn peak_thrust(&self) -> f64 {
        self.peak_thrust
    }

    /// Time of the last native sample.
    pub fn burn_time(&self) -> f64 {
        self.burn_time
    }

    pub fn total_impulse(&self) -> f64 {
        self.total_impulse
    }

    pub fn delays(&self) -> &[f64] {
        &self.delays
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description length in characters.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Instantaneous thrust, linearly interpolated; 0 outside the burn.
    pub fn thrust_at(&self, t: f64) -> f64 {
        interpolate_samples(t, &self.times, &self.thrusts)
    }

    /// Motor mass at time `t`.
    ///
    /// Propellant is consumed in proportion to delivered impulse, so mass falls
    /// from `initial_mass` at `t <= 0` to `burnout_mass` at the end of the burn
    /// (and for `t = +inf`).
    pub fn mass_at(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return self.initial_mass;
        }
        if t >= self.burn_time {
            return self.burnout_mass;
        }
        let delivered = cumulative_trapezoid(t, &self.times, &self.thrusts) / self.total_impulse;
        self.initial_mass - (self.initial_mass - self.burnout_mass) * delivered.clamp(0.0, 1.0)
    }
}
