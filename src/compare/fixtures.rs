//! Synthetic motors shared by the comparison tests.

use crate::domain::SourceBatch;
use crate::models::{MotorParts, MotorRecord};

/// Builder for a flat-thrust motor with an optional spike at the middle sample.
#[derive(Debug, Clone)]
pub struct MotorFixture {
    level: f64,
    peak: Option<f64>,
    duration: f64,
    points: usize,
    delays: Vec<f64>,
    description: String,
    manufacturer: String,
    masses: (f64, f64),
    source: Option<String>,
}

impl MotorFixture {
    pub fn new(level: f64) -> Self {
        Self {
            level,
            peak: None,
            duration: 1.0,
            points: 20,
            delays: vec![6.0, 10.0, 14.0],
            description: "fixture".to_string(),
            manufacturer: "Cesaroni".to_string(),
            masses: (0.300, 0.120),
            source: None,
        }
    }

    pub fn peak(mut self, peak: f64) -> Self {
        self.peak = Some(peak);
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn delays(mut self, delays: &[f64]) -> Self {
        self.delays = delays.to_vec();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn manufacturer(mut self, manufacturer: &str) -> Self {
        self.manufacturer = manufacturer.to_string();
        self
    }

    pub fn masses(mut self, initial: f64, burnout: f64) -> Self {
        self.masses = (initial, burnout);
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn build(&self) -> MotorRecord {
        let n = self.points.max(2);
        let mut samples: Vec<(f64, f64)> = (0..n)
            .map(|i| (self.duration * i as f64 / (n - 1) as f64, self.level))
            .collect();
        if let Some(peak) = self.peak {
            samples[n / 2].1 = peak;
        }
        MotorRecord::new(MotorParts {
            manufacturer: self.manufacturer.clone(),
            designation: "H100".to_string(),
            samples,
            initial_mass: self.masses.0,
            burnout_mass: self.masses.1,
            delays: self.delays.clone(),
            description: self.description.clone(),
        })
        .expect("fixture motor is valid")
    }
}

/// Build a batch; fixtures without an explicit source become `motor<i>.eng`.
pub fn batch_of(fixtures: Vec<MotorFixture>) -> SourceBatch {
    fixtures
        .into_iter()
        .enumerate()
        .map(|(i, f)| {
            let source = f.source.clone().unwrap_or_else(|| format!("motor{i}.eng"));
            (f.build(), source)
        })
        .collect()
}

/// A motor with flat thrust `level` sampled at `points` evenly spaced times.
pub fn constant_motor(
    level: f64,
    duration: f64,
    points: usize,
    delays: &[f64],
    description: &str,
) -> MotorRecord {
    MotorFixture::new(level)
        .duration(duration)
        .points(points)
        .delays(delays)
        .description(description)
        .build()
}

/// A motor from explicit `(time, thrust)` samples with default masses.
pub fn sampled_motor(samples: &[(f64, f64)]) -> MotorRecord {
    MotorRecord::new(MotorParts {
        manufacturer: "Cesaroni".to_string(),
        designation: "H100".to_string(),
        samples: samples.to_vec(),
        initial_mass: 0.300,
        burnout_mass: 0.120,
        delays: vec![6.0],
        description: "sampled".to_string(),
    })
    .expect("sampled motor is valid")
}
