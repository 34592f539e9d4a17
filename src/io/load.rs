//! Batch loading.
//!
//! Files are loaded independently and in parallel. Each file is opened, read and
//! closed inside its own `load_file` call, so a failure in one never leaks a
//! handle or aborts the others. Results are reassembled in argument order before
//! the batch is built, because order decides the manufacturer reference and the
//! selection tie-break.

use std::fs::File;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::SourceBatch;
use crate::io::motor::{LoadError, MotorLoader};
use crate::models::MotorRecord;

/// A file that could not be loaded and was left out of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct LoadFailure {
    pub source: String,
    pub error: String,
}

/// Outcome of loading every input file.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Every requested source, in argument order.
    pub files: Vec<String>,
    /// Successfully loaded motors, in argument order.
    pub batch: SourceBatch,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    pub fn failure_for(&self, source: &str) -> Option<&LoadFailure> {
        self.failures.iter().find(|f| f.source == source)
    }
}

/// Load every path with `loader`, skipping (and recording) files that fail.
pub fn load_batch<L: MotorLoader + ?Sized>(paths: &[PathBuf], loader: &L) -> LoadOutcome {
    let results: Vec<(String, Result<Vec<MotorRecord>, LoadError>)> = paths
        .par_iter()
        .map(|path| {
            let source = path.display().to_string();
            let result = load_file(path, &source, loader);
            (source, result)
        })
        .collect();

    let mut outcome = LoadOutcome::default();
    for (source, result) in results {
        outcome.files.push(source.clone());
        match result {
            Ok(motors) => {
                debug!(source = %source, motors = motors.len(), "loaded motor file");
                for motor in motors {
                    outcome.batch.push(motor, source.clone());
                }
            }
            Err(err) => {
                warn!(source = %source, error = %err, "skipping motor file");
                outcome.failures.push(LoadFailure {
                    source,
                    error: err.to_string(),
                });
            }
        }
    }
    outcome
}

fn load_file<L: MotorLoader + ?Sized>(
    path: &Path,
    source: &str,
    loader: &L,
) -> Result<Vec<MotorRecord>, LoadError> {
    let mut file = File::open(path).map_err(LoadError::Open)?;
    loader.load(&mut file, source)
}
