//! Motor loaders.
//!
//! A loader maps one open source (plus its identifier) to zero or more motor
//! records. The comparison never sees raw files; it only receives the records
//! that loaded successfully.
//!
//! The bundled `JsonMotorLoader` reads the tool's own motor document:
//!
//! ```json
//! {
//!   "manufacturer": "Cesaroni",
//!   "designation": "H143",
//!   "samples": [[0.0, 0.0], [0.05, 160.0], [1.6, 0.0]],
//!   "initial_mass": 0.302,
//!   "burnout_mass": 0.118,
//!   "delays": [6, 10, 14],
//!   "description": "Smokey Sam"
//! }
//! ```
//!
//! A file may hold one document or an array of them.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{MotorParts, MotorRecord, RecordError};

/// Why a source could not be turned into motor records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open: {0}")]
    Open(#[source] std::io::Error),
    #[error("invalid motor JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("motor {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
    #[error("no motors in file")]
    NoMotors,
}

/// Maps a readable source to motor records.
pub trait MotorLoader: Sync {
    fn load(&self, reader: &mut dyn Read, source: &str) -> Result<Vec<MotorRecord>, LoadError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotorDocument {
    manufacturer: String,
    #[serde(default)]
    designation: String,
    samples: Vec<(f64, f64)>,
    initial_mass: f64,
    burnout_mass: f64,
    #[serde(default)]
    delays: Vec<f64>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MotorFile {
    One(MotorDocument),
    Many(Vec<MotorDocument>),
}

impl From<MotorDocument> for MotorParts {
    fn from(doc: MotorDocument) -> Self {
        MotorParts {
            manufacturer: doc.manufacturer,
            designation: doc.designation,
            samples: doc.samples,
            initial_mass: doc.initial_mass,
            burnout_mass: doc.burnout_mass,
            delays: doc.delays,
            description: doc.description,
        }
    }
}

/// Loader for JSON motor documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMotorLoader;

impl MotorLoader for JsonMotorLoader {
    fn load(&self, reader: &mut dyn Read, _source: &str) -> Result<Vec<MotorRecord>, LoadError> {
        let file: MotorFile = serde_json::from_reader(reader)?;
        let docs = match file {
            MotorFile::One(doc) => vec![doc],
            MotorFile::Many(docs) => docs,
        };
        if docs.is_empty() {
            return Err(LoadError::NoMotors);
        }

        docs.into_iter()
            .enumerate()
            .map(|(index, doc)| {
                MotorRecord::new(doc.into()).map_err(|source| LoadError::Record { index, source })
            })
            .collect()
    }
}
