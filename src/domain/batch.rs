//! The ordered set of motors handed to one comparison run.

use crate::models::MotorRecord;

/// One loaded motor and the source it came from.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub motor: MotorRecord,
    pub source: String,
}

/// Motors in input-argument order.
///
/// Order matters: the first entry is the manufacturer reference and ties in the
/// selection resolve to the lowest index.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    entries: Vec<SourceEntry>,
}

impl SourceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, motor: MotorRecord, source: impl Into<String>) {
        self.entries.push(SourceEntry {
            motor,
            source: source.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SourceEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn motors(&self) -> impl Iterator<Item = &MotorRecord> + '_ {
        self.entries.iter().map(|e| &e.motor)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.source.as_str())
    }
}

impl FromIterator<(MotorRecord, String)> for SourceBatch {
    fn from_iter<I: IntoIterator<Item = (MotorRecord, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(motor, source)| SourceEntry { motor, source })
                .collect(),
        }
    }
}
