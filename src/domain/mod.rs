//! Domain types used throughout the comparison.
//!
//! This module defines:
//!
//! - manufacturer identity (`Manufacturer`)
//! - the ordered input batch (`SourceBatch`)
//! - the tolerance policy (`ComparePolicy`)
//! - comparison outputs (`Verdict`, `Comparison`, per-stage reports)

pub mod batch;
pub mod types;

pub use batch::*;
pub use types::*;
