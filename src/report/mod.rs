//! Reporting: terminal rendering of load outcomes and comparison diagnostics.

pub mod format;

pub use format::*;
