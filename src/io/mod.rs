//! Input/output helpers.
//!
//! - motor loaders (`motor`)
//! - parallel, order-preserving batch loading (`load`)
//! - resampled grid CSV export (`export`)
//! - comparison JSON report (`report`)

pub mod export;
pub mod load;
pub mod motor;
pub mod report;

pub use export::*;
pub use load::*;
pub use motor::*;
pub use report::*;
