//! Motor records and their curve evaluation.
//!
//! Every record uses the same piecewise-linear thrust model and the same
//! impulse-proportional mass model, so comparisons never depend on which loader
//! produced a record.

pub mod motor;

pub use motor::*;
