//! `motor-compare` library crate.
//!
//! The binary (`motorcmp`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - loaders and the comparison are reusable from other front-ends
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod compare;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
