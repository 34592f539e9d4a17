//! Terminal plotting of resampled thrust curves.

pub mod ascii;

pub use ascii::*;
