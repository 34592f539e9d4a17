//! Mathematical utilities: curve interpolation and batch spread statistics.

pub mod interp;
pub mod spread;

pub use interp::*;
pub use spread::*;
