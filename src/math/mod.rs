//! Mathematical utilities: uncertainty-carrying values.

pub mod measurement;

pub use measurement::*;
