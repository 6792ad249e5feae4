//! The CCM 1989 extinction law: band classification, per-band coefficient
//! evaluation, and piecewise vector assembly.

pub mod bands;
pub mod piecewise;

pub use bands::*;
pub use piecewise::*;
