//! `deredden` library crate.
//!
//! Extinction correction for astronomical spectra using the Cardelli,
//! Clayton & Mathis (1989) law with the O'Donnell (1994) near-IR
//! coefficient update.
//!
//! The crate is a single pure function at heart:
//! [`dered`](correct::dered) takes wavelengths (microns), observed fluxes,
//! a B−V color excess and an optional `R_V`, and returns the dereddened
//! fluxes. [`redden`](correct::redden) is its exact inverse,
//! [`extinction`](correct::extinction) exposes the `A(λ)` magnitudes, and
//! [`dered_uncertain`](correct::dered_uncertain) propagates symmetric
//! 1-sigma uncertainties on flux and color excess.
//!
//! Conventions (documented choices, applied consistently):
//!
//! - reddening is parametrized by E(B-V); default `R_V = 3.089`
//! - each extinction band's upper wavenumber edge is inclusive
//! - wavenumbers past the far-UV limit follow the configured
//!   [`OutOfRange`](domain::OutOfRange) policy instead of being left
//!   uninitialized
//!
//! ```
//! use deredden::{DeredConfig, dered};
//!
//! let wave = [0.44, 0.55];              // microns
//! let flux = [1.0, 1.0];
//! let corrected = dered(&wave, &flux, 0.1, &DeredConfig::default()).unwrap();
//! assert!(corrected.iter().all(|&f| f > 1.0));
//! ```

pub mod correct;
pub mod domain;
pub mod error;
pub mod law;
pub mod math;

pub use correct::{dered, dered_uncertain, extinction, redden};
pub use domain::{DEFAULT_R_V, DeredConfig, OutOfRange};
pub use error::DeredError;
pub use law::Band;
pub use math::Measurement;
