//! Error taxonomy for extinction correction.
//!
//! Every error is surfaced synchronously before any output vector is
//! produced: callers get either the full corrected spectrum or one of
//! these, never a partially filled result.

use thiserror::Error;

/// Errors raised while validating inputs or evaluating the extinction law.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeredError {
    /// `wave` and `flux` must correspond element-wise by index.
    #[error("wavelength and flux vectors differ in length ({wave_len} vs {flux_len})")]
    LengthMismatch { wave_len: usize, flux_len: usize },

    /// The wavenumber 1/λ is undefined at λ = 0 and meaningless for λ < 0.
    #[error("wavelength must be positive, got {value} at index {index}")]
    NonPositiveWavelength { index: usize, value: f64 },

    /// NaN or infinite entries are rejected up front rather than being
    /// allowed to propagate through the correction factor.
    #[error("{what} contains a non-finite value at index {index}")]
    NonFiniteInput { index: usize, what: &'static str },

    /// `R_V` divides `b` in the extinction relation, so it must be a
    /// finite positive ratio.
    #[error("R_V must be finite and positive, got {value}")]
    InvalidRv { value: f64 },

    /// The reddening scalar must be a finite number (of either sign; a
    /// negative color excess is allowed and un-corrects).
    #[error("reddening parameter must be finite, got {value}")]
    InvalidReddening { value: f64 },

    /// Raised only under [`OutOfRange::Reject`](crate::domain::OutOfRange):
    /// the wavenumber falls outside the law's validated 0.1–10 µm⁻¹ span.
    #[error(
        "wavenumber {wavenumber} at index {index} is outside the extinction law's validated range"
    )]
    OutOfRange { index: usize, wavenumber: f64 },
}
