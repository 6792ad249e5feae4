//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - passed around in-memory during correction
//! - recorded alongside exported results for reproducibility

use serde::{Deserialize, Serialize};

/// Default ratio of total-to-selective extinction `R_V`.
///
/// 3.089 is the diffuse-ISM value used by the E(B-V) parametrization this
/// crate implements; callers working with sight lines through denser dust
/// should override it.
pub const DEFAULT_R_V: f64 = 3.089;

/// What to do with wavenumbers outside the law's validated `(0, 10]` µm⁻¹
/// span (wavelengths shorter than 0.1 µm or arbitrarily long).
///
/// The extinction curve is simply not calibrated there, so there is no
/// correct coefficient to produce. Both policies are explicit; positions are
/// never left at an uninitialized or NaN sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRange {
    /// Apply no correction at out-of-domain positions (unit factor).
    ///
    /// This matches the historical behavior of leaving the coefficient
    /// vectors zero-filled outside the four bands.
    #[default]
    PassThrough,
    /// Fail the whole call, naming the first offending index.
    Reject,
}

/// Configuration for a correction run.
///
/// Reddening is parametrized by the color excess E(B-V); the total V-band
/// extinction is derived internally as `A_V = E(B-V) · R_V`. The A_V
/// parametrization (with its different customary default `R_V = 3.1`) is
/// deliberately not exposed, so the two conventions cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeredConfig {
    /// Ratio of total to selective extinction.
    pub r_v: f64,
    /// Policy for wavenumbers outside the validated domain.
    pub out_of_range: OutOfRange,
}

impl Default for DeredConfig {
    fn default() -> Self {
        Self {
            r_v: DEFAULT_R_V,
            out_of_range: OutOfRange::default(),
        }
    }
}

impl DeredConfig {
    /// Default policy with an explicit `R_V`.
    pub fn with_r_v(r_v: f64) -> Self {
        Self {
            r_v,
            ..Self::default()
        }
    }
}
