//! A real value carrying a symmetric 1-sigma uncertainty.
//!
//! This is deliberately minimal: the correction pipeline only ever needs to
//! scale a measurement by an exact factor and to combine two independent
//! error contributions in quadrature. No correlation tracking.

use serde::{Deserialize, Serialize};

/// A value with a symmetric Gaussian uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    value: f64,
    sigma: f64,
}

impl Measurement {
    /// Create a measurement; the sign of `sigma` is ignored.
    pub fn new(value: f64, sigma: f64) -> Self {
        Self {
            value,
            sigma: sigma.abs(),
        }
    }

    /// A measurement with zero uncertainty.
    pub fn exact(value: f64) -> Self {
        Self { value, sigma: 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The absolute 1-sigma uncertainty (always non-negative).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Scale by an exact (uncertainty-free) factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            sigma: self.sigma * factor.abs(),
        }
    }

    /// Combine two independent error contributions in quadrature around a
    /// given central value.
    pub fn from_contributions(value: f64, sigma_a: f64, sigma_b: f64) -> Self {
        Self {
            value,
            sigma: (sigma_a * sigma_a + sigma_b * sigma_b).sqrt(),
        }
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::exact(value)
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ± {}", self.value, self.sigma)
    }
}
