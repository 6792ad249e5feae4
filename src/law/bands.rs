//! Band classification and per-band CCM coefficient evaluation.
//!
//! The Cardelli, Clayton & Mathis (1989) extinction law expresses
//! `A(λ)/A_V = a(k) + b(k)/R_V` through two wavenumber-dependent
//! coefficients `a` and `b`, with a different closed form in each of four
//! spectral regimes (k = 1/λ, λ in microns):
//!
//! - IR:         `k ∈ (0, 1.1]`   — power law
//! - near-IR:    `k ∈ (1.1, 3.3]` — degree-8 polynomial (O'Donnell 1994)
//! - UV/optical: `k ∈ (3.3, 8.0]` — rational form plus a far-side correction
//! - far-UV:     `k ∈ (8.0, 10.0]` — cubic polynomial
//!
//! Boundary convention: each band's upper edge is inclusive, its lower edge
//! exclusive, so every in-range wavenumber belongs to exactly one band
//! (k = 3.3 is near-IR, k = 8.0 is UV/optical).

use serde::{Deserialize, Serialize};

/// Exponent of the IR power-law curve.
const IR_EXPONENT: f64 = 1.61;

/// Near-IR polynomial coefficients for `a(y)`, `y = k − 1.82`, low order
/// first (O'Donnell 1994).
///
/// The original CCM 1989 near-IR set was
/// `a: [1, 0.17699, −0.50447, −0.02427, 0.72085, 0.01979, −0.77530, 0.32999]`
/// `b: [0, 1.41338, 2.28305, 1.07233, −5.38434, −0.62251, 5.30260, −2.09002]`
/// and is superseded by the values below; it is kept here for the record
/// only and must not be evaluated.
const NIR_A: [f64; 9] = [
    1.0, 0.104, -0.609, 0.701, 1.137, -1.718, -0.827, 1.647, -0.505,
];

/// Near-IR polynomial coefficients for `b(y)` (O'Donnell 1994).
const NIR_B: [f64; 9] = [
    0.0, 1.952, 2.908, -3.989, -7.985, 11.102, 5.491, -10.805, 3.347,
];

/// Far-UV cubic coefficients for `a(y)`, `y = k − 8`.
const FUV_A: [f64; 4] = [-1.073, -0.628, 0.137, -0.070];

/// Far-UV cubic coefficients for `b(y)`.
const FUV_B: [f64; 4] = [13.670, 4.257, -0.420, 0.334];

/// Wavenumber above which the UV band's `f_a`/`f_b` corrections turn on.
const UV_KNEE: f64 = 5.9;

/// The four disjoint regimes of the extinction law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Ir,
    NearIr,
    UvOptical,
    FarUv,
}

impl Band {
    /// Classify a wavenumber (1/µm) into its band.
    ///
    /// Returns `None` for wavenumbers outside the law's validated
    /// `(0, 10]` span (including NaN); policy for those positions is the
    /// caller's concern, not the law's.
    pub fn classify(k: f64) -> Option<Band> {
        if !k.is_finite() || k <= 0.0 {
            None
        } else if k <= 1.1 {
            Some(Band::Ir)
        } else if k <= 3.3 {
            Some(Band::NearIr)
        } else if k <= 8.0 {
            Some(Band::UvOptical)
        } else if k <= 10.0 {
            Some(Band::FarUv)
        } else {
            None
        }
    }

    /// Evaluate the `(a, b)` coefficient pair for a wavenumber in this band.
    pub fn coefficients(self, k: f64) -> (f64, f64) {
        match self {
            Band::Ir => ir_coefficients(k),
            Band::NearIr => near_ir_coefficients(k),
            Band::UvOptical => uv_optical_coefficients(k),
            Band::FarUv => far_uv_coefficients(k),
        }
    }
}

/// Evaluate a polynomial with coefficients in ascending order (Horner).
fn poly(y: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * y + c)
}

/// IR regime, `k ≤ 1.1`: a plain power-law curve.
pub fn ir_coefficients(k: f64) -> (f64, f64) {
    let p = k.powf(IR_EXPONENT);
    (0.574 * p, -0.527 * p)
}

/// Near-IR regime, `1.1 < k ≤ 3.3`: degree-8 polynomials in `y = k − 1.82`
/// with the O'Donnell (1994) coefficient set.
pub fn near_ir_coefficients(k: f64) -> (f64, f64) {
    let y = k - 1.82;
    (poly(y, &NIR_A), poly(y, &NIR_B))
}

/// UV/optical regime, `3.3 < k ≤ 8.0`: rational forms in `k`, plus cubic
/// correction terms `f_a`/`f_b` that activate at `k ≥ 5.9` and vanish at
/// the knee itself (the curve stays continuous there).
pub fn uv_optical_coefficients(k: f64) -> (f64, f64) {
    let (f_a, f_b) = if k >= UV_KNEE {
        let d = k - UV_KNEE;
        (
            -0.04473 * d * d - 0.009779 * d * d * d,
            -0.2130 * d * d - 0.1207 * d * d * d,
        )
    } else {
        (0.0, 0.0)
    };

    let da = k - 4.67;
    let db = k - 4.62;
    let a = 1.752 - 0.316 * k - 0.104 / (da * da + 0.341) + f_a;
    let b = -3.090 + 1.825 * k + 1.206 / (db * db + 0.263) + f_b;
    (a, b)
}

/// Far-UV regime, `8.0 < k ≤ 10.0`: cubics in `y = k − 8`.
pub fn far_uv_coefficients(k: f64) -> (f64, f64) {
    let y = k - 8.0;
    (poly(y, &FUV_A), poly(y, &FUV_B))
}
