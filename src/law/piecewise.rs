//! Piecewise assembly of the `a`/`b` coefficient vectors.
//!
//! Each `law_*` writer overwrites only the positions whose wavenumber falls
//! in its band and leaves every other position untouched, so the four
//! writers compose in any order. [`coefficients`] chains all of them over a
//! zero-initialized pair of vectors; positions outside every band keep the
//! neutral zero fill (a zero coefficient pair yields a unit correction
//! factor downstream, never a NaN).

use crate::law::bands::{
    Band, far_uv_coefficients, ir_coefficients, near_ir_coefficients, uv_optical_coefficients,
};

/// Overwrite the IR-band positions (`k ≤ 1.1`) of `a`/`b`.
///
/// # Panics
/// Panics if `a`, `b` and `wavenumbers` differ in length. Callers size
/// these together.
pub fn law_ir(a: &mut [f64], b: &mut [f64], wavenumbers: &[f64]) {
    fill_band(Band::Ir, a, b, wavenumbers);
}

/// Overwrite the near-IR-band positions (`1.1 < k ≤ 3.3`).
pub fn law_nir(a: &mut [f64], b: &mut [f64], wavenumbers: &[f64]) {
    fill_band(Band::NearIr, a, b, wavenumbers);
}

/// Overwrite the UV/optical-band positions (`3.3 < k ≤ 8.0`).
pub fn law_uv(a: &mut [f64], b: &mut [f64], wavenumbers: &[f64]) {
    fill_band(Band::UvOptical, a, b, wavenumbers);
}

/// Overwrite the far-UV-band positions (`8.0 < k ≤ 10.0`).
pub fn law_fuv(a: &mut [f64], b: &mut [f64], wavenumbers: &[f64]) {
    fill_band(Band::FarUv, a, b, wavenumbers);
}

fn fill_band(band: Band, a: &mut [f64], b: &mut [f64], wavenumbers: &[f64]) {
    assert_eq!(a.len(), wavenumbers.len());
    assert_eq!(b.len(), wavenumbers.len());

    let eval = match band {
        Band::Ir => ir_coefficients,
        Band::NearIr => near_ir_coefficients,
        Band::UvOptical => uv_optical_coefficients,
        Band::FarUv => far_uv_coefficients,
    };

    for (i, &k) in wavenumbers.iter().enumerate() {
        if Band::classify(k) == Some(band) {
            let (ai, bi) = eval(k);
            a[i] = ai;
            b[i] = bi;
        }
    }
}

/// Build the full `(a, b)` coefficient vectors for a wavenumber vector by
/// applying all four band writers to zero-filled vectors.
pub fn coefficients(wavenumbers: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut a = vec![0.0; wavenumbers.len()];
    let mut b = vec![0.0; wavenumbers.len()];

    for law in [law_uv, law_fuv, law_nir, law_ir] {
        law(&mut a, &mut b, wavenumbers);
    }

    (a, b)
}
