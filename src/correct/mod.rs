//! The correction orchestrator: dereddening, reddening, and the extinction
//! magnitude vector itself.
//!
//! The pipeline is the same for every entry point:
//!
//! 1. validate shapes and domains (all-or-nothing: nothing is computed
//!    until every input passes)
//! 2. convert wavelengths to wavenumbers `k = 1/λ`
//! 3. assemble the piecewise `a`/`b` coefficient vectors
//! 4. apply the closed-form transform `flux · 10^(±0.4 · A(λ))` with
//!    `A(λ) = E(B-V) · R_V · (a + b/R_V)`
//!
//! Each element is independent, so large spectra are mapped in parallel.

use rayon::prelude::*;

use crate::domain::{DeredConfig, OutOfRange};
use crate::error::DeredError;
use crate::law::{self, Band};

pub mod uncertain;

pub use uncertain::dered_uncertain;

/// Spectra at least this long get the parallel element-wise path.
const PAR_MIN_LEN: usize = 4096;

/// `ln(10) · 0.4`, the slope of the magnitude-to-flux exponent.
const LN10_04: f64 = 0.4 * std::f64::consts::LN_10;

/// Correct observed fluxes for interstellar extinction.
///
/// `wave` is in microns (any ordering, strictly positive), `flux` is the
/// observed spectral flux density at the matching index, `e_bv` is the
/// B−V color excess. The returned vector has the same length and order as
/// `flux`, each element scaled by `10^(0.4·A(λ))`.
///
/// With `e_bv = 0` this is the identity. A negative `e_bv` un-corrects
/// (reddens); [`redden`] is the more readable spelling of that intent.
pub fn dered(
    wave: &[f64],
    flux: &[f64],
    e_bv: f64,
    config: &DeredConfig,
) -> Result<Vec<f64>, DeredError> {
    apply(wave, flux, e_bv, config, 1.0)
}

/// Apply extinction to intrinsic fluxes: the exact inverse of [`dered`]
/// for the same `e_bv` and configuration.
pub fn redden(
    wave: &[f64],
    flux: &[f64],
    e_bv: f64,
    config: &DeredConfig,
) -> Result<Vec<f64>, DeredError> {
    apply(wave, flux, e_bv, config, -1.0)
}

/// The extinction `A(λ)` in magnitudes at each wavelength.
///
/// This is the quantity inside the exponent of [`dered`]; positions ruled
/// out of domain under [`OutOfRange::PassThrough`] report zero magnitudes.
pub fn extinction(
    wave: &[f64],
    e_bv: f64,
    config: &DeredConfig,
) -> Result<Vec<f64>, DeredError> {
    validate_scalars(e_bv, config)?;
    let k = wavenumbers(wave, config)?;
    Ok(extinction_from_wavenumbers(&k, e_bv, config))
}

fn apply(
    wave: &[f64],
    flux: &[f64],
    e_bv: f64,
    config: &DeredConfig,
    sign: f64,
) -> Result<Vec<f64>, DeredError> {
    if wave.len() != flux.len() {
        return Err(DeredError::LengthMismatch {
            wave_len: wave.len(),
            flux_len: flux.len(),
        });
    }
    validate_scalars(e_bv, config)?;
    validate_finite(flux, "flux")?;

    let k = wavenumbers(wave, config)?;
    let mags = extinction_from_wavenumbers(&k, e_bv, config);

    Ok(flux
        .iter()
        .zip(mags.iter())
        .map(|(&f, &m)| f * 10f64.powf(sign * 0.4 * m))
        .collect())
}

/// Relative sensitivity of the corrected flux to the reddening scalar:
/// with `F = f·10^(0.4·e·c)` and `c` the magnitudes per unit E(B-V),
/// `∂F/∂e = F · 0.4·ln10 · c`. This returns the `0.4·ln10·c` part.
pub(crate) fn magnitude_slope(mag_per_ebv: f64) -> f64 {
    LN10_04 * mag_per_ebv
}

/// Validate wavelengths and convert to wavenumbers, enforcing the
/// configured out-of-domain policy.
pub(crate) fn wavenumbers(wave: &[f64], config: &DeredConfig) -> Result<Vec<f64>, DeredError> {
    for (index, &w) in wave.iter().enumerate() {
        if !w.is_finite() {
            return Err(DeredError::NonFiniteInput {
                index,
                what: "wave",
            });
        }
        if w <= 0.0 {
            return Err(DeredError::NonPositiveWavelength { index, value: w });
        }
    }

    let k: Vec<f64> = wave.iter().map(|&w| 1.0 / w).collect();

    if config.out_of_range == OutOfRange::Reject {
        for (index, &ki) in k.iter().enumerate() {
            if Band::classify(ki).is_none() {
                return Err(DeredError::OutOfRange {
                    index,
                    wavenumber: ki,
                });
            }
        }
    }

    Ok(k)
}

/// `A(λ)` magnitudes for an already-validated wavenumber vector.
pub(crate) fn extinction_from_wavenumbers(
    k: &[f64],
    e_bv: f64,
    config: &DeredConfig,
) -> Vec<f64> {
    let (a, b) = coefficient_vectors(k);
    let a_v = e_bv * config.r_v;
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| a_v * (ai + bi / config.r_v))
        .collect()
}

/// Assemble the `a`/`b` vectors, in parallel for large spectra.
///
/// The parallel branch classifies each element directly; it is the exact
/// per-element equivalent of chaining the four band writers.
fn coefficient_vectors(k: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if k.len() >= PAR_MIN_LEN {
        k.par_iter()
            .map(|&ki| match Band::classify(ki) {
                Some(band) => band.coefficients(ki),
                None => (0.0, 0.0),
            })
            .unzip()
    } else {
        law::coefficients(k)
    }
}

pub(crate) fn validate_scalars(e_bv: f64, config: &DeredConfig) -> Result<(), DeredError> {
    if !config.r_v.is_finite() || config.r_v <= 0.0 {
        return Err(DeredError::InvalidRv { value: config.r_v });
    }
    if !e_bv.is_finite() {
        return Err(DeredError::InvalidReddening { value: e_bv });
    }
    Ok(())
}

pub(crate) fn validate_finite(values: &[f64], what: &'static str) -> Result<(), DeredError> {
    for (index, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(DeredError::NonFiniteInput { index, what });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::near_ir_coefficients;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn config() -> DeredConfig {
        DeredConfig::default()
    }

    #[test]
    fn zero_reddening_is_the_identity() {
        let wave = [0.15, 0.55, 1.0, 5.0];
        let flux = [0.3, 1.0, 2.5, -0.1];
        let out = dered(&wave, &flux, 0.0, &config()).unwrap();
        assert_eq!(out, flux.to_vec());
    }

    #[test]
    fn v_band_correction_matches_the_closed_form() {
        // λ = 0.55 µm lands in the near-IR band (k ≈ 1.818, y just below 0).
        let wave = [0.55];
        let flux = [1.0];
        let e_bv = 0.1;

        let out = dered(&wave, &flux, e_bv, &config()).unwrap();

        let k = 1.0 / 0.55;
        let (a, b) = near_ir_coefficients(k);
        let r_v = 3.089;
        let expected = 10f64.powf(0.4 * e_bv * r_v * (a + b / r_v));

        assert_relative_eq!(out[0], expected, max_relative = 1e-12);
        // Dereddening removes dimming: the corrected flux is brighter.
        assert!(out[0] > 1.0, "corrected V-band flux should exceed 1, got {}", out[0]);
    }

    #[test]
    fn output_length_matches_input_length() {
        let wave: Vec<f64> = (1..=257).map(|i| 0.1 + i as f64 * 0.03).collect();
        let flux = vec![1.0; wave.len()];
        let out = dered(&wave, &flux, 0.25, &config()).unwrap();
        assert_eq!(out.len(), flux.len());
    }

    #[test]
    fn redden_inverts_dered() {
        let mut rng = StdRng::seed_from_u64(7);
        let wave: Vec<f64> = (0..500).map(|_| rng.gen_range(0.11..9.0)).collect();
        let flux: Vec<f64> = (0..500).map(|_| rng.gen_range(0.01..100.0)).collect();
        let e_bv = 0.37;

        let cfg = DeredConfig::with_r_v(3.1);
        let corrected = dered(&wave, &flux, e_bv, &cfg).unwrap();
        let back = redden(&wave, &corrected, e_bv, &cfg).unwrap();

        for (orig, round) in flux.iter().zip(back.iter()) {
            assert_relative_eq!(orig, round, max_relative = 1e-9);
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = dered(&[0.5, 0.6], &[1.0], 0.1, &config()).unwrap_err();
        assert_eq!(
            err,
            DeredError::LengthMismatch {
                wave_len: 2,
                flux_len: 1
            }
        );
    }

    #[test]
    fn zero_wavelength_is_a_domain_error() {
        let err = dered(&[0.5, 0.0], &[1.0, 1.0], 0.1, &config()).unwrap_err();
        assert_eq!(
            err,
            DeredError::NonPositiveWavelength {
                index: 1,
                value: 0.0
            }
        );

        let err = dered(&[-0.2], &[1.0], 0.1, &config()).unwrap_err();
        assert!(matches!(
            err,
            DeredError::NonPositiveWavelength { index: 0, .. }
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = dered(&[f64::NAN], &[1.0], 0.1, &config()).unwrap_err();
        assert_eq!(
            err,
            DeredError::NonFiniteInput {
                index: 0,
                what: "wave"
            }
        );

        let err = dered(&[0.5], &[f64::INFINITY], 0.1, &config()).unwrap_err();
        assert_eq!(
            err,
            DeredError::NonFiniteInput {
                index: 0,
                what: "flux"
            }
        );

        let err = dered(&[0.5], &[1.0], f64::NAN, &config()).unwrap_err();
        assert!(matches!(err, DeredError::InvalidReddening { .. }));
    }

    #[test]
    fn invalid_r_v_is_rejected() {
        let cfg = DeredConfig::with_r_v(0.0);
        let err = dered(&[0.5], &[1.0], 0.1, &cfg).unwrap_err();
        assert_eq!(err, DeredError::InvalidRv { value: 0.0 });
    }

    #[test]
    fn pass_through_leaves_out_of_domain_positions_unscaled() {
        // λ = 0.05 µm gives k = 20, past the far-UV limit.
        let wave = [0.05, 0.55];
        let flux = [2.0, 1.0];
        let out = dered(&wave, &flux, 0.1, &config()).unwrap();
        assert_eq!(out[0], 2.0);
        assert!(out[1] > 1.0);
    }

    #[test]
    fn reject_policy_fails_on_out_of_domain_positions() {
        let cfg = DeredConfig {
            out_of_range: OutOfRange::Reject,
            ..DeredConfig::default()
        };
        let err = dered(&[0.05], &[1.0], 0.1, &cfg).unwrap_err();
        assert!(matches!(err, DeredError::OutOfRange { index: 0, .. }));
    }

    #[test]
    fn long_wavelengths_stay_on_the_ir_power_law() {
        // k < 0.1 (λ > 10 µm) is below the curve's calibrated span but the
        // IR power law extrapolates smoothly there, matching the historical
        // behavior of applying it to every k ≤ 1.1.
        let out = extinction(&[20.0], 0.1, &config()).unwrap();
        let k: f64 = 1.0 / 20.0;
        let p = k.powf(1.61);
        let expected = 0.1 * 3.089 * (0.574 * p + (-0.527 * p) / 3.089);
        assert_relative_eq!(out[0], expected, max_relative = 1e-12);
    }

    #[test]
    fn extinction_magnitudes_scale_linearly_with_reddening() {
        let wave = [0.2, 0.55, 2.0];
        let one = extinction(&wave, 0.1, &config()).unwrap();
        let two = extinction(&wave, 0.2, &config()).unwrap();
        for (m1, m2) in one.iter().zip(two.iter()) {
            assert_relative_eq!(2.0 * m1, *m2, max_relative = 1e-12);
        }
    }

    #[test]
    fn parallel_and_serial_paths_agree() {
        // Straddle the parallel threshold with identical leading content.
        let n = PAR_MIN_LEN;
        let wave: Vec<f64> = (0..n).map(|i| 0.11 + (i % 97) as f64 * 0.05).collect();
        let flux = vec![1.0; n];

        let big = dered(&wave, &flux, 0.2, &config()).unwrap();
        let small = dered(&wave[..100], &flux[..100], 0.2, &config()).unwrap();
        assert_eq!(&big[..100], &small[..]);
    }
}
