//! Dereddening with first-order uncertainty propagation.
//!
//! Both the fluxes and the color excess may carry a symmetric 1-sigma
//! uncertainty. Propagation is first-order through the final transform
//! only, with the two contributions treated as independent:
//!
//! - flux uncertainty scales by the correction factor
//! - reddening uncertainty enters through
//!   `∂F/∂e = F · 0.4·ln10 · R_V·(a + b/R_V)`
//!
//! Wavelengths are taken as exact.

use crate::correct::{
    extinction_from_wavenumbers, magnitude_slope, validate_scalars, wavenumbers,
};
use crate::domain::DeredConfig;
use crate::error::DeredError;
use crate::math::Measurement;

/// Correct uncertain fluxes for extinction with an uncertain color excess.
///
/// Same contract as [`dered`](crate::correct::dered), with `flux` and
/// `e_bv` allowed to carry sigmas. Exact inputs (zero sigmas) reproduce
/// `dered` exactly.
pub fn dered_uncertain(
    wave: &[f64],
    flux: &[Measurement],
    e_bv: Measurement,
    config: &DeredConfig,
) -> Result<Vec<Measurement>, DeredError> {
    if wave.len() != flux.len() {
        return Err(DeredError::LengthMismatch {
            wave_len: wave.len(),
            flux_len: flux.len(),
        });
    }
    validate_scalars(e_bv.value(), config)?;
    if !e_bv.sigma().is_finite() {
        return Err(DeredError::InvalidReddening { value: e_bv.sigma() });
    }
    for (index, m) in flux.iter().enumerate() {
        if !m.value().is_finite() || !m.sigma().is_finite() {
            return Err(DeredError::NonFiniteInput {
                index,
                what: "flux",
            });
        }
    }

    let k = wavenumbers(wave, config)?;
    // Extinction magnitudes per unit E(B-V); the actual A(λ) is e_bv times
    // this, and the slope term needs it separately.
    let mag_per_ebv = extinction_from_wavenumbers(&k, 1.0, config);

    Ok(flux
        .iter()
        .zip(mag_per_ebv.iter())
        .map(|(f, &c)| {
            let factor = 10f64.powf(0.4 * e_bv.value() * c);
            let value = f.value() * factor;
            let sigma_flux = f.sigma() * factor;
            let sigma_ebv = (value * magnitude_slope(c)).abs() * e_bv.sigma();
            Measurement::from_contributions(value, sigma_flux, sigma_ebv)
        })
        .collect())
}
