//! Planck-function radiance/temperature conversions.
//!
//! Both directions use the band-effective form with a channel's central
//! wavenumber: radiance in mW/(m^2 sr cm^-1), temperature in Kelvin.

/// First radiation constant, mW/(m^2 sr cm^-4).
const C1: f64 = 1.1910427e-5;
/// Second radiation constant, cm K.
const C2: f64 = 1.4387752;

/// Blackbody radiance at temperature `t` for central wavenumber `vc`.
pub fn radiance(vc: f64, t: f64) -> f64 {
    C1 * vc.powi(3) / ((C2 * vc / t).exp() - 1.0)
}

/// Brightness temperature for radiance `n` at central wavenumber `vc`.
///
/// Inverse of [`radiance`].
pub fn temperature(vc: f64, n: f64) -> f64 {
    C2 * vc / (1.0 + C1 * vc.powi(3) / n).ln()
}
