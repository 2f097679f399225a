//! Solar (visible/near-infrared) channel calibration.
//!
//! Converts raw counts to percent reflectance through the channel's
//! two-segment linear gain, divided by the time-dependent degradation
//! scale.

use avhrr_common::{AcquisitionDate, CalResult, CalibratedGrid, CountGrid};
use tracing::debug;

use crate::coefficients::Coefficients;

/// Calibrate a solar channel to percent reflectance.
///
/// `channel` is 0..=2. Masked input elements are skipped and emerge as the
/// sentinel fill value; an all-masked input yields an all-sentinel grid of
/// the same shape.
pub fn calibrate_solar(
    counts: &CountGrid,
    channel: usize,
    date: AcquisitionDate,
    coefficients: &Coefficients,
    degradation_correction: bool,
) -> CalResult<CalibratedGrid> {
    let ch = coefficients.solar_channel(channel)?;
    let days = date.days_since(coefficients.launch)?;
    let scale = ch.degradation.factor(days, degradation_correction);
    debug!(
        spacecraft = %coefficients.spacecraft,
        channel,
        days_since_launch = days,
        degradation = scale,
        "solar calibration"
    );

    let mut out = CalibratedGrid::filled(counts.lines(), counts.samples());
    for line in 0..counts.lines() {
        for sample in 0..counts.samples() {
            if !counts.is_valid(line, sample) {
                continue;
            }
            let count = counts.get(line, sample) as f64;
            let reflectance = ch.segment(count).apply(count) / scale;
            out.set(line, sample, reflectance);
        }
    }
    Ok(out)
}
