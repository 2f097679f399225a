//! Platinum-resistance-thermometer (PRT) count conversion.
//!
//! The internal calibration target's PRTs are sampled once per
//! [`PRT_CYCLE`] scan lines; lines without a fresh sample report a count of
//! zero. Conversion evaluates the mission's 4th-order polynomial on each
//! real sample and forward-fills the gaps.

use avhrr_common::{CalResult, CalibrationError};
use tracing::trace;

use crate::coefficients::Coefficients;

/// Scan lines between PRT samples.
pub const PRT_CYCLE: usize = 5;

/// Evaluate the 4th-order PRT polynomial at a count.
fn to_kelvin(prt: &[f64; 5], count: f64) -> f64 {
    prt[0] + count * (prt[1] + count * (prt[2] + count * (prt[3] + count * prt[4])))
}

/// Convert per-line PRT counts to internal-target temperatures (Kelvin).
///
/// A zero count means "no fresh reading this line" and takes the most
/// recent prior converted temperature. Leading lines with no prior reading
/// take the earliest later one. A record with no nonzero count at all
/// fails with `InsufficientPrtHistory`.
pub fn prt_to_temperature(
    prt_counts: &[u16],
    line_numbers: &[u32],
    coefficients: &Coefficients,
) -> CalResult<Vec<f64>> {
    if prt_counts.len() != line_numbers.len() {
        return Err(CalibrationError::shape_mismatch(format!(
            "{} PRT counts for {} line numbers",
            prt_counts.len(),
            line_numbers.len()
        )));
    }
    if line_numbers.windows(2).any(|w| w[0] >= w[1]) {
        return Err(CalibrationError::shape_mismatch(
            "line numbers not strictly increasing",
        ));
    }

    let mut temps = vec![None; prt_counts.len()];
    for (i, &count) in prt_counts.iter().enumerate() {
        if count != 0 {
            temps[i] = Some(to_kelvin(&coefficients.prt, count as f64));
        }
    }

    let first = temps.iter().flatten().next().copied().ok_or(
        CalibrationError::InsufficientPrtHistory {
            lines: prt_counts.len(),
        },
    )?;

    let mut filled = Vec::with_capacity(temps.len());
    let mut last = None;
    for (i, t) in temps.into_iter().enumerate() {
        match t {
            Some(t) => {
                last = Some(t);
                filled.push(t);
            }
            None => {
                let fill = last.unwrap_or(first);
                trace!(line = line_numbers[i], temp = fill, "filled PRT gap");
                filled.push(fill);
            }
        }
    }
    Ok(filled)
}
