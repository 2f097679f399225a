//! Thermal (infrared) channel calibration.
//!
//! Counts become brightness temperature through a per-line two-point
//! linear count-to-radiance scale anchored on the space view and the
//! internal calibration target, followed by the generation-tagged
//! nonlinearity correction and a Planck inversion.

use avhrr_common::{CalResult, CalibratedGrid, CalibrationError, CountGrid};
use tracing::debug;

use crate::coefficients::{Coefficients, Nonlinearity, ThermalChannel};
use crate::planck;
use crate::prt::prt_to_temperature;
use crate::smooth::{rolling_mean, window_for};

/// Calibrate a thermal channel to brightness temperature (Kelvin).
///
/// `channel` is 3..=5. `prt_counts`, `ict_counts`, `space_counts`, and
/// `line_numbers` are aligned one-per-scan-line with the rows of `counts`.
pub fn calibrate_thermal(
    counts: &CountGrid,
    prt_counts: &[u16],
    ict_counts: &[f64],
    space_counts: &[f64],
    line_numbers: &[u32],
    channel: usize,
    coefficients: &Coefficients,
) -> CalResult<CalibratedGrid> {
    let ch = coefficients.thermal_channel(channel)?;
    check_aligned(counts, prt_counts, ict_counts, space_counts, line_numbers)?;
    debug!(
        spacecraft = %coefficients.spacecraft,
        channel,
        lines = counts.lines(),
        "thermal calibration"
    );

    // Reference series are noisy; smooth them across neighbouring lines
    // before building the per-line scale.
    let window = window_for(counts.lines());
    let ict_temp = rolling_mean(
        &prt_to_temperature(prt_counts, line_numbers, coefficients)?,
        window,
    );
    let ict = rolling_mean(ict_counts, window);
    let space = rolling_mean(space_counts, window);

    let mut out = CalibratedGrid::filled(counts.lines(), counts.samples());
    for line in 0..counts.lines() {
        // band-corrected blackbody temperature of the internal target
        let t_star = ch.band_offset + ch.band_slope * ict_temp[line];
        let n_ict = planck::radiance(ch.wavenumber, t_star);
        let gain = (n_ict - ch.space_radiance) / (space[line] - ict[line]);

        for sample in 0..counts.samples() {
            if !counts.is_valid(line, sample) {
                continue;
            }
            let count = counts.get(line, sample) as f64;
            let n_linear = ch.space_radiance + gain * (space[line] - count);
            out.set(line, sample, to_brightness(ch, n_linear));
        }
    }
    Ok(out)
}

/// Apply the nonlinearity correction and invert to brightness temperature.
fn to_brightness(ch: &ThermalChannel, n_linear: f64) -> f64 {
    match ch.nonlinearity {
        Nonlinearity::Radiance { b0, b1, b2 } => {
            let n = n_linear + b0 + n_linear * (b1 + b2 * n_linear);
            (planck::temperature(ch.wavenumber, n) - ch.band_offset) / ch.band_slope
        }
        Nonlinearity::SceneTemperature { t0, t1, t2 } => {
            let t =
                (planck::temperature(ch.wavenumber, n_linear) - ch.band_offset) / ch.band_slope;
            t0 + t * (t1 + t2 * t)
        }
    }
}

fn check_aligned(
    counts: &CountGrid,
    prt_counts: &[u16],
    ict_counts: &[f64],
    space_counts: &[f64],
    line_numbers: &[u32],
) -> CalResult<()> {
    let lines = counts.lines();
    for (name, len) in [
        ("prt_counts", prt_counts.len()),
        ("ict_counts", ict_counts.len()),
        ("space_counts", space_counts.len()),
        ("line_numbers", line_numbers.len()),
    ] {
        if len != lines {
            return Err(CalibrationError::shape_mismatch(format!(
                "{} has {} entries for {} scan lines",
                name, len, lines
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use avhrr_common::{SpacecraftId, FILL_VALUE};

    fn coeffs(name: &str) -> Coefficients {
        Registry::builtin()
            .resolve(&SpacecraftId::from(name))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let counts = CountGrid::new(vec![500; 6], 3, 2).unwrap();
        let c = coeffs("noaa19");
        let err = calibrate_thermal(
            &counts,
            &[0, 230],
            &[745.3, 744.8, 745.7],
            &[987.3, 986.9, 986.3],
            &[1, 2, 3],
            4,
            &c,
        )
        .unwrap_err();
        assert!(matches!(err, CalibrationError::ShapeMismatch(_)));
    }

    #[test]
    fn test_unsupported_channel() {
        let counts = CountGrid::new(vec![500], 1, 1).unwrap();
        let c = coeffs("noaa19");
        for channel in [0, 2, 6] {
            assert!(calibrate_thermal(
                &counts,
                &[230],
                &[745.0],
                &[987.0],
                &[1],
                channel,
                &c
            )
            .is_err());
        }
    }

    #[test]
    fn test_masked_elements_become_sentinel() {
        let counts =
            CountGrid::with_mask(vec![612, 487, 687], vec![true, false, true], 1, 3).unwrap();
        let c = coeffs("noaa19");
        let out =
            calibrate_thermal(&counts, &[230], &[745.3], &[987.3], &[1], 3, &c).unwrap();
        assert!(out.is_valid(0, 0));
        assert_eq!(out.get(0, 1), FILL_VALUE);
        assert!(out.get(0, 0) > 250.0 && out.get(0, 0) < 330.0);
    }

    #[test]
    fn test_colder_scene_counts_give_colder_temperature() {
        // higher counts sit closer to the space view
        let counts = CountGrid::new(vec![400, 600, 800], 1, 3).unwrap();
        let c = coeffs("noaa19");
        let out =
            calibrate_thermal(&counts, &[230], &[745.3], &[987.3], &[1], 4, &c).unwrap();
        assert!(out.get(0, 0) > out.get(0, 1));
        assert!(out.get(0, 1) > out.get(0, 2));
    }

    #[test]
    fn test_pod_scene_temperature_nonlinearity() {
        // golden values for the POD correction path (NOAA-14 channel 4)
        let data = vec![413, 520, 638, 402, 516, 640, 389, 508, 651];
        let counts = CountGrid::new(data, 3, 3).unwrap();
        let c = coeffs("noaa14");
        let out = calibrate_thermal(
            &counts,
            &[0, 215, 219],
            &[410.2, 409.9, 410.5],
            &[991.2, 991.0, 991.4],
            &[1, 2, 3],
            4,
            &c,
        )
        .unwrap();
        let expected = [
            [287.46581912, 275.44767077, 260.10001788],
            [288.62433618, 275.92459856, 259.81453227],
            [289.97736525, 276.87129587, 258.22604751],
        ];
        for line in 0..3 {
            for sample in 0..3 {
                assert!(
                    (out.get(line, sample) - expected[line][sample]).abs() < 1e-6,
                    "line {} sample {}: {} vs {}",
                    line,
                    sample,
                    out.get(line, sample),
                    expected[line][sample]
                );
            }
        }
    }
}
