//! Reference calibration scenarios for NOAA-19.
//!
//! The expected matrices are reference values for a two-line solar scan
//! and a three-line thermal scan; calibrated output must reproduce them
//! within 1e-5 relative.

use avhrr_common::{AcquisitionDate, CalibratedGrid, CountGrid, SpacecraftId, FILL_VALUE};
use calibration::Calibrator;

fn assert_allclose(grid: &CalibratedGrid, expected: &[&[f64]]) {
    assert_eq!(grid.lines(), expected.len());
    for (line, row) in expected.iter().enumerate() {
        assert_eq!(grid.samples(), row.len());
        for (sample, &want) in row.iter().enumerate() {
            let got = grid.get(line, sample);
            let tol = 1e-8 + 1e-5 * want.abs();
            assert!(
                (got - want).abs() <= tol,
                "line {} sample {}: got {} want {}",
                line,
                sample,
                got,
                want
            );
        }
    }
}

fn solar_counts() -> CountGrid {
    CountGrid::new(vec![0, 512, 1023, 41, 150, 700], 2, 3).unwrap()
}

#[test]
fn solar_channel_1_reflectance() {
    let cal = Calibrator::new();
    let out = cal
        .calibrate_solar(
            &solar_counts(),
            0,
            AcquisitionDate::new(2010, 1),
            &SpacecraftId::from("noaa19"),
            true,
        )
        .unwrap();
    assert_allclose(
        &out,
        &[
            &[-1.89969885, 24.69314738, 99.75083649],
            &[0.10771488, 5.44449774, 52.30732654],
        ],
    );
}

#[test]
fn solar_channel_2_reflectance() {
    let cal = Calibrator::new();
    let out = cal
        .calibrate_solar(
            &solar_counts(),
            1,
            AcquisitionDate::new(2010, 1),
            &SpacecraftId::from("noaa19"),
            true,
        )
        .unwrap();
    assert_allclose(
        &out,
        &[
            &[-2.34234624, 29.8054551, 121.877680],
            &[0.120120320, 6.66667777, 63.6793853],
        ],
    );
}

#[test]
fn solar_masked_input_is_all_sentinel() {
    let cal = Calibrator::new();
    let counts = CountGrid::all_masked(vec![0, 512, 1023, 41, 150, 700], 2, 3).unwrap();
    let out = cal
        .calibrate_solar(
            &counts,
            2,
            AcquisitionDate::new(2010, 1),
            &SpacecraftId::from("noaa19"),
            true,
        )
        .unwrap();
    assert_eq!(out.values(), &[FILL_VALUE; 6]);
}

#[test]
fn solar_name_and_klm_code_give_identical_results() {
    // the two historical entry points differ only in how the spacecraft
    // is keyed, never in the numbers
    let cal = Calibrator::new();
    let date = AcquisitionDate::new(2010, 1);
    for channel in [0, 1] {
        let by_name = cal
            .calibrate_solar(
                &solar_counts(),
                channel,
                date,
                &SpacecraftId::from("noaa19"),
                true,
            )
            .unwrap();
        let by_code = cal
            .calibrate_solar(
                &solar_counts(),
                channel,
                date,
                &SpacecraftId::KlmCode(8),
                true,
            )
            .unwrap();
        assert_eq!(by_name.values(), by_code.values());
    }
}

struct ThermalScene {
    counts: Vec<u16>,
    ict: Vec<f64>,
    space: Vec<f64>,
}

/// Channel slices of the three-line reference scan, per thermal channel.
fn thermal_scene(channel: usize) -> ThermalScene {
    match channel {
        3 => ThermalScene {
            counts: vec![612, 487, 687, 634, 461, 670, 656, 490, 475],
            ict: vec![745.3, 744.8, 745.7],
            space: vec![987.3, 986.9, 986.3],
        },
        4 => ThermalScene {
            counts: vec![0, 512, 923, 41, 150, 700, 241, 350, 600],
            ict: vec![397.9, 398.1, 398.0],
            space: vec![992.5, 992.8, 992.3],
        },
        5 => ThermalScene {
            counts: vec![0, 512, 923, 41, 150, 700, 241, 350, 600],
            ict: vec![377.8, 378.4, 378.3],
            space: vec![989.4, 989.6, 988.9],
        },
        _ => unreachable!(),
    }
}

fn calibrate(channel: usize, id: &SpacecraftId) -> CalibratedGrid {
    let cal = Calibrator::new();
    let scene = thermal_scene(channel);
    let counts = CountGrid::new(scene.counts, 3, 3).unwrap();
    cal.calibrate_thermal(
        &counts,
        &[0, 230, 230],
        &scene.ict,
        &scene.space,
        &[1, 2, 3],
        channel,
        id,
    )
    .unwrap()
}

#[test]
fn thermal_channel_3_brightness_temperature() {
    let out = calibrate(3, &SpacecraftId::from("noaa19"));
    assert_allclose(
        &out,
        &[
            &[298.36772477, 305.24899954, 293.23847375],
            &[296.96053595, 306.49432811, 294.48914038],
            &[295.47715016, 305.10182601, 305.83036782],
        ],
    );
}

#[test]
fn thermal_channel_4_brightness_temperature() {
    let out = calibrate(4, &SpacecraftId::from("noaa19"));
    assert_allclose(
        &out,
        &[
            &[326.57669548, 275.34893211, 197.68844955],
            &[323.01324859, 313.20717645, 249.3633716],
            &[304.58097221, 293.57932356, 264.0630027],
        ],
    );
}

#[test]
fn thermal_channel_5_brightness_temperature() {
    let out = calibrate(5, &SpacecraftId::from("noaa19"));
    assert_allclose(
        &out,
        &[
            &[326.96168274, 272.09013413, 188.26784127],
            &[323.15638147, 312.67331324, 244.18437795],
            &[303.43940924, 291.64944851, 259.97304154],
        ],
    );
}

#[test]
fn thermal_name_and_klm_code_give_identical_results() {
    for channel in [3, 4, 5] {
        let by_name = calibrate(channel, &SpacecraftId::from("noaa19"));
        let by_code = calibrate(channel, &SpacecraftId::KlmCode(8));
        assert_eq!(by_name.values(), by_code.values());
    }
}
