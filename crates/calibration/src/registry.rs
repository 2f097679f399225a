//! Coefficient registry: spacecraft identity to coefficient record.
//!
//! Built once, read-only afterwards. The built-in tables cover the
//! missions this workspace is exercised against; external tables for other
//! missions are injected as JSON through [`Registry::from_json`].

use std::collections::HashMap;

use avhrr_common::{CalResult, CalibrationError, Spacecraft, SpacecraftId};
use chrono::NaiveDate;

use crate::coefficients::{
    Coefficients, Degradation, GainSegment, Nonlinearity, SolarChannel, ThermalChannel,
};

/// Read-only map from spacecraft to coefficient record.
#[derive(Debug, Clone)]
pub struct Registry {
    records: HashMap<Spacecraft, Coefficients>,
}

impl Registry {
    /// Build a registry from explicit records.
    pub fn new(records: impl IntoIterator<Item = Coefficients>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|c| (c.spacecraft, c))
                .collect(),
        }
    }

    /// Parse a registry from a JSON array of coefficient records.
    pub fn from_json(json: &str) -> CalResult<Self> {
        let records: Vec<Coefficients> = serde_json::from_str(json)
            .map_err(|e| CalibrationError::InvalidCoefficients(e.to_string()))?;
        Ok(Self::new(records))
    }

    /// Resolve an identity to its coefficient record.
    pub fn resolve(&self, id: &SpacecraftId) -> CalResult<&Coefficients> {
        id.resolve()
            .and_then(|sc| self.records.get(&sc))
            .ok_or_else(|| CalibrationError::UnknownSpacecraft(id.to_string()))
    }

    /// Registry with the built-in mission tables.
    pub fn builtin() -> Self {
        Self::new([noaa14(), noaa15(), noaa19()])
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // month/day literals below are in-range
    NaiveDate::from_ymd_opt(y, m, d).expect("valid built-in date")
}

/// NOAA-14, POD generation. Single-gain solar channels, no channel 3a,
/// scene-temperature nonlinearity.
fn noaa14() -> Coefficients {
    Coefficients {
        spacecraft: Spacecraft::Noaa14,
        launch: date(1994, 12, 30),
        solar: [
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.1063,
                    intercept: -3.8648,
                },
                high: None,
                gain_switch: 1023.0,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -1.9e-5,
                    c2: 0.0,
                },
            }),
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.1075,
                    intercept: -3.9366,
                },
                high: None,
                gain_switch: 1023.0,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -2.2e-5,
                    c2: 0.0,
                },
            }),
            None,
        ],
        thermal: [
            Some(ThermalChannel {
                wavenumber: 2645.899,
                band_offset: 0.0,
                band_slope: 1.0,
                space_radiance: 0.0,
                nonlinearity: Nonlinearity::SceneTemperature {
                    t0: 0.0,
                    t1: 1.0,
                    t2: 0.0,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 929.3323,
                band_offset: 0.0,
                band_slope: 1.0,
                space_radiance: 0.0,
                nonlinearity: Nonlinearity::SceneTemperature {
                    t0: -0.332060,
                    t1: 1.001990,
                    t2: -2.801e-6,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 835.1647,
                band_offset: 0.0,
                band_slope: 1.0,
                space_radiance: 0.0,
                nonlinearity: Nonlinearity::SceneTemperature {
                    t0: -0.285860,
                    t1: 1.001700,
                    t2: -2.337e-6,
                },
            }),
        ],
        prt: [276.597, 0.051275, 1.363e-6, 0.0, 0.0],
    }
}

/// NOAA-15, first KLM spacecraft.
fn noaa15() -> Coefficients {
    Coefficients {
        spacecraft: Spacecraft::Noaa15,
        launch: date(1998, 5, 13),
        solar: [
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0568,
                    intercept: -2.1874,
                },
                high: Some(GainSegment {
                    slope: 0.1633,
                    intercept: -54.5222,
                }),
                gain_switch: 500.0,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -2.3e-5,
                    c2: 0.0,
                },
            }),
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0596,
                    intercept: -2.2941,
                },
                high: Some(GainSegment {
                    slope: 0.1629,
                    intercept: -53.9548,
                }),
                gain_switch: 500.0,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -2.5e-5,
                    c2: 0.0,
                },
            }),
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0270,
                    intercept: -1.0841,
                },
                high: Some(GainSegment {
                    slope: 0.0776,
                    intercept: -26.3841,
                }),
                gain_switch: 500.0,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -1.2e-5,
                    c2: 0.0,
                },
            }),
        ],
        thermal: [
            Some(ThermalChannel {
                wavenumber: 2695.9743,
                band_offset: 1.621256,
                band_slope: 0.998015,
                space_radiance: 0.0,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 0.0,
                    b1: 0.0,
                    b2: 0.0,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 925.4075,
                band_offset: 0.337810,
                band_slope: 0.998701,
                space_radiance: -4.50,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 4.76,
                    b1: -0.0932,
                    b2: 4.524e-4,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 839.8979,
                band_offset: 0.304558,
                band_slope: 0.999024,
                space_radiance: -3.61,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 3.83,
                    b1: -0.0659,
                    b2: 2.811e-4,
                },
            }),
        ],
        prt: [276.60157, 0.051045, 1.36328e-6, 0.0, 0.0],
    }
}

/// NOAA-19, last of the KLM/N-prime series.
fn noaa19() -> Coefficients {
    Coefficients {
        spacecraft: Spacecraft::Noaa19,
        launch: date(2009, 2, 6),
        solar: [
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0481235758,
                    intercept: -1.86719474,
                },
                high: Some(GainSegment {
                    slope: 0.144370728,
                    intercept: -49.6471682,
                }),
                gain_switch: 496.43,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -5.25e-5,
                    c2: 1.5e-9,
                },
            }),
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0588875745,
                    intercept: -2.2966154,
                },
                high: Some(GainSegment {
                    slope: 0.176662723,
                    intercept: -61.2277667,
                }),
                gain_switch: 500.37,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -6.0e-5,
                    c2: 2.0e-9,
                },
            }),
            Some(SolarChannel {
                low: GainSegment {
                    slope: 0.0263,
                    intercept: -1.03622,
                },
                high: Some(GainSegment {
                    slope: 0.0789,
                    intercept: -27.131606,
                }),
                gain_switch: 496.11,
                degradation: Degradation {
                    c0: 1.0,
                    c1: -2.0e-5,
                    c2: 0.0,
                },
            }),
        ],
        thermal: [
            Some(ThermalChannel {
                wavenumber: 2669.8973,
                band_offset: 1.67396,
                band_slope: 0.997364,
                space_radiance: 0.0,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 0.0,
                    b1: 0.0,
                    b2: 0.0,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 927.80530,
                band_offset: 0.38641324,
                band_slope: 0.998607,
                space_radiance: -5.49,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 5.6996069,
                    b1: -0.11186916,
                    b2: 5.4669127e-4,
                },
            }),
            Some(ThermalChannel {
                wavenumber: 831.11251,
                band_offset: 0.25422579,
                band_slope: 0.998913,
                space_radiance: -3.39,
                nonlinearity: Nonlinearity::Radiance {
                    b0: 3.5794604,
                    b1: -0.059908949,
                    b2: 2.4986222e-4,
                },
            }),
        ],
        prt: [276.6067, 0.051111, 1.4385032e-6, 0.0, 0.0],
    }
}
