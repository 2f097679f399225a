//! Per-spacecraft calibration coefficient records.
//!
//! Records are plain immutable data, keyed by spacecraft and channel, and
//! injected into each calibration call; the calibration formulas themselves
//! are constant-free. The POD/KLM formula split lives here as tagged
//! variants on the coefficient shapes, not in the calibrators.

use avhrr_common::{CalResult, CalibrationError, Generation, Spacecraft};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One linear gain segment: `reflectance_numerator = slope * count + intercept`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GainSegment {
    pub slope: f64,
    pub intercept: f64,
}

impl GainSegment {
    /// Evaluate the segment at a raw count.
    pub fn apply(&self, count: f64) -> f64 {
        self.slope * count + self.intercept
    }
}

/// Time-dependent sensitivity degradation, as a quadratic in days since
/// launch: `D = c0 + c1*days + c2*days^2`. Reflectance is divided by `D`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Degradation {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Degradation {
    /// Degradation scale at `days` since launch. With the correction
    /// disabled only the constant term applies (built-in tables normalize
    /// `c0` to 1.0).
    pub fn factor(&self, days: i64, correction: bool) -> f64 {
        if correction {
            let d = days as f64;
            self.c0 + self.c1 * d + self.c2 * d * d
        } else {
            self.c0
        }
    }
}

/// Solar (visible/near-infrared) channel coefficients.
///
/// KLM instruments are dual-gain: counts at or below `gain_switch` use the
/// low segment, counts above it the high segment. POD instruments are
/// single-gain and carry no high segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolarChannel {
    pub low: GainSegment,
    pub high: Option<GainSegment>,
    /// Count threshold between the segments; a count exactly at the
    /// threshold belongs to the low segment.
    pub gain_switch: f64,
    pub degradation: Degradation,
}

impl SolarChannel {
    /// Select the gain segment for a raw count.
    pub fn segment(&self, count: f64) -> &GainSegment {
        match &self.high {
            Some(high) if count > self.gain_switch => high,
            _ => &self.low,
        }
    }
}

/// Nonlinearity correction variant, structurally different between the two
/// instrument generations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nonlinearity {
    /// KLM: quadratic correction added to the linear-estimate radiance,
    /// `N = N_lin + b0 + b1*N_lin + b2*N_lin^2`.
    Radiance { b0: f64, b1: f64, b2: f64 },
    /// POD: quadratic applied to the linear-estimate brightness
    /// temperature, `T = t0 + t1*T_lin + t2*T_lin^2`.
    SceneTemperature { t0: f64, t1: f64, t2: f64 },
}

/// Thermal (infrared) channel coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThermalChannel {
    /// Band-effective central wavenumber, cm^-1.
    pub wavenumber: f64,
    /// Band-correction offset A in `T* = A + B*T`.
    pub band_offset: f64,
    /// Band-correction slope B.
    pub band_slope: f64,
    /// Radiance assigned to the space view; 0 for POD missions, a small
    /// negative constant for KLM.
    pub space_radiance: f64,
    pub nonlinearity: Nonlinearity,
}

/// Complete immutable coefficient record for one spacecraft.
///
/// Channels not carried by the mission are `None`, never zero-filled, so a
/// request for them fails with `UnsupportedChannel` instead of silently
/// producing wrong numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficients {
    pub spacecraft: Spacecraft,
    pub launch: NaiveDate,
    /// Solar channels 0..=2 (channel 2 is the KLM-only 3a).
    pub solar: [Option<SolarChannel>; 3],
    /// Thermal channels 3..=5, indexed by `channel - 3`.
    pub thermal: [Option<ThermalChannel>; 3],
    /// 4th-order PRT count-to-Kelvin polynomial, shared across the
    /// mission's thermal channels.
    pub prt: [f64; 5],
}

impl Coefficients {
    /// The generation of this record's spacecraft.
    pub fn generation(&self) -> Generation {
        self.spacecraft.generation()
    }

    /// Solar channel coefficients; `channel` is 0..=2.
    pub fn solar_channel(&self, channel: usize) -> CalResult<&SolarChannel> {
        self.solar
            .get(channel)
            .and_then(|c| c.as_ref())
            .ok_or_else(|| CalibrationError::unsupported_channel(self.spacecraft.name(), channel))
    }

    /// Thermal channel coefficients; `channel` is 3..=5.
    pub fn thermal_channel(&self, channel: usize) -> CalResult<&ThermalChannel> {
        channel
            .checked_sub(3)
            .and_then(|i| self.thermal.get(i))
            .and_then(|c| c.as_ref())
            .ok_or_else(|| CalibrationError::unsupported_channel(self.spacecraft.name(), channel))
    }
}
