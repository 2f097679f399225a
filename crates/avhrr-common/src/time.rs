//! Acquisition time handling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalResult, CalibrationError};

/// Calendar date of a scan, as year plus day-of-year.
///
/// This is the form the scan headers carry; it keys the time-dependent
/// solar degradation correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionDate {
    pub year: i32,
    /// Ordinal day, 1-based (1..=366).
    pub day_of_year: u32,
}

impl AcquisitionDate {
    pub fn new(year: i32, day_of_year: u32) -> Self {
        Self { year, day_of_year }
    }

    /// Convert to a calendar date, rejecting out-of-range ordinals.
    pub fn to_date(&self) -> CalResult<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, self.day_of_year).ok_or_else(|| {
            CalibrationError::InvalidDate(format!(
                "year {} day {}",
                self.year, self.day_of_year
            ))
        })
    }

    /// Signed days elapsed since `epoch`. Negative if the date precedes
    /// the epoch.
    pub fn days_since(&self, epoch: NaiveDate) -> CalResult<i64> {
        Ok((self.to_date()? - epoch).num_days())
    }
}
