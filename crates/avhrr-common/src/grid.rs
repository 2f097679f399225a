//! Count and calibrated-value grids.
//!
//! A scan is stored row-major: rows are scan lines (time-ordered), columns
//! are detector samples across the line. Validity travels as a per-element
//! bitmap alongside the numeric data, so the calibration math never sees
//! null checks; invalid elements are converted to the sentinel fill value
//! once, at the output boundary.

use crate::error::{CalResult, CalibrationError};

/// Sentinel written for invalid/masked elements in calibrated output.
///
/// Downstream consumers expect a fixed numeric contract rather than NaN.
pub const FILL_VALUE: f64 = -32001.0;

/// A 2-D grid of raw instrument counts with an optional validity bitmap.
#[derive(Debug, Clone)]
pub struct CountGrid {
    data: Vec<u16>,
    /// Per-element validity; `None` means every element is valid.
    valid: Option<Vec<bool>>,
    lines: usize,
    samples: usize,
}

impl CountGrid {
    /// Create a fully valid grid. Fails if `data` length is not
    /// `lines * samples`.
    pub fn new(data: Vec<u16>, lines: usize, samples: usize) -> CalResult<Self> {
        if data.len() != lines * samples {
            return Err(CalibrationError::shape_mismatch(format!(
                "count data length {} does not match {} lines x {} samples",
                data.len(),
                lines,
                samples
            )));
        }
        Ok(Self {
            data,
            valid: None,
            lines,
            samples,
        })
    }

    /// Create a grid with a validity bitmap (`true` = valid element).
    pub fn with_mask(
        data: Vec<u16>,
        valid: Vec<bool>,
        lines: usize,
        samples: usize,
    ) -> CalResult<Self> {
        if valid.len() != data.len() {
            return Err(CalibrationError::shape_mismatch(format!(
                "validity bitmap length {} does not match data length {}",
                valid.len(),
                data.len()
            )));
        }
        let grid = Self::new(data, lines, samples)?;
        Ok(Self {
            valid: Some(valid),
            ..grid
        })
    }

    /// Create a grid whose every element is masked out.
    pub fn all_masked(data: Vec<u16>, lines: usize, samples: usize) -> CalResult<Self> {
        let n = data.len();
        Self::with_mask(data, vec![false; n], lines, samples)
    }

    /// Number of scan lines (rows).
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of samples per scan line (columns).
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Raw count at (line, sample).
    pub fn get(&self, line: usize, sample: usize) -> u16 {
        self.data[line * self.samples + sample]
    }

    /// Whether the element at (line, sample) is valid.
    pub fn is_valid(&self, line: usize, sample: usize) -> bool {
        match &self.valid {
            Some(v) => v[line * self.samples + sample],
            None => true,
        }
    }
}

/// A 2-D grid of calibrated physical values (percent reflectance or
/// Kelvin), same shape as the counts it was produced from.
///
/// Invalid elements hold [`FILL_VALUE`] and are flagged in the validity
/// bitmap, so callers can consume either the sentinel convention or the
/// mask.
#[derive(Debug, Clone)]
pub struct CalibratedGrid {
    data: Vec<f64>,
    valid: Vec<bool>,
    lines: usize,
    samples: usize,
}

impl CalibratedGrid {
    /// Create an all-invalid grid of the given shape, pre-filled with the
    /// sentinel.
    pub fn filled(lines: usize, samples: usize) -> Self {
        Self {
            data: vec![FILL_VALUE; lines * samples],
            valid: vec![false; lines * samples],
            lines,
            samples,
        }
    }

    /// Store a calibrated value at (line, sample), marking it valid.
    pub fn set(&mut self, line: usize, sample: usize, value: f64) {
        let idx = line * self.samples + sample;
        self.data[idx] = value;
        self.valid[idx] = true;
    }

    /// Calibrated value at (line, sample); invalid elements read as
    /// [`FILL_VALUE`].
    pub fn get(&self, line: usize, sample: usize) -> f64 {
        self.data[line * self.samples + sample]
    }

    /// Whether the element at (line, sample) is valid.
    pub fn is_valid(&self, line: usize, sample: usize) -> bool {
        self.valid[line * self.samples + sample]
    }

    /// Number of scan lines (rows).
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of samples per scan line (columns).
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The values in row-major order, sentinel-filled.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_grid_shape_checked() {
        assert!(CountGrid::new(vec![1, 2, 3], 2, 2).is_err());
        let g = CountGrid::new(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(g.get(1, 0), 3);
        assert!(g.is_valid(1, 1));
    }

    #[test]
    fn test_mask_length_checked() {
        assert!(CountGrid::with_mask(vec![1, 2], vec![true], 1, 2).is_err());
    }

    #[test]
    fn test_all_masked() {
        let g = CountGrid::all_masked(vec![5, 6], 1, 2).unwrap();
        assert!(!g.is_valid(0, 0));
        assert!(!g.is_valid(0, 1));
    }

    #[test]
    fn test_calibrated_grid_fill() {
        let mut g = CalibratedGrid::filled(2, 2);
        assert_eq!(g.get(0, 0), FILL_VALUE);
        assert!(!g.is_valid(0, 0));
        g.set(0, 0, 273.15);
        assert_eq!(g.get(0, 0), 273.15);
        assert!(g.is_valid(0, 0));
        assert_eq!(g.get(1, 1), FILL_VALUE);
    }
}
