//! Common types and utilities shared across the AVHRR calibration workspace.

pub mod error;
pub mod grid;
pub mod spacecraft;
pub mod time;

pub use error::{CalResult, CalibrationError};
pub use grid::{CalibratedGrid, CountGrid, FILL_VALUE};
pub use spacecraft::{Generation, Spacecraft, SpacecraftId};
pub use time::AcquisitionDate;
