//! AVHRR Calibration Engine
//!
//! Converts raw digital counts from the AVHRR scanning radiometer into
//! calibrated physical values: percent reflectance for the solar channels
//! and brightness temperature (Kelvin) for the thermal channels.
//!
//! # Architecture
//!
//! ```text
//! Calibrator::calibrate_solar / calibrate_thermal
//!      │
//!      ├─► Registry::resolve(spacecraft identity)
//!      │         │
//!      │         └─► immutable Coefficients record (POD or KLM shapes)
//!      │
//!      ├─► solar:   segment gain ──► degradation scale ──► reflectance
//!      │
//!      └─► thermal: PRT counts ──► ICT temperature (prt)
//!                        │
//!                        ├─► scan-line smoothing (smooth)
//!                        ├─► inverse Planck ──► ICT radiance (planck)
//!                        ├─► two-point count→radiance scale per line
//!                        ├─► nonlinearity correction (generation-tagged)
//!                        └─► Planck inversion ──► brightness temperature
//! ```
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state.
//! Ingestion, navigation, and output writing are external collaborators
//! that supply already-parsed count grids and consume calibrated grids.
//! Masked input elements become the sentinel fill value (-32001.0) in the
//! output rather than errors.
//!
//! # Example
//!
//! ```
//! use avhrr_common::{AcquisitionDate, CountGrid, SpacecraftId};
//! use calibration::Calibrator;
//!
//! let calibrator = Calibrator::new();
//! let counts = CountGrid::new(vec![41, 150, 700], 1, 3).unwrap();
//! let reflectance = calibrator
//!     .calibrate_solar(
//!         &counts,
//!         0,
//!         AcquisitionDate::new(2010, 1),
//!         &SpacecraftId::from("noaa19"),
//!         true,
//!     )
//!     .unwrap();
//! assert!(reflectance.get(0, 2) > reflectance.get(0, 0));
//! ```

pub mod calibrator;
pub mod coefficients;
pub mod planck;
pub mod prt;
pub mod registry;
pub mod smooth;
pub mod solar;
pub mod thermal;

pub use calibrator::Calibrator;
pub use coefficients::{
    Coefficients, Degradation, GainSegment, Nonlinearity, SolarChannel, ThermalChannel,
};
pub use prt::prt_to_temperature;
pub use registry::Registry;
pub use solar::calibrate_solar;
pub use thermal::calibrate_thermal;
