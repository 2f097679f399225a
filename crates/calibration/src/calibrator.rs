//! Calibration facade.
//!
//! Resolves spacecraft identities against the registry and dispatches to
//! the generation-agnostic calibrators. This is the only seam aware of the
//! POD/KLM split: identities arrive keyed by either generation's header
//! convention, and the resolved record carries the generation-tagged
//! coefficient shapes the calibrators select their formulas from.

use avhrr_common::{
    AcquisitionDate, CalResult, CalibratedGrid, CountGrid, SpacecraftId,
};
use tracing::debug;

use crate::registry::Registry;
use crate::solar;
use crate::thermal;

/// Entry point for calibration requests.
///
/// Owns a read-only [`Registry`]; safe to share across parallel workers
/// once constructed.
#[derive(Debug, Clone)]
pub struct Calibrator {
    registry: Registry,
}

impl Calibrator {
    /// Calibrator with the built-in coefficient tables.
    pub fn new() -> Self {
        Self {
            registry: Registry::builtin(),
        }
    }

    /// Calibrator over an externally supplied registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// Calibrate a solar channel (0..=2) to percent reflectance.
    pub fn calibrate_solar(
        &self,
        counts: &CountGrid,
        channel: usize,
        date: AcquisitionDate,
        spacecraft: &SpacecraftId,
        degradation_correction: bool,
    ) -> CalResult<CalibratedGrid> {
        let coefficients = self.registry.resolve(spacecraft)?;
        debug!(
            id = %spacecraft,
            generation = ?coefficients.generation(),
            "dispatching solar calibration"
        );
        solar::calibrate_solar(counts, channel, date, coefficients, degradation_correction)
    }

    /// Calibrate a thermal channel (3..=5) to brightness temperature.
    #[allow(clippy::too_many_arguments)]
    pub fn calibrate_thermal(
        &self,
        counts: &CountGrid,
        prt_counts: &[u16],
        ict_counts: &[f64],
        space_counts: &[f64],
        line_numbers: &[u32],
        channel: usize,
        spacecraft: &SpacecraftId,
    ) -> CalResult<CalibratedGrid> {
        let coefficients = self.registry.resolve(spacecraft)?;
        debug!(
            id = %spacecraft,
            generation = ?coefficients.generation(),
            "dispatching thermal calibration"
        );
        thermal::calibrate_thermal(
            counts,
            prt_counts,
            ict_counts,
            space_counts,
            line_numbers,
            channel,
            coefficients,
        )
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}
