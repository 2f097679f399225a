//! Error types for AVHRR calibration.

use thiserror::Error;

/// Result type alias using CalibrationError.
pub type CalResult<T> = Result<T, CalibrationError>;

/// Primary error type for calibration operations.
///
/// All variants are structural failures of a whole call and are raised
/// synchronously at the point of detection. Per-element invalidity (masked
/// pixels) is not an error; those elements become the sentinel fill value
/// in the output grid instead.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// The spacecraft identity has no coefficient record.
    #[error("unknown spacecraft: {0}")]
    UnknownSpacecraft(String),

    /// The channel is not carried by this mission.
    #[error("channel {channel} not supported on {spacecraft}")]
    UnsupportedChannel { spacecraft: String, channel: usize },

    /// Input arrays are misaligned.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// No valid PRT reading exists anywhere in the record, so the internal
    /// calibration target temperature cannot be derived.
    #[error("no valid PRT reading available in {lines} scan lines")]
    InsufficientPrtHistory { lines: usize },

    /// The acquisition date is not a valid calendar date.
    #[error("invalid acquisition date: {0}")]
    InvalidDate(String),

    /// An externally supplied coefficient table failed to parse.
    #[error("invalid coefficient table: {0}")]
    InvalidCoefficients(String),
}

impl CalibrationError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Create an UnsupportedChannel error.
    pub fn unsupported_channel(spacecraft: impl Into<String>, channel: usize) -> Self {
        Self::UnsupportedChannel {
            spacecraft: spacecraft.into(),
            channel,
        }
    }
}
