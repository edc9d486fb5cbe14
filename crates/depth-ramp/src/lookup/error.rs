//! Calibration errors.

use std::fmt;

/// The reference strip or depth range cannot produce a lookup table.
#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Strip width differs from the configured column count
    WidthMismatch {
        /// Required width in pixels
        expected: usize,
        /// Width of the supplied strip
        actual: usize,
    },
    /// Strip has no rows
    EmptyStrip,
    /// Depth bounds are not finite numbers
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "reference strip must be {} pixels wide, got {}",
                    expected, actual
                )
            }
            CalibrationError::EmptyStrip => {
                write!(f, "reference strip must have at least one row")
            }
            CalibrationError::InvalidRange { min, max } => {
                write!(f, "depth range [{}, {}] is not finite", min, max)
            }
        }
    }
}

impl std::error::Error for CalibrationError {}
