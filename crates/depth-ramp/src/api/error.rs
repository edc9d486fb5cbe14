//! [`DepthError`] wraps every error type in the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::color::ParseColorError;
use crate::gradient::GradientError;
use crate::grid::GridError;
use crate::lookup::CalibrationError;
use std::fmt;

/// Unified error type for the depth-ramp public API.
///
/// # Example
///
/// ```
/// use depth_ramp::{BlockDownsampler, DepthError};
///
/// fn coarse(factor: usize) -> Result<BlockDownsampler, DepthError> {
///     Ok(BlockDownsampler::new(factor)?)
/// }
///
/// assert!(coarse(0).is_err());
/// ```
#[derive(Debug)]
pub enum DepthError {
    /// Reference strip or depth range rejected
    Calibration(CalibrationError),
    /// Grid shape or factor rejected
    Grid(GridError),
    /// Preview ramp rejected
    Gradient(GradientError),
    /// Color key did not parse
    ParseColor(ParseColorError),
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::Calibration(err) => write!(f, "calibration error: {}", err),
            DepthError::Grid(err) => write!(f, "grid error: {}", err),
            DepthError::Gradient(err) => write!(f, "gradient error: {}", err),
            DepthError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for DepthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DepthError::Calibration(err) => Some(err),
            DepthError::Grid(err) => Some(err),
            DepthError::Gradient(err) => Some(err),
            DepthError::ParseColor(err) => Some(err),
        }
    }
}

impl From<CalibrationError> for DepthError {
    fn from(err: CalibrationError) -> Self {
        DepthError::Calibration(err)
    }
}

impl From<GridError> for DepthError {
    fn from(err: GridError) -> Self {
        DepthError::Grid(err)
    }
}

impl From<GradientError> for DepthError {
    fn from(err: GradientError) -> Self {
        DepthError::Gradient(err)
    }
}

impl From<ParseColorError> for DepthError {
    fn from(err: ParseColorError) -> Self {
        DepthError::ParseColor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_prefixes() {
        let err: DepthError = CalibrationError::EmptyStrip.into();
        assert_eq!(
            err.to_string(),
            "calibration error: reference strip must have at least one row"
        );

        let err: DepthError = GridError::ZeroFactor.into();
        assert_eq!(
            err.to_string(),
            "grid error: downsample factor must be at least 1"
        );

        let err: DepthError = GradientError::NoStops.into();
        assert_eq!(
            err.to_string(),
            "gradient error: gradient needs at least one stop"
        );
    }

    #[test]
    fn test_source_chain() {
        let parse = "1,2".parse::<crate::Rgb>().unwrap_err();
        let err: DepthError = parse.into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("color parse error:"));
    }
}
