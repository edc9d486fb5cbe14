use depth_ramp::{CalibrationError, GradientError, GridError};
use thiserror::Error;

/// Errors that abort a pipeline stage.
///
/// Unmapped colors are not errors; they are tallied and reported.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid calibration input: {0}")]
    InvalidCalibrationInput(#[from] CalibrationError),

    #[error("Malformed persisted grid: {0}")]
    MalformedPersistedGrid(String),

    #[error("Malformed lookup table: {0}")]
    MalformedLookupTable(String),

    #[error("Empty heightmap: {width}x{height} cells after legend crop and downsampling")]
    EmptyHeightmap { width: usize, height: usize },

    #[error("Invalid downsample factor: {0}")]
    Downsample(#[from] GridError),

    #[error("Invalid preview gradient: {0}")]
    Gradient(#[from] GradientError),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Image encode error: {0}")]
    ImageEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_calibration_input() {
        let error: PipelineError = CalibrationError::WidthMismatch {
            expected: 662,
            actual: 640,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid calibration input: reference strip must be 662 pixels wide, got 640"
        );
    }

    #[test]
    fn test_empty_strip() {
        let error: PipelineError = CalibrationError::EmptyStrip.into();
        assert_eq!(
            error.to_string(),
            "Invalid calibration input: reference strip must have at least one row"
        );
    }

    #[test]
    fn test_malformed_persisted_grid() {
        let error = PipelineError::MalformedPersistedGrid("row 3 has 2 cells, expected 4".into());
        assert_eq!(
            error.to_string(),
            "Malformed persisted grid: row 3 has 2 cells, expected 4"
        );
    }

    #[test]
    fn test_malformed_lookup_table() {
        let error = PipelineError::MalformedLookupTable("bad key".into());
        assert_eq!(error.to_string(), "Malformed lookup table: bad key");
    }

    #[test]
    fn test_empty_heightmap() {
        let error = PipelineError::EmptyHeightmap {
            width: 4,
            height: 0,
        };
        assert_eq!(
            error.to_string(),
            "Empty heightmap: 4x0 cells after legend crop and downsampling"
        );
    }

    #[test]
    fn test_downsample_factor() {
        let error: PipelineError = GridError::ZeroFactor.into();
        assert_eq!(
            error.to_string(),
            "Invalid downsample factor: downsample factor must be at least 1"
        );
    }

    #[test]
    fn test_image_errors() {
        let error = PipelineError::ImageDecode("not a PNG".into());
        assert_eq!(error.to_string(), "Image decode error: not a PNG");

        let error = PipelineError::ImageEncode("zero-sized image".into());
        assert_eq!(error.to_string(), "Image encode error: zero-sized image");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: PipelineError = io.into();
        match error {
            PipelineError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
