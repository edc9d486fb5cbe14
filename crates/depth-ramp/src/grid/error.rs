//! Grid construction and downsampling errors.

use std::fmt;

/// Error type for grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A row's length differs from the first row's
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
    /// Cell count does not match `width * height`
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
    /// Downsample factor of zero
    ZeroFactor,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, actual, expected
            ),
            GridError::DimensionMismatch {
                width,
                height,
                cells,
            } => write!(
                f,
                "{} cells do not fill a {}x{} grid",
                cells, width, height
            ),
            GridError::ZeroFactor => write!(f, "downsample factor must be at least 1"),
        }
    }
}

impl std::error::Error for GridError {}
