//! Lookup-table types and calibration
//!
//! [`GradientCalibrator`] turns a reference strip into a
//! [`DepthLookupTable`]; the table is read-only to everything downstream.

mod calibrate;
mod error;
mod table;

pub use calibrate::{
    GradientCalibrator, DEFAULT_DEPTH_MAX, DEFAULT_DEPTH_MIN, DEFAULT_STRIP_WIDTH,
};
pub use error::CalibrationError;
pub use table::DepthLookupTable;
