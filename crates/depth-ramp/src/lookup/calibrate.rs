//! Lookup-table calibration from a reference gradient strip.
//!
//! The strip is a legend image whose columns sweep the map's color ramp
//! from the shallowest to the deepest calibrated value. Only the top row is
//! sampled; column `i` of `n` is assigned the `i`-th of `n` evenly spaced
//! depths across `[depth_min, depth_max]`, both ends inclusive.

use crate::color::RgbImage;

use super::error::CalibrationError;
use super::table::DepthLookupTable;

/// Column count of the reference strip shipped with the source maps.
pub const DEFAULT_STRIP_WIDTH: usize = 662;

/// Depth assigned to the first strip column.
pub const DEFAULT_DEPTH_MIN: f64 = -500.0;

/// Depth assigned to the last strip column.
pub const DEFAULT_DEPTH_MAX: f64 = 160.0;

/// Builds a [`DepthLookupTable`] from a reference strip.
///
/// # Example
///
/// ```
/// use depth_ramp::{GradientCalibrator, Rgb, RgbImage};
///
/// let strip = RgbImage::from_pixels(
///     vec![Rgb::new(0, 0, 0), Rgb::new(0, 0, 128), Rgb::new(0, 0, 255)],
///     3,
///     1,
/// )
/// .unwrap();
/// let table = GradientCalibrator::new(3, -10.0, 10.0)
///     .calibrate(&strip)
///     .unwrap();
///
/// assert_eq!(table.get(Rgb::new(0, 0, 0)), Some(-10.0));
/// assert_eq!(table.get(Rgb::new(0, 0, 128)), Some(0.0));
/// assert_eq!(table.get(Rgb::new(0, 0, 255)), Some(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCalibrator {
    strip_width: usize,
    depth_min: f64,
    depth_max: f64,
}

impl GradientCalibrator {
    pub fn new(strip_width: usize, depth_min: f64, depth_max: f64) -> Self {
        Self {
            strip_width,
            depth_min,
            depth_max,
        }
    }

    /// Required strip width in pixels.
    #[inline]
    pub fn strip_width(&self) -> usize {
        self.strip_width
    }

    /// `(depth_min, depth_max)`.
    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.depth_min, self.depth_max)
    }

    /// Sample the strip's top row and assign each column its depth.
    ///
    /// # Errors
    ///
    /// - [`CalibrationError::EmptyStrip`] if the strip has no rows
    /// - [`CalibrationError::WidthMismatch`] if its width is not the
    ///   configured strip width
    /// - [`CalibrationError::InvalidRange`] if either bound is NaN or infinite
    pub fn calibrate(&self, strip: &RgbImage) -> Result<DepthLookupTable, CalibrationError> {
        if strip.height() < 1 {
            return Err(CalibrationError::EmptyStrip);
        }
        if strip.width() != self.strip_width {
            return Err(CalibrationError::WidthMismatch {
                expected: self.strip_width,
                actual: strip.width(),
            });
        }
        if !self.depth_min.is_finite() || !self.depth_max.is_finite() {
            return Err(CalibrationError::InvalidRange {
                min: self.depth_min,
                max: self.depth_max,
            });
        }

        let depths = linspace(self.depth_min, self.depth_max, self.strip_width);
        Ok(strip
            .row(0)
            .iter()
            .zip(depths)
            .map(|(&color, depth)| (color, round_centi(depth)))
            .collect())
    }
}

impl Default for GradientCalibrator {
    fn default() -> Self {
        Self::new(DEFAULT_STRIP_WIDTH, DEFAULT_DEPTH_MIN, DEFAULT_DEPTH_MAX)
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// The last value is pinned to `stop` so accumulated step error never
/// leaves the top of the range short.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Round to two decimal places, ties to even.
fn round_centi(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
