//! Piecewise-linear depth-to-color ramp.

use std::fmt;

use crate::color::Rgb;

/// An anchor of the preview ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub depth: f64,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(depth: f64, color: Rgb) -> Self {
        Self { depth, color }
    }
}

/// The stop sequence cannot define a ramp.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// No stops supplied
    NoStops,
    /// Stop depth is NaN or infinite
    NonFinite {
        /// Index of the offending stop
        index: usize,
    },
    /// Stop depth is lower than its predecessor's
    Unordered {
        /// Index of the offending stop
        index: usize,
    },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::NoStops => write!(f, "gradient needs at least one stop"),
            GradientError::NonFinite { index } => {
                write!(f, "stop {} has a non-finite depth", index)
            }
            GradientError::Unordered { index } => {
                write!(f, "stop {} is shallower than the stop before it", index)
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// Black at the deepest point, blue at -300, white at sea level, red at
/// the highest calibrated value.
const DIAGNOSTIC_STOPS: [GradientStop; 4] = [
    GradientStop::new(-500.0, Rgb::new(0, 0, 0)),
    GradientStop::new(-300.0, Rgb::new(0, 0, 255)),
    GradientStop::new(0.0, Rgb::new(255, 255, 255)),
    GradientStop::new(160.0, Rgb::new(255, 0, 0)),
];

/// A validated, ascending sequence of [`GradientStop`]s.
///
/// # Example
///
/// ```
/// use depth_ramp::{Gradient, Rgb};
///
/// let ramp = Gradient::diagnostic();
/// assert_eq!(ramp.color_at(-500.0), Rgb::new(0, 0, 0));
/// assert_eq!(ramp.color_at(-400.0), Rgb::new(0, 0, 127));
/// assert_eq!(ramp.color_at(1000.0), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Validate and wrap a stop sequence.
    ///
    /// # Errors
    ///
    /// - [`GradientError::NoStops`] for an empty sequence
    /// - [`GradientError::NonFinite`] for a NaN or infinite depth
    /// - [`GradientError::Unordered`] if depths ever decrease
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::NoStops);
        }
        for (index, stop) in stops.iter().enumerate() {
            if !stop.depth.is_finite() {
                return Err(GradientError::NonFinite { index });
            }
            if index > 0 && stop.depth < stops[index - 1].depth {
                return Err(GradientError::Unordered { index });
            }
        }
        Ok(Self { stops })
    }

    /// The fixed preview palette.
    pub fn diagnostic() -> Self {
        Self {
            stops: DIAGNOSTIC_STOPS.to_vec(),
        }
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color for a finite depth.
    ///
    /// The first consecutive pair with `d0 <= value <= d1` is interpolated
    /// channel-wise and truncated. Values outside the ramp clamp to the end
    /// stops. A zero-width pair yields its first color.
    pub fn color_at(&self, value: f64) -> Rgb {
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if lo.depth <= value && value <= hi.depth {
                let span = hi.depth - lo.depth;
                if span == 0.0 {
                    return lo.color;
                }
                return lerp_color(lo.color, hi.color, (value - lo.depth) / span);
            }
        }

        let first = self.stops[0];
        if value < first.depth {
            first.color
        } else {
            self.stops[self.stops.len() - 1].color
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::diagnostic()
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + t * (b - a)) as u8
}

fn lerp_color(c0: Rgb, c1: Rgb, t: f64) -> Rgb {
    Rgb::new(lerp(c0.r, c1.r, t), lerp(c0.g, c1.g, t), lerp(c0.b, c1.b, t))
}
