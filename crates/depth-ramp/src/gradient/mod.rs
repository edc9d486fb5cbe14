//! Preview rendering through a fixed color ramp.
//!
//! The ramp here is unrelated to the calibration strip: it is a diagnostic
//! palette chosen so that a rendered heightmap is easy to eyeball, not a
//! reproduction of the source map's colors.

mod ramp;
mod renderer;

pub use ramp::{Gradient, GradientError, GradientStop};
pub use renderer::GradientRenderer;
