//! Color and raster types
//!
//! - [`Rgb`]: an 8-bit triple, also used as the lookup key ([`ColorKey`])
//! - [`RgbImage`]: a fully loaded row-major raster

mod error;
mod image;
mod rgb;

pub use error::ParseColorError;
pub use image::RgbImage;
pub use rgb::{ColorKey, Rgb};
