//! depth-ramp: color-coded map to heightmap, and back
//!
//! This library turns a raster map whose colors encode depth into a numeric
//! depth grid, reduces that grid for downstream use, and renders grids back
//! to images for visual inspection.
//!
//! # Pipeline
//!
//! ```text
//! reference strip ──> GradientCalibrator ──> DepthLookupTable
//!                                                  |
//! map image ──> HeightmapExtractor (DepthClassifier per pixel)
//!                   |                 \
//!                   v                  UnknownColorTally (diagnostics)
//!              dense DepthGrid
//!                   |
//!              BlockDownsampler
//!                   |
//!              coarse DepthGrid ──> GradientRenderer ──> preview RgbImage
//! ```
//!
//! Every stage consumes its whole input and returns an owned output; no
//! state is shared between stages.
//!
//! # Quick Start
//!
//! ```
//! use depth_ramp::{
//!     BlockDownsampler, DepthClassifier, GradientCalibrator, GradientRenderer,
//!     HeightmapExtractor, Rgb, RgbImage,
//! };
//!
//! // A three-column strip: black is deepest, white is highest
//! let strip = RgbImage::from_pixels(
//!     vec![Rgb::BLACK, Rgb::new(0, 0, 255), Rgb::WHITE],
//!     3,
//!     1,
//! )
//! .unwrap();
//! let table = GradientCalibrator::new(3, -500.0, 0.0).calibrate(&strip).unwrap();
//!
//! // A 4x4 map with no legend rows
//! let map = RgbImage::filled(4, 4, Rgb::new(0, 0, 255));
//! let classifier = DepthClassifier::new(&table);
//! let extraction = HeightmapExtractor::new(0).extract(&map, &classifier);
//! assert!(extraction.tally.is_empty());
//!
//! let coarse = BlockDownsampler::new(2).unwrap().downsample(&extraction.grid);
//! assert_eq!(coarse.get(0, 0), Some(Some(-250.0)));
//!
//! let preview = GradientRenderer::default().render(&coarse);
//! assert_eq!(preview.width(), 2);
//! ```
//!
//! # The near-white fallback
//!
//! Light grays produced by anti-aliasing around white areas rarely appear
//! in the reference strip. [`DepthClassifier`] looks any color whose
//! channels all fall in the [`NearWhiteBand`] (192..=255 by default) up as
//! pure white when the exact color is absent, and reports the outcome as
//! [`Classification::Substituted`] so the policy stays visible to callers.

pub mod api;
pub mod classify;
pub mod color;
pub mod gradient;
pub mod grid;
pub mod lookup;


pub use api::DepthError;
pub use classify::{Classification, DepthClassifier, NearWhiteBand, UnknownColorTally};
pub use color::{ColorKey, ParseColorError, Rgb, RgbImage};
pub use gradient::{Gradient, GradientError, GradientRenderer, GradientStop};
pub use grid::{
    BlockDownsampler, DepthGrid, Extraction, GridError, GridStats, HeightmapExtractor,
    DEFAULT_DOWNSAMPLE_FACTOR, DEFAULT_LEGEND_HEIGHT,
};
pub use lookup::{
    CalibrationError, DepthLookupTable, GradientCalibrator, DEFAULT_DEPTH_MAX, DEFAULT_DEPTH_MIN,
    DEFAULT_STRIP_WIDTH,
};
