//! Depth grids: extraction from a map image and block downsampling.

mod depth_grid;
mod downsample;
mod error;
mod extract;

pub use depth_grid::{DepthGrid, GridStats};
pub use downsample::{BlockDownsampler, DEFAULT_DOWNSAMPLE_FACTOR};
pub use error::GridError;
pub use extract::{Extraction, HeightmapExtractor, DEFAULT_LEGEND_HEIGHT};
