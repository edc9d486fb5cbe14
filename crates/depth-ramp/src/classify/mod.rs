//! Color classification
//!
//! [`DepthClassifier`] resolves one color to a [`Classification`]; misses
//! are counted in an [`UnknownColorTally`] owned by the caller.

mod classifier;
mod tally;

pub use classifier::{Classification, DepthClassifier, NearWhiteBand};
pub use tally::UnknownColorTally;
