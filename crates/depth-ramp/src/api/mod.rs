//! Unified error type for the depth-ramp public API.

mod error;

pub use error::DepthError;
