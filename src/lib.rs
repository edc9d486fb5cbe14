//! Bathymap - color-coded depth maps to heightmaps
//!
//! Calibrates a reference gradient strip, converts a map image into a
//! downsampled depth grid, and renders grids back to preview images.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
