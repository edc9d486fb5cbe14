//! Scratch directory with inputs written and config paths pointing into it.

use std::path::PathBuf;

use bathymap::models::AppConfig;
use bathymap::rendering::save_rgb_png;
use tempfile::TempDir;

use super::fixtures;

pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: AppConfig,
}

impl TestWorkspace {
    /// Empty directory, default config with every path redirected into it
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = AppConfig::default();
        let root = dir.path();
        config.paths.scale_image = root.join("SCALE.png");
        config.paths.map_image = root.join("MAP.png");
        config.paths.lookup = root.join("color_to_depth.json");
        config.paths.heightmap = root.join("heightmap.json");
        config.paths.preview = root.join("heightmap_preview.png");
        Self { dir, config }
    }

    /// Workspace with the synthetic strip and map written as PNGs
    pub fn with_inputs() -> Self {
        let ws = Self::new();
        save_rgb_png(&fixtures::reference_strip(), &ws.config.paths.scale_image)
            .expect("write strip");
        save_rgb_png(&fixtures::sample_map(), &ws.config.paths.map_image).expect("write map");
        ws
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
