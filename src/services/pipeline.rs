use std::path::Path;

use depth_ramp::{
    BlockDownsampler, DepthClassifier, DepthGrid, DepthLookupTable, Extraction,
    GradientCalibrator, GradientRenderer, HeightmapExtractor, NearWhiteBand, RgbImage,
};

use crate::error::PipelineError;
use crate::models::AppConfig;
use crate::rendering::{load_rgb_png, save_rgb_png};
use crate::services::persistence;

/// Result of the extract stage
#[derive(Debug)]
pub struct ExtractResult {
    /// Dense grid, tally and match counts
    pub extraction: Extraction,
    /// Downsampled grid as written to disk
    pub heightmap: DepthGrid,
}

/// Result of a full calibrate, extract, preview run
#[derive(Debug)]
pub struct RunResult {
    pub lookup_entries: usize,
    pub extract: ExtractResult,
    pub preview: RgbImage,
}

/// Runs the map-to-heightmap stages with settings from [`AppConfig`]
pub struct DepthPipeline {
    config: AppConfig,
}

impl DepthPipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a lookup table from a reference strip image and persist it
    pub fn calibrate(&self, scale: &Path, output: &Path) -> Result<DepthLookupTable, PipelineError> {
        let c = &self.config.calibration;
        let strip = load_rgb_png(scale)?;
        let table =
            GradientCalibrator::new(c.strip_width, c.depth_min, c.depth_max).calibrate(&strip)?;

        tracing::info!(
            scale = %scale.display(),
            entries = table.len(),
            columns = c.strip_width,
            "Calibrated reference strip"
        );
        persistence::save_lookup(&table, output)?;
        Ok(table)
    }

    /// Classify a map against a persisted lookup table, downsample, and
    /// persist the heightmap
    pub fn extract(
        &self,
        map: &Path,
        lookup: &Path,
        output: &Path,
    ) -> Result<ExtractResult, PipelineError> {
        let table = persistence::load_lookup(lookup)?;
        let image = load_rgb_png(map)?;
        self.extract_image(&image, &table, output)
    }

    /// Extract from an already decoded map
    pub fn extract_image(
        &self,
        image: &RgbImage,
        table: &DepthLookupTable,
        output: &Path,
    ) -> Result<ExtractResult, PipelineError> {
        let ex = &self.config.extraction;
        let downsampler = BlockDownsampler::new(self.config.downsample_factor)?;

        let classifier = DepthClassifier::with_band(table, NearWhiteBand::from(ex.near_white));
        let extraction = HeightmapExtractor::new(ex.legend_height).extract(image, &classifier);

        let dense = extraction.grid.stats();
        tracing::info!(
            width = extraction.grid.width(),
            height = extraction.grid.height(),
            found = extraction.found,
            substituted = extraction.substituted,
            missing = dense.missing,
            "Classified map pixels"
        );
        if !extraction.tally.is_empty() {
            tracing::warn!(
                colors = extraction.tally.len(),
                pixels = extraction.tally.total(),
                "Map contains colors missing from the lookup table"
            );
        }

        let heightmap = downsampler.downsample(&extraction.grid);
        // The grid loader rejects empty grids, so never write one
        if heightmap.width() == 0 || heightmap.height() == 0 {
            tracing::warn!(
                legend_height = ex.legend_height,
                image_width = image.width(),
                image_height = image.height(),
                factor = downsampler.factor(),
                "Map too small for legend crop and downsampling"
            );
            return Err(PipelineError::EmptyHeightmap {
                width: heightmap.width(),
                height: heightmap.height(),
            });
        }
        let coarse = heightmap.stats();
        tracing::info!(
            factor = downsampler.factor(),
            width = heightmap.width(),
            height = heightmap.height(),
            present = coarse.present,
            min = ?coarse.min,
            max = ?coarse.max,
            "Downsampled heightmap"
        );

        persistence::save_grid(&heightmap, output)?;
        Ok(ExtractResult {
            extraction,
            heightmap,
        })
    }

    /// Build the renderer for the configured preview ramp
    pub fn renderer(&self) -> Result<GradientRenderer, PipelineError> {
        let preview = &self.config.preview;
        Ok(GradientRenderer::new(preview.gradient()?).no_data_color(preview.no_data()))
    }

    /// Render a persisted heightmap to a preview PNG
    pub fn preview(&self, heightmap: &Path, output: &Path) -> Result<RgbImage, PipelineError> {
        let grid = persistence::load_grid(heightmap)?;
        self.preview_grid(&grid, output)
    }

    pub fn preview_grid(&self, grid: &DepthGrid, output: &Path) -> Result<RgbImage, PipelineError> {
        let image = self.renderer()?.render(grid);
        save_rgb_png(&image, output)?;
        tracing::info!(
            output = %output.display(),
            width = image.width(),
            height = image.height(),
            "Rendered preview"
        );
        Ok(image)
    }

    /// Calibrate, extract and preview using the configured paths
    pub fn run(&self) -> Result<RunResult, PipelineError> {
        let paths = &self.config.paths;
        // Fail on a bad ramp before doing any work
        self.renderer()?;

        let table = self.calibrate(&paths.scale_image, &paths.lookup)?;
        let image = load_rgb_png(&paths.map_image)?;
        let extract = self.extract_image(&image, &table, &paths.heightmap)?;
        let preview = self.preview_grid(&extract.heightmap, &paths.preview)?;

        Ok(RunResult {
            lookup_entries: table.len(),
            extract,
            preview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depth_ramp::Rgb;
    use tempfile::TempDir;

    fn small_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.calibration.strip_width = 3;
        config.calibration.depth_min = -300.0;
        config.calibration.depth_max = 0.0;
        config.extraction.legend_height = 1;
        config
    }

    fn three_color_table() -> DepthLookupTable {
        [
            (Rgb::BLACK, -300.0),
            (Rgb::new(0, 0, 255), -150.0),
            (Rgb::WHITE, 0.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_extract_image_writes_downsampled_grid() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("heightmap.json");
        let pipeline = DepthPipeline::new(small_config());

        // 4x5 map: top 4 rows data, bottom row legend
        let mut image = RgbImage::filled(4, 5, Rgb::new(0, 0, 255));
        image.set(0, 0, Rgb::new(230, 231, 232));
        image.set(3, 3, Rgb::new(1, 2, 3));

        let result = pipeline
            .extract_image(&image, &three_color_table(), &output)
            .unwrap();

        assert_eq!(result.extraction.grid.height(), 4);
        assert_eq!(result.extraction.substituted, 1);
        assert_eq!(result.extraction.found, 14);
        assert_eq!(result.extraction.tally.count(Rgb::new(1, 2, 3)), 1);

        // Top-left block: (0 - 150 * 3) / 4
        assert_eq!(result.heightmap.get(0, 0), Some(Some(-112.5)));
        assert_eq!(result.heightmap.get(1, 1), Some(Some(-150.0)));
        assert_eq!(persistence::load_grid(&output).unwrap(), result.heightmap);
    }

    #[test]
    fn test_zero_factor_is_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("heightmap.json");
        let mut config = small_config();
        config.downsample_factor = 0;

        let err = DepthPipeline::new(config)
            .extract_image(&RgbImage::filled(2, 2, Rgb::WHITE), &three_color_table(), &output)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Downsample(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_legend_taller_than_map_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("heightmap.json");
        let mut config = small_config();
        config.extraction.legend_height = 50;

        let err = DepthPipeline::new(config)
            .extract_image(&RgbImage::filled(4, 10, Rgb::BLACK), &three_color_table(), &output)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::EmptyHeightmap {
                width: 2,
                height: 0
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_single_column_map_is_empty_after_downsampling() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("heightmap.json");

        let err = DepthPipeline::new(small_config())
            .extract_image(&RgbImage::filled(1, 9, Rgb::BLACK), &three_color_table(), &output)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::EmptyHeightmap {
                width: 0,
                height: 4
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_preview_grid_uses_configured_no_data_color() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("preview.png");
        let mut config = small_config();
        config.preview.no_data_color = [255, 0, 255];

        let grid = DepthGrid::from_rows(vec![vec![Some(0.0), None]]).unwrap();
        let image = DepthPipeline::new(config).preview_grid(&grid, &output).unwrap();

        assert_eq!(image.pixels(), &[Rgb::WHITE, Rgb::new(255, 0, 255)]);
        assert!(output.exists());
    }

    #[test]
    fn test_bad_ramp_is_gradient_error() {
        let mut config = small_config();
        config.preview.stops.clear();
        let err = DepthPipeline::new(config).renderer().unwrap_err();
        assert!(matches!(err, PipelineError::Gradient(_)));
    }
}
