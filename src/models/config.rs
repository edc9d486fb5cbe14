use crate::assets::ConfigLoader;
use crate::error::PipelineError;
use depth_ramp::{
    Gradient, GradientError, GradientStop, NearWhiteBand, Rgb, DEFAULT_DEPTH_MAX,
    DEFAULT_DEPTH_MIN, DEFAULT_DOWNSAMPLE_FACTOR, DEFAULT_LEGEND_HEIGHT, DEFAULT_STRIP_WIDTH,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from bathymap.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Reference strip calibration
    pub calibration: CalibrationConfig,

    /// Map extraction
    pub extraction: ExtractionConfig,

    /// Block size for heightmap reduction
    pub downsample_factor: usize,

    /// Preview rendering
    pub preview: PreviewConfig,

    /// Input and output files
    pub paths: PathsConfig,
}

/// Depth range assigned across the reference strip
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Depth of the strip's first column
    pub depth_min: f64,

    /// Depth of the strip's last column
    pub depth_max: f64,

    /// Required strip width in pixels
    pub strip_width: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            depth_min: DEFAULT_DEPTH_MIN,
            depth_max: DEFAULT_DEPTH_MAX,
            strip_width: DEFAULT_STRIP_WIDTH,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Rows at the bottom of the map reserved for the legend
    pub legend_height: usize,

    /// Channel bounds for the near-white fallback
    pub near_white: NearWhiteConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            legend_height: DEFAULT_LEGEND_HEIGHT,
            near_white: NearWhiteConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NearWhiteConfig {
    pub low: u8,
    pub high: u8,
}

impl Default for NearWhiteConfig {
    fn default() -> Self {
        let band = NearWhiteBand::default();
        Self {
            low: band.low,
            high: band.high,
        }
    }
}

impl From<NearWhiteConfig> for NearWhiteBand {
    fn from(c: NearWhiteConfig) -> Self {
        NearWhiteBand::new(c.low, c.high)
    }
}

/// One gradient stop as written in YAML: `{ depth: -300, color: [0, 0, 255] }`
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct StopConfig {
    pub depth: f64,
    pub color: [u8; 3],
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Ramp stops, ascending by depth
    pub stops: Vec<StopConfig>,

    /// Color for cells without a depth
    pub no_data_color: [u8; 3],
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            stops: Gradient::diagnostic()
                .stops()
                .iter()
                .map(|s| StopConfig {
                    depth: s.depth,
                    color: s.color.to_bytes(),
                })
                .collect(),
            no_data_color: Rgb::NO_DATA_GRAY.to_bytes(),
        }
    }
}

impl PreviewConfig {
    /// Validate the configured stops into a [`Gradient`]
    pub fn gradient(&self) -> Result<Gradient, GradientError> {
        Gradient::new(
            self.stops
                .iter()
                .map(|s| GradientStop::new(s.depth, Rgb::from_bytes(s.color)))
                .collect(),
        )
    }

    pub fn no_data(&self) -> Rgb {
        Rgb::from_bytes(self.no_data_color)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Reference gradient strip image
    pub scale_image: PathBuf,

    /// Color-coded map image (legend at the bottom)
    pub map_image: PathBuf,

    /// Calibrated lookup table (JSON)
    pub lookup: PathBuf,

    /// Downsampled heightmap (JSON)
    pub heightmap: PathBuf,

    /// Rendered preview image
    pub preview: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            scale_image: PathBuf::from("SCALE.png"),
            map_image: PathBuf::from("MAP.png"),
            lookup: PathBuf::from("color_to_depth.json"),
            heightmap: PathBuf::from("heightmap.json"),
            preview: PathBuf::from("heightmap_preview.png"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationConfig::default(),
            extraction: ExtractionConfig::default(),
            downsample_factor: DEFAULT_DOWNSAMPLE_FACTOR,
            preview: PreviewConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, PipelineError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that parse but cannot work
    pub fn validate(&self) -> Result<(), PipelineError> {
        let band = self.extraction.near_white;
        if band.low > band.high {
            return Err(PipelineError::Config(format!(
                "extraction.near_white.low ({}) must not exceed high ({})",
                band.low, band.high
            )));
        }
        Ok(())
    }

    /// Load an explicitly requested config file; failure is an error
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from the loader (external file or embedded
    /// default), falling back to built-in defaults on any failure
    pub fn load_from_assets(loader: &ConfigLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::debug!(source = %loader.source_description(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Invalid config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
