pub mod config;

pub use config::{
    AppConfig, CalibrationConfig, ExtractionConfig, NearWhiteConfig, PathsConfig, PreviewConfig,
    StopConfig,
};
