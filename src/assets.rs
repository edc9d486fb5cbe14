//! Embedded default configuration
//!
//! - If CONFIG_FILE is NOT set: read `./bathymap.yaml` when present, else the embedded default
//! - If CONFIG_FILE IS set: read that file, falling back to the embedded default when missing

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File name of the default config, both embedded and on disk
pub const CONFIG_FILE_NAME: &str = "bathymap.yaml";

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "bathymap.yaml"]
struct EmbeddedConfig;

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with filesystem override and embedded fallback
pub struct ConfigLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new loader.
    ///
    /// `config_file` should be `Some` only if the env var was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Build a loader from the CONFIG_FILE environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("CONFIG_FILE").map(PathBuf::from))
    }

    /// Path that `init` writes to and that `read_config` checks first
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Human-readable origin of the config that would be loaded
    pub fn source_description(&self) -> String {
        let path = self.config_path();
        if path.exists() {
            path.display().to_string()
        } else {
            "embedded default".to_string()
        }
    }

    /// Read the config file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        let path = self.config_path();
        if path.exists() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(&path)?));
        }

        Self::embedded_config().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Embedded {CONFIG_FILE_NAME} not found"),
            )
        })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded default config to disk (init command)
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self.config_path();

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = Self::embedded_config() {
            fs::write(&path, &*data)?;
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    fn embedded_config() -> Option<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_FILE_NAME).map(|f| {
            tracing::trace!("Loading config from embedded assets");
            f.data
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let content = String::from_utf8(
            ConfigLoader::embedded_config()
                .expect("embedded config")
                .into_owned(),
        )
        .unwrap();
        let config = AppConfig::from_yaml(&content).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_external_file_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "downsample_factor: 5\n").unwrap();

        let loader = ConfigLoader::new(Some(path.clone()));
        assert_eq!(loader.read_config_string().unwrap(), "downsample_factor: 5\n");
        assert_eq!(loader.source_description(), path.display().to_string());
    }

    #[test]
    fn test_missing_external_file_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(Some(dir.path().join("absent.yaml")));

        let content = loader.read_config_string().unwrap();
        assert!(content.contains("calibration:"));
        assert_eq!(loader.source_description(), "embedded default");
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("bathymap.yaml");
        let loader = ConfigLoader::new(Some(path.clone()));

        let report = loader.init(false).unwrap();
        assert_eq!(report.written, vec![path.display().to_string()]);
        assert!(report.skipped.is_empty());
        assert!(path.exists());

        fs::write(&path, "downsample_factor: 9\n").unwrap();
        let report = loader.init(false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "downsample_factor: 9\n");

        let report = loader.init(true).unwrap();
        assert_eq!(report.written.len(), 1);
        assert_ne!(fs::read_to_string(&path).unwrap(), "downsample_factor: 9\n");
    }
}
