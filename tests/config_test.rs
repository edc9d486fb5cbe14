//! Config loading from files, the environment loader and the embedded default.

mod common;

use bathymap::assets::ConfigLoader;
use bathymap::error::PipelineError;
use bathymap::models::AppConfig;
use bathymap::services::DepthPipeline;
use common::TestWorkspace;
use depth_ramp::Rgb;
use pretty_assertions::assert_eq;

#[test]
fn test_explicit_config_must_parse() {
    let ws = TestWorkspace::new();
    let path = ws.path("broken.yaml");
    std::fs::write(&path, "calibration: [unterminated").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn test_explicit_config_missing_is_io_error() {
    let ws = TestWorkspace::new();
    let err = AppConfig::load(&ws.path("absent.yaml")).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}

#[test]
fn test_unparseable_loader_config_falls_back_to_defaults() {
    let ws = TestWorkspace::new();
    let path = ws.path("broken.yaml");
    std::fs::write(&path, "downsample_factor: [").unwrap();

    let config = AppConfig::load_from_assets(&ConfigLoader::new(Some(path)));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_init_then_load_round_trips_defaults() {
    let ws = TestWorkspace::new();
    let path = ws.path("bathymap.yaml");
    let loader = ConfigLoader::new(Some(path.clone()));

    loader.init(false).unwrap();
    assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_custom_ramp_drives_preview() {
    let ws = TestWorkspace::new();
    let path = ws.path("ramp.yaml");
    std::fs::write(
        &path,
        r#"
preview:
  stops:
    - { depth: 0, color: [0, 0, 0] }
    - { depth: 100, color: [200, 100, 50] }
  no_data_color: [1, 2, 3]
"#,
    )
    .unwrap();
    let config = AppConfig::load(&path).unwrap();

    let heightmap = ws.path("h.json");
    std::fs::write(&heightmap, "[[50.0, null, 1000.0]]").unwrap();
    let image = DepthPipeline::new(config)
        .preview(&heightmap, &ws.path("p.png"))
        .unwrap();

    assert_eq!(
        image.pixels(),
        &[Rgb::new(100, 50, 25), Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)]
    );
}

#[test]
fn test_inverted_near_white_band_falls_back_to_defaults() {
    let ws = TestWorkspace::new();
    let path = ws.path("inverted.yaml");
    std::fs::write(&path, "extraction:\n  near_white:\n    low: 240\n    high: 100\n").unwrap();

    assert!(matches!(
        AppConfig::load(&path).unwrap_err(),
        PipelineError::Config(_)
    ));
    let config = AppConfig::load_from_assets(&ConfigLoader::new(Some(path)));
    assert_eq!(config, AppConfig::default());
}
