use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bathymap::assets::ConfigLoader;
use bathymap::models::AppConfig;
use bathymap::services::{DepthPipeline, ExtractResult};
use depth_ramp::UnknownColorTally;

#[derive(Parser)]
#[command(name = "bathymap")]
#[command(about = "Convert color-coded depth maps into heightmaps and preview images")]
struct Cli {
    /// Config file (overrides CONFIG_FILE and the embedded default)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the color-to-depth lookup table from a reference strip
    Calibrate {
        /// Reference strip PNG
        #[arg(short, long)]
        scale: Option<PathBuf>,

        /// Lookup table JSON to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Depth of the strip's first column
        #[arg(long, allow_hyphen_values = true)]
        depth_min: Option<f64>,

        /// Depth of the strip's last column
        #[arg(long, allow_hyphen_values = true)]
        depth_max: Option<f64>,
    },
    /// Convert a map image into a downsampled heightmap
    Extract {
        /// Map PNG (legend at the bottom)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// Lookup table JSON produced by `calibrate`
        #[arg(short, long)]
        lookup: Option<PathBuf>,

        /// Heightmap JSON to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Downsample block edge
        #[arg(short, long)]
        factor: Option<usize>,

        /// Legend rows to drop from the bottom of the map
        #[arg(long)]
        legend_height: Option<usize>,
    },
    /// Render a heightmap to a preview PNG
    Preview {
        /// Heightmap JSON
        #[arg(long)]
        heightmap: Option<PathBuf>,

        /// Preview PNG to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Calibrate, extract and preview using the configured paths
    Run,
    /// Write the embedded default config to disk
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calibrate {
            scale,
            output,
            depth_min,
            depth_max,
        }) => run_calibrate_command(cli.config, scale, output, depth_min, depth_max),
        Some(Commands::Extract {
            map,
            lookup,
            output,
            factor,
            legend_height,
        }) => run_extract_command(cli.config, map, lookup, output, factor, legend_height),
        Some(Commands::Preview { heightmap, output }) => {
            run_preview_command(cli.config, heightmap, output)
        }
        Some(Commands::Run) => run_all_command(cli.config),
        Some(Commands::Init { force }) => run_init_command(cli.config, force),
        None => {
            run_status_command(cli.config);
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bathymap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Start logging and load the config. An explicit --config must load;
/// otherwise fall back to defaults.
fn prepare(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    init_logging();
    match path {
        Some(path) => Ok(AppConfig::load(&path)?),
        None => Ok(AppConfig::load_from_assets(&ConfigLoader::from_env())),
    }
}

fn run_calibrate_command(
    config_path: Option<PathBuf>,
    scale: Option<PathBuf>,
    output: Option<PathBuf>,
    depth_min: Option<f64>,
    depth_max: Option<f64>,
) -> anyhow::Result<()> {
    let mut config = prepare(config_path)?;
    if let Some(v) = depth_min {
        config.calibration.depth_min = v;
    }
    if let Some(v) = depth_max {
        config.calibration.depth_max = v;
    }
    let scale = scale.unwrap_or_else(|| config.paths.scale_image.clone());
    let output = output.unwrap_or_else(|| config.paths.lookup.clone());

    let table = DepthPipeline::new(config).calibrate(&scale, &output)?;
    println!(
        "Wrote {} color entries to {}",
        table.len(),
        output.display()
    );
    Ok(())
}

fn run_extract_command(
    config_path: Option<PathBuf>,
    map: Option<PathBuf>,
    lookup: Option<PathBuf>,
    output: Option<PathBuf>,
    factor: Option<usize>,
    legend_height: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = prepare(config_path)?;
    if let Some(v) = factor {
        config.downsample_factor = v;
    }
    if let Some(v) = legend_height {
        config.extraction.legend_height = v;
    }
    let map = map.unwrap_or_else(|| config.paths.map_image.clone());
    let lookup = lookup.unwrap_or_else(|| config.paths.lookup.clone());
    let output = output.unwrap_or_else(|| config.paths.heightmap.clone());

    let result = DepthPipeline::new(config).extract(&map, &lookup, &output)?;
    print_extract_summary(&result, &output);
    Ok(())
}

fn run_preview_command(
    config_path: Option<PathBuf>,
    heightmap: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = prepare(config_path)?;
    let heightmap = heightmap.unwrap_or_else(|| config.paths.heightmap.clone());
    let output = output.unwrap_or_else(|| config.paths.preview.clone());

    let image = DepthPipeline::new(config).preview(&heightmap, &output)?;
    println!(
        "Wrote {}x{} preview to {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}

fn run_all_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = prepare(config_path)?;
    let paths = config.paths.clone();
    let result = DepthPipeline::new(config).run()?;
    println!(
        "Wrote {} color entries to {}",
        result.lookup_entries,
        paths.lookup.display()
    );
    print_extract_summary(&result.extract, &paths.heightmap);
    println!(
        "Wrote {}x{} preview to {}",
        result.preview.width(),
        result.preview.height(),
        paths.preview.display()
    );
    Ok(())
}

fn print_extract_summary(result: &ExtractResult, output: &std::path::Path) {
    println!(
        "Wrote {}x{} heightmap to {}",
        result.heightmap.width(),
        result.heightmap.height(),
        output.display()
    );
    print_unknown_colors(&result.extraction.tally);
}

fn print_unknown_colors(tally: &UnknownColorTally) {
    if tally.is_empty() {
        println!("\nNo unknown colors found.");
        return;
    }
    println!(
        "\nFound {} unknown colors not in the scale:",
        tally.len()
    );
    for (color, count) in tally.sorted_by_frequency() {
        println!("  ({color}): {count} occurrences");
    }
}

fn run_init_command(config: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let loader = match config {
        Some(path) => ConfigLoader::new(Some(path)),
        None => ConfigLoader::from_env(),
    };
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    Ok(())
}

fn run_status_command(config: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Bathymap v{VERSION}");
    println!("Color-coded depth maps to heightmaps\n");

    let config_env = std::env::var("CONFIG_FILE").ok();
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );

    let (source, settings) = match config {
        Some(path) => match AppConfig::load(&path) {
            Ok(c) => (path.display().to_string(), c),
            Err(e) => (format!("{} (error: {e})", path.display()), AppConfig::default()),
        },
        None => {
            let loader = ConfigLoader::from_env();
            (loader.source_description(), AppConfig::load_from_assets(&loader))
        }
    };

    println!("\nConfig: {source}");
    println!(
        "  depth range      {} .. {} over {} columns",
        settings.calibration.depth_min,
        settings.calibration.depth_max,
        settings.calibration.strip_width
    );
    println!(
        "  legend height    {} rows",
        settings.extraction.legend_height
    );
    println!(
        "  near-white band  {}..={}",
        settings.extraction.near_white.low, settings.extraction.near_white.high
    );
    println!("  downsample       {}x", settings.downsample_factor);
    println!("  preview stops    {}", settings.preview.stops.len());

    println!("\nPaths:");
    println!("  scale     {}", settings.paths.scale_image.display());
    println!("  map       {}", settings.paths.map_image.display());
    println!("  lookup    {}", settings.paths.lookup.display());
    println!("  heightmap {}", settings.paths.heightmap.display());
    println!("  preview   {}", settings.paths.preview.display());

    println!("\nCommands:");
    println!("  bathymap calibrate  Build the lookup table from the reference strip");
    println!("  bathymap extract    Convert the map into a heightmap");
    println!("  bathymap preview    Render a heightmap to PNG");
    println!("  bathymap run        All three stages with configured paths");
    println!("  bathymap init       Write the default config file");
    println!("\nRun 'bathymap --help' for more details.");
}
