use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use optical_markers::{
    config::Config,
    markers::LogWarnings,
    ReportTransformer,
};

#[derive(Parser)]
#[command(
    name = "optical-markers",
    version,
    about = "Convert a sequence report CSV into a DI optical marker list",
    long_about = "Reads the CSV written by Media Composer's Sequence Report tool (Effects Location List only) \
                  and writes a marker list that can be imported back into Avid. Submasters, matte keys, \
                  audio pan/volume and titles are skipped."
)]
struct Cli {
    /// Sequence report CSV
    #[arg(short, long, required_unless_present = "dump_config")]
    input: Option<PathBuf>,

    /// Marker list output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sequence frame rate, overrides the configuration
    #[arg(long)]
    fps: Option<u32>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    dump_config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout may carry the marker list
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.dump_config {
        Config::default().save_to_file(path)?;
        info!("Default configuration written to {:?}", path);
        return Ok(());
    }

    info!("Starting optical-markers v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };
    if let Some(fps) = cli.fps {
        config.timecode.frame_rate = fps;
    }

    let input = cli
        .input
        .context("an input sequence report is required")?;

    let transformer = ReportTransformer::new(config)?;
    let mut warnings = LogWarnings::default();
    let (markers, summary) = transformer
        .transform_file(&input, &mut warnings)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let text = markers.to_string();
    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, text.as_bytes())
                .await
                .with_context(|| format!("Failed to write marker list to {:?}", path))?;
            info!("Marker list saved to {:?}", path);
        }
        None => print!("{}", text),
    }

    info!(
        "{} markers from {} rows ({} merged, {} excluded, {} skipped)",
        markers.len(),
        summary.rows,
        summary.merged,
        summary.excluded,
        summary.skipped
    );
    Ok(())
}
