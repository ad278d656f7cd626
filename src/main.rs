use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::PlayMode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 16x16 grid in the terminal")]
struct Cli {
    /// JSON config file; unspecified fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between ticks (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.validate().context("Invalid configuration")?;

    match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded food placement");
            let mut mode = PlayMode::new(config, ChaCha8Rng::seed_from_u64(seed));
            mode.run().await
        }
        None => {
            let mut mode = PlayMode::new(config, rand::thread_rng());
            mode.run().await
        }
    }
}

/// The terminal belongs to the board, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
