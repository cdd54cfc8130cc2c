use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transforr_app::config::AppConfig;
use transforr_app::state::AppState;

/// Run the TRANSFORR platformer simulation without a renderer.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with optional [sim], [runner] and [[script]] tables.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Level index to start on.
    #[arg(short, long)]
    level: Option<usize>,
    /// Gameplay RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Lives per run.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    lives: Option<u32>,
    /// Stop after this many ticks.
    #[arg(short, long)]
    ticks: Option<u64>,
    /// Pace ticks at 60 Hz instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON.
    #[arg(long)]
    dump_snapshot: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(level) = self.level {
            config.sim.start_level = level;
        }
        if let Some(seed) = self.seed {
            config.sim.seed = seed;
        }
        if let Some(lives) = self.lives {
            config.sim.starting_lives = lives;
        }
        if let Some(ticks) = self.ticks {
            config.runner.max_ticks = ticks;
        }
        if self.realtime {
            config.runner.realtime = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);
    info!(seed = config.sim.seed, level = config.sim.start_level, "starting run");

    let state = AppState::new();
    let handle = state.start(config).context("could not start the game loop")?;
    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    if cli.dump_snapshot {
        if let Some(snapshot) = state.snapshot()? {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
