use anyhow::Result;
use clap::Parser;
use grid_snake::game::Topology;
use grid_snake::modes::{SessionConfig, SessionMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Deterministic grid snake driven from stdin")]
struct Cli {
    /// JSON session config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Spawn cell of the first game (random when omitted)
    #[arg(long)]
    spawn: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// End the game at the board edge instead of wrapping around
    #[arg(long)]
    walls: bool,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if self.spawn.is_some() {
            config.spawn = self.spawn;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.walls {
            config.topology = Topology::Walled;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config()?;

    let mut session = SessionMode::new(config)?;
    session.run().await?;

    Ok(())
}
