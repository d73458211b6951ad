//! Super Nim - console entry point.
//!
//! Starts one game on the default 8x8 board with 15 chips and plays it to
//! completion on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use nim_rules::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use super_nim::{ConsoleFrontend, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let _cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::default();
    info!(size = config.size(), chips = config.chips(), "Starting Super Nim");

    let mut rng = ChaCha8Rng::from_entropy();
    let board = config
        .board(&mut rng)
        .context("Failed to set up the board")?;

    let stdin = std::io::stdin();
    let frontend = ConsoleFrontend::new(stdin.lock(), std::io::stdout());
    let over = Orchestrator::new(frontend).run(board)?;

    info!(outcome = %over.outcome(), "Super Nim finished");
    Ok(())
}

/// Logs to stderr so the board on stdout stays readable.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
