//! Gridtac - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtac::{GameConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    run(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,gridtac=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(
        cli.games_to_win,
        cli.rows,
        cli.cols,
        cli.locale,
        cli.seed,
    )?;
    info!(?config, "Configuration resolved");
    Ok(config)
}

#[instrument(skip(config))]
fn run(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(config, stdin, stdout);
    let played = session.run()?;
    info!(played, "Goodbye");
    Ok(())
}
