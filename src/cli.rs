//! Command-line interface for gridtac.

use clap::Parser;
use gridtac::Locale;

/// Gridtac - play a grid game against a win-then-block computer
#[derive(Parser, Debug)]
#[command(name = "gridtac")]
#[command(about = "Play tic-tac-toe style grid games against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "gridtac.toml")]
    pub config: std::path::PathBuf,

    /// Match wins needed to take a series
    #[arg(short, long)]
    pub games_to_win: Option<u32>,

    /// Board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns (at most 26)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Message language, e.g. en_US
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,
}
