//! Gridtac console game library.
//!
//! The rules live in [`gridtac_core`]; this crate adds everything needed to
//! play them at a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Messages**: localized prompts and reports
//! - **Render**: plain-text board drawing
//! - **Console**: a [`Presenter`](gridtac_core::Presenter) over any reader/writer pair
//! - **Series**: first-to-N scoring and the play-again loop
//!
//! # Example
//!
//! ```no_run
//! use gridtac::{GameConfig, Session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("gridtac.toml")?;
//! let stdin = std::io::stdin().lock();
//! let mut session = Session::new(config, stdin, std::io::stdout());
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod messages;
mod render;
mod series;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_COLS};

// Crate-level exports - Presentation
pub use console::ConsolePresenter;
pub use messages::{Locale, Messages};
pub use render::{Symbols, render_board};

// Crate-level exports - Series play
pub use series::{SeriesScore, Session};
