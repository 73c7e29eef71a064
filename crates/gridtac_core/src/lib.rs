//! Rules engine for two-player grid games.
//!
//! A human plays an automated opponent on a `rows x cols` board; the first to
//! fill a row, column or (square boards only) diagonal wins.
//!
//! # Architecture
//!
//! - **Board**: grid storage, only mutated by move application
//! - **Rules**: pure win and full-board detection
//! - **Input**: free-form text such as `b2` to a validated move
//! - **Selector**: win-then-block-then-random computer opponent
//! - **Controller**: turn-by-turn state machine for one match
//!
//! # Example
//!
//! ```
//! use gridtac_core::{Board, GreedySelector, Role, apply_input, check_winner};
//!
//! let mut board = Board::new(3, 3).unwrap();
//! apply_input("b2", &mut board, Role::Human).unwrap();
//! let reply = GreedySelector::seeded(7)
//!     .select(&mut board, Role::Computer, Role::Human)
//!     .unwrap();
//! assert_ne!(reply.to_string(), "B2");
//! assert_eq!(check_winner(&board), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod input;
pub mod rules;
mod selector;
mod types;

// Crate-level exports - Domain types
pub use action::Move;
pub use board::{Board, BoardError};
pub use types::{MatchResult, PlayerId, Role, Square};

// Crate-level exports - Rules
pub use rules::{check_winner, is_full};

// Crate-level exports - Move sources
pub use input::{InputError, apply_input, parse_move};
pub use selector::{GreedySelector, SelectError, select_move};

// Crate-level exports - Match orchestration
pub use controller::{MatchController, MatchError, MatchState, Presenter, PresenterError};
