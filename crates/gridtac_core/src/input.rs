//! Free-form coordinate parsing for human moves.
//!
//! A person types something like `b2`, `2B` or `  row 3, column a `. The
//! first run of digits names the 1-based row and the first letter names the
//! column, in either order. Anything else in the text is ignored.
//!
//! Only ASCII counts: `0`-`9` for the row and `a`-`z`/`A`-`Z` for the
//! column. Other Unicode digits such as `٣` and letters such as `é` are
//! treated like any other ignored character.

use crate::{Board, Move, PlayerId, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// Reasons a line of text does not yield a playable move.
///
/// Variants are checked in declaration order, so malformed text is reported
/// before bounds and bounds before occupancy. None of them change the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The text lacks a digit or a letter.
    #[display("Input must contain a row number and a column letter")]
    Malformed,
    /// The row number is outside the board.
    #[display("Row is outside the board's {rows} rows")]
    RowOutOfBounds {
        /// Number of rows on the board.
        rows: usize,
    },
    /// The column letter is outside the board.
    #[display("Column is outside the board's {cols} columns")]
    ColOutOfBounds {
        /// Number of columns on the board.
        cols: usize,
    },
    /// The target cell is already taken.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Move),
}

/// Raw tokens pulled from the text before bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tokens<'a> {
    digits: &'a str,
    letter: char,
}

/// First ASCII digit run and first ASCII letter, wherever they appear.
fn tokenize(raw: &str) -> Option<Tokens<'_>> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run = &raw[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    let letter = raw.chars().find(char::is_ascii_alphabetic)?;
    Some(Tokens {
        digits: &run[..end],
        letter,
    })
}

/// Validates `raw` against `board` without changing it.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn parse_move<P: PlayerId>(raw: &str, board: &Board<P>) -> Result<Move, InputError> {
    let tokens = tokenize(raw).ok_or(InputError::Malformed)?;

    // A digit run too long for usize is as out of bounds as any other.
    let row = tokens
        .digits
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|row| *row < board.rows())
        .ok_or(InputError::RowOutOfBounds { rows: board.rows() })?;

    let col = usize::from(tokens.letter.to_ascii_lowercase() as u8 - b'a');
    if col >= board.cols() {
        return Err(InputError::ColOutOfBounds { cols: board.cols() });
    }

    let mv = Move::new(row, col);
    match board.at(mv) {
        Some(Square::Empty) => Ok(mv),
        _ => Err(InputError::Occupied(mv)),
    }
}

/// Validates `raw` and, when it names an empty cell, claims it for `player`.
///
/// Either the whole move is applied or the board is left as it was.
#[instrument(skip(board))]
pub fn apply_input<P: PlayerId>(
    raw: &str,
    board: &mut Board<P>,
    player: P,
) -> Result<Move, InputError> {
    match parse_move(raw, board) {
        Ok(mv) => {
            board.place(mv, player);
            debug!(cell = %mv, "Input applied");
            Ok(mv)
        }
        Err(e) => {
            warn!(error = %e, "Input rejected");
            Err(e)
        }
    }
}
