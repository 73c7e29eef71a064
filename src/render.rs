//! Plain-text board rendering.

use gridtac_core::{Board, Move, Role, Square};
use tracing::instrument;

/// Characters used to draw each square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    empty: char,
    starter: Role,
    first: char,
    second: char,
}

impl Symbols {
    /// Whoever opens the match draws `x`, the other side `o`.
    #[instrument]
    pub fn for_starter(starter: Role) -> Self {
        Self {
            empty: ' ',
            starter,
            first: 'x',
            second: 'o',
        }
    }

    /// Symbol for a contestant.
    pub fn of(&self, role: Role) -> char {
        if role == self.starter {
            self.first
        } else {
            self.second
        }
    }

    /// Symbol for a square.
    pub fn square(&self, square: Square<Role>) -> char {
        match square {
            Square::Empty => self.empty,
            Square::Occupied(role) => self.of(role),
        }
    }
}

/// Draws the board as text, one line per board row plus separators.
///
/// With `square_names`, a header of column letters and a 1-based row number
/// in front of each row show the names a person types to pick a cell.
/// Columns past `Z` have no letter and are headed `?`.
#[instrument(skip(board, symbols), fields(rows = board.rows(), cols = board.cols()))]
pub fn render_board(board: &Board<Role>, symbols: &Symbols, square_names: bool) -> String {
    let cols = board.cols();
    let mut out = String::new();

    if square_names {
        let letters: Vec<String> = (0..cols)
            .map(|col| Move::new(0, col).column_letter().to_string())
            .collect();
        out.push_str("  ");
        out.push_str(&letters.join(" "));
        out.push('\n');
        out.push_str(&"--".repeat(cols - 1));
        out.push_str("---\n");
    }

    let separator = format!("{}-\n", "-+".repeat(cols - 1));
    for (i, row) in board.rows_iter().enumerate() {
        if i > 0 {
            if square_names {
                out.push_str(" |");
            }
            out.push_str(&separator);
        }
        if square_names {
            out.push_str(&format!("{}|", i + 1));
        }
        let cells: Vec<String> = row.iter().map(|sq| symbols.square(*sq).to_string()).collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}
