//! Line-win detection.

use crate::{Board, PlayerId};
use tracing::instrument;

/// Returns the player owning a complete line, if any.
///
/// Candidates are the distinct players on the board in order of first
/// appearance in a row-major scan. For each candidate the lines are checked
/// as rows, then columns, then (square boards only) the main diagonal and the
/// anti-diagonal. The first candidate owning any line wins. A board where two
/// players both own a line cannot arise in play; it resolves by that same
/// candidate order.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn check_winner<P: PlayerId>(board: &Board<P>) -> Option<P> {
    let mut candidates: Vec<P> = Vec::new();
    for player in board.squares().iter().filter_map(|sq| sq.player()) {
        if !candidates.contains(&player) {
            candidates.push(player);
        }
    }

    candidates
        .into_iter()
        .find(|&player| owns_line(board, player))
}

fn owns_line<P: PlayerId>(board: &Board<P>, player: P) -> bool {
    let (rows, cols) = (board.rows(), board.cols());
    let held = |row: usize, col: usize| {
        board
            .get(row, col)
            .is_some_and(|sq| sq.is_held_by(player))
    };

    if board
        .rows_iter()
        .any(|line| line.iter().all(|sq| sq.is_held_by(player)))
    {
        return true;
    }

    if (0..cols).any(|col| (0..rows).all(|row| held(row, col))) {
        return true;
    }

    if !board.is_square() {
        return false;
    }

    let n = rows;
    (0..n).all(|i| held(i, i)) || (0..n).all(|i| held(n - 1 - i, i))
}
