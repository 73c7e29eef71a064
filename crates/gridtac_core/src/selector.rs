//! Move selection for the computer opponent.
//!
//! The opponent looks exactly one ply ahead for each side: it takes any
//! immediately winning cell, otherwise blocks any cell that would let the
//! other side win next, otherwise plays a random empty cell. There is no
//! deeper search, so a careful human can still beat it on larger boards.

use crate::rules::check_winner;
use crate::{Board, Move, PlayerId};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, instrument};

/// Contract violations raised by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectError {
    /// Asked to move on a board with no empty cell.
    #[display("No empty cell left to play")]
    BoardFull,
}

/// Picks and plays a cell for `computer`.
///
/// Empty cells are scanned in row-major order, first looking for a win for
/// `computer`, then for a cell `human` would win with. The first hit is
/// played. Without a hit the cell is drawn uniformly from `rng`.
///
/// # Errors
///
/// Returns [`SelectError::BoardFull`] when the board has no empty cell; the
/// board is not touched.
#[instrument(skip(board, rng))]
pub fn select_move<P, R>(
    board: &mut Board<P>,
    computer: P,
    human: P,
    rng: &mut R,
) -> Result<Move, SelectError>
where
    P: PlayerId,
    R: Rng + ?Sized,
{
    let free = board.empty_cells();
    if free.is_empty() {
        error!("Selector invoked on a full board");
        return Err(SelectError::BoardFull);
    }

    for who in [computer, human] {
        let hit = free
            .iter()
            .copied()
            .find(|&mv| board.probe(mv, who, |b| check_winner(b) == Some(who)));
        if let Some(mv) = hit {
            debug!(cell = %mv, wins_for = ?who, "Decisive cell found");
            board.place(mv, computer);
            return Ok(mv);
        }
    }

    let mv = *free.choose(rng).ok_or(SelectError::BoardFull)?;
    debug!(cell = %mv, candidates = free.len(), "No decisive cell, playing random");
    board.place(mv, computer);
    Ok(mv)
}

/// Win-then-block-then-random opponent with its own random source.
#[derive(Debug, Clone)]
pub struct GreedySelector<R = StdRng> {
    rng: R,
}

impl GreedySelector<StdRng> {
    /// Creates a selector with a reproducible random fallback.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the thread-local generator.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> GreedySelector<R> {
    /// Creates a selector drawing fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks and plays a cell for `computer`. See [`select_move`].
    pub fn select<P: PlayerId>(
        &mut self,
        board: &mut Board<P>,
        computer: P,
        human: P,
    ) -> Result<Move, SelectError> {
        select_move(board, computer, human, &mut self.rng)
    }
}

impl Default for GreedySelector<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
