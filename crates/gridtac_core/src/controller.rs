//! Single-match state machine.
//!
//! The controller alternates turns until a line is completed or the board
//! fills. Human moves are pulled as raw text from a [`Presenter`]; computer
//! moves come from the [`GreedySelector`]. The controller never reads or
//! writes a terminal itself.

use crate::input::{InputError, apply_input};
use crate::rules::{check_winner, is_full};
use crate::selector::{GreedySelector, SelectError};
use crate::{Board, MatchResult, Move, PlayerId};
use derive_more::{Display, Error, From};
use rand::Rng;
use tracing::{debug, error, info, instrument};

/// Failure reported by a presenter, e.g. a closed input stream.
#[derive(Debug, Clone, Display, Error)]
#[display("Presenter error: {} at {}:{}", message, file, line)]
pub struct PresenterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PresenterError {
    /// Creates a new presenter error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Errors that end a match early.
#[derive(Debug, Clone, Display, Error, From)]
pub enum MatchError {
    /// The presenter could not supply input.
    #[display("{_0}")]
    Presenter(PresenterError),
    /// The computer was asked to move with no cell left.
    #[display("{_0}")]
    Selector(SelectError),
    /// A turn was handed to an identifier that is neither contestant.
    #[display("Player {_0} is not part of this match")]
    #[from(ignore)]
    UnknownPlayer(#[error(not(source))] String),
}

/// Presentation capability the controller drives.
///
/// Only [`prompt_move`](Presenter::prompt_move) is required; the
/// notifications default to doing nothing.
pub trait Presenter<P: PlayerId> {
    /// Returns one line of raw text naming the human's cell.
    ///
    /// May block on real user interaction.
    fn prompt_move(&mut self, board: &Board<P>, human: P) -> Result<String, PresenterError>;

    /// Reports why the last line of text was rejected.
    fn reject_input(&mut self, _error: &InputError) -> Result<(), PresenterError> {
        Ok(())
    }

    /// Announces the cell the computer played.
    fn computer_moved(&mut self, _mv: Move) -> Result<(), PresenterError> {
        Ok(())
    }

    /// Called after every applied move.
    fn board_changed(&mut self, _board: &Board<P>) -> Result<(), PresenterError> {
        Ok(())
    }
}

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState<P> {
    /// Waiting for `P` to move.
    AwaitingMove(P),
    /// `P` just moved; the board needs evaluating.
    MoveApplied(P),
    /// Terminal state.
    Finished(MatchResult<P>),
}

/// Drives one match between the computer and a human.
#[derive(Debug)]
pub struct MatchController<P, R> {
    computer: P,
    human: P,
    selector: GreedySelector<R>,
}

impl<P: PlayerId, R: Rng> MatchController<P, R> {
    /// Creates a controller for the given identifiers.
    pub fn new(computer: P, human: P, selector: GreedySelector<R>) -> Self {
        debug_assert_ne!(computer, human, "players must differ");
        Self {
            computer,
            human,
            selector,
        }
    }

    /// The computer's identifier.
    pub fn computer(&self) -> P {
        self.computer
    }

    /// The human's identifier.
    pub fn human(&self) -> P {
        self.human
    }

    fn other(&self, player: P) -> P {
        if player == self.computer {
            self.human
        } else {
            self.computer
        }
    }

    /// Advances the state machine by one transition.
    #[instrument(skip(self, board, presenter))]
    pub fn step<T: Presenter<P>>(
        &mut self,
        state: MatchState<P>,
        board: &mut Board<P>,
        presenter: &mut T,
    ) -> Result<MatchState<P>, MatchError> {
        match state {
            MatchState::AwaitingMove(player) | MatchState::MoveApplied(player)
                if player != self.computer && player != self.human =>
            {
                error!(?player, "Turn given to an unknown player");
                Err(MatchError::UnknownPlayer(format!("{:?}", player)))
            }
            MatchState::AwaitingMove(player) if player == self.computer => {
                let mv = self.selector.select(board, self.computer, self.human)?;
                presenter.computer_moved(mv)?;
                Ok(MatchState::MoveApplied(player))
            }
            MatchState::AwaitingMove(player) => {
                let raw = presenter.prompt_move(board, player)?;
                match apply_input(&raw, board, player) {
                    Ok(_) => Ok(MatchState::MoveApplied(player)),
                    Err(e) => {
                        presenter.reject_input(&e)?;
                        Ok(MatchState::AwaitingMove(player))
                    }
                }
            }
            MatchState::MoveApplied(player) => {
                presenter.board_changed(board)?;
                if let Some(winner) = check_winner(board) {
                    Ok(MatchState::Finished(MatchResult::Winner(winner)))
                } else if is_full(board) {
                    Ok(MatchState::Finished(MatchResult::Tie))
                } else {
                    Ok(MatchState::AwaitingMove(self.other(player)))
                }
            }
            MatchState::Finished(result) => Ok(MatchState::Finished(result)),
        }
    }

    /// Plays `board` to completion starting with `starting`.
    #[instrument(skip(self, board, presenter), fields(rows = board.rows(), cols = board.cols()))]
    pub fn run<T: Presenter<P>>(
        &mut self,
        board: &mut Board<P>,
        starting: P,
        presenter: &mut T,
    ) -> Result<MatchResult<P>, MatchError> {
        let mut state = MatchState::AwaitingMove(starting);
        loop {
            state = self.step(state, board, presenter)?;
            debug!(?state, "Transition");
            if let MatchState::Finished(result) = state {
                info!(?result, "Match finished");
                return Ok(result);
            }
        }
    }
}
