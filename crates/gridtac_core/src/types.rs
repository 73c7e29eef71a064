//! Core domain types for grid games.

use std::fmt::Debug;

/// Identifier for a contestant on the board.
///
/// Identifiers are compared by value equality, never by reference. In practice
/// they are small integers or enum tags such as [`Role`].
pub trait PlayerId: Copy + Eq + Debug {}

impl<T: Copy + Eq + Debug> PlayerId for T {}

/// The two contestants of a console match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Role {
    /// The automated opponent.
    Computer,
    /// The person at the keyboard.
    Human,
}

impl Role {
    /// Returns the other contestant.
    pub fn opponent(self) -> Self {
        match self {
            Role::Computer => Role::Human,
            Role::Human => Role::Computer,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square<P> {
    /// Unclaimed cell.
    Empty,
    /// Cell claimed by a player.
    Occupied(P),
}

impl<P: PlayerId> Square<P> {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<P> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if this square is held by `player`.
    pub fn is_held_by(self, player: P) -> bool {
        self == Square::Occupied(player)
    }
}

impl<P> From<Option<P>> for Square<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(player) => Square::Occupied(player),
            None => Square::Empty,
        }
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult<P> {
    /// Board filled up with no completed line.
    Tie,
    /// A player completed a line.
    Winner(P),
}

impl<P: PlayerId> MatchResult<P> {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<P> {
        match self {
            MatchResult::Winner(player) => Some(*player),
            MatchResult::Tie => None,
        }
    }

    /// Returns true if the match was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, MatchResult::Tie)
    }
}
