//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The engine records each
//! placed mark as a [`Move`] so invariants can be checked against history.

use super::{Player, Position};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when attempting a move.
///
/// All variants are recoverable: the state is left untouched and the caller
/// may retry with different input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("Game is already over.")]
    InvalidMove,

    /// The square at the position is already occupied.
    #[display("Position already taken: {}.", _0)]
    CellOccupied(Position),

    /// A raw index that does not name a square.
    #[display("Position {} is out of range (must be 0-8).", _0)]
    OutOfRange(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
