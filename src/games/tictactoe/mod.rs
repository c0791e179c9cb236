mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full};
pub use types::{Board, BoardParseError, GameState, GameStatus, Player, Square};
