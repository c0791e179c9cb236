//! Tic-tac-toe library - a thread-safe game engine with a console front end
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] serializes moves and resets over one [`GameState`]
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **Contracts & invariants**: move preconditions and debug-build postconditions
//! - **Console**: a text loop over any `BufRead`/`Write` pair
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, GameStatus, Player, Position};
//!
//! let engine = GameEngine::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     engine.attempt_move_index(pos).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert!(engine.attempt_move(Position::BottomRight).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;

// Crate-level exports - Console
pub use console::{Command, CommandError, Console, ConsoleError, ConsoleSettings, SessionSummary};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Contract, GameEngine, GameNotOver,
    GameState, GameStatus, Invariant, InvariantSet, InvariantViolation, LINES, LegalMove,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, Player, Position, Square,
    SquareIsEmpty, StatusConsistentInvariant, TicTacToeInvariants, check_winner, is_draw,
    is_full,
};
