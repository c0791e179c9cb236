//! Monotonic board invariant: squares never change once set.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// Verified by replaying the move history on top of the starting board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = *state.origin();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_resumed_game_holds() {
        let board: Board = "XO. ... ...".parse().unwrap();
        let mut state = GameState::from_board(board, Player::X);
        state.place(Position::Center);
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::new();
        state.place(Position::Center);
        state
            .board_mut()
            .set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut state = GameState::new();
        state.place(Position::Center);
        state.board_mut().set(Position::Center, Square::Empty);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
