//! Status consistency invariant: the recorded status agrees with the board.

use super::super::{GameState, GameStatus, rules};
use super::Invariant;

/// Invariant: Status matches what the rules say about the board.
///
/// `Won(p)` iff `p` owns a complete line, `Draw` iff the board is full with
/// no line, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(player) => rules::check_winner(board) == Some(player),
            GameStatus::Draw => rules::is_draw(board),
            GameStatus::InProgress => {
                rules::check_winner(board).is_none() && !rules::is_full(board)
            }
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_fresh_game_holds() {
        assert!(StatusConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unnoticed_win_violates() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state
                .board_mut()
                .set(pos, Square::Occupied(Player::O));
        }
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
