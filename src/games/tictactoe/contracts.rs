//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::InvalidMove`] once the game has ended.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::InvalidMove)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the square holds a mark.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, then square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one move was recorded
/// - Board remains monotonic
/// - Players still alternate
/// - Status agrees with the board
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not record exactly one entry"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move history must grow by one".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut state = GameState::new();
        state.place(Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let state = GameState::from_board(board, Player::O);
        assert_eq!(
            MoveContract::pre(&state, &Position::TopLeft),
            Err(MoveError::InvalidMove)
        );
        assert_eq!(
            MoveContract::pre(&state, &Position::BottomLeft),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.place(Position::Center);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.place(Position::Center);
        after
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_recorded_move() {
        let before = GameState::new();
        assert!(MoveContract::post(&before, &before.clone()).is_err());
    }
}
