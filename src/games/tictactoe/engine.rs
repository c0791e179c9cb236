//! Thread-safe tic-tac-toe engine.
//!
//! [`GameEngine`] owns a single [`GameState`] behind a reader/writer lock.
//! Moves and resets take the write lock for their whole critical section,
//! so the legality check, the mark, the win/draw evaluation and the player
//! toggle are observed as one unit. Queries take the read lock and never
//! see a partially applied move.

use super::action::MoveError;
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, GameState, GameStatus, Player, Position};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: RwLock<GameState>,
}

impl GameEngine {
    /// Creates an engine with a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Initialized new tic-tac-toe game");
        Self::default()
    }

    /// Creates an engine that continues from an existing state.
    #[instrument]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    // The state is only replaced wholesale after validation, so a panic in
    // another holder cannot leave it half-written.
    fn read(&self) -> RwLockReadGuard<'_, GameState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success returns the status after the move: still in progress with
    /// the turn passed to the opponent, won by the mover, or drawn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidMove`] if the game is already over.
    /// - [`MoveError::CellOccupied`] if the square holds a mark.
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, pos: Position) -> Result<GameStatus, MoveError> {
        let mut state = self.write();

        MoveContract::pre(&*state, &pos).inspect_err(|e| {
            warn!(error = %e, position = pos.to_index(), "Rejected move");
        })?;

        let mut next = state.clone();
        let status = next.place(pos);

        #[cfg(debug_assertions)]
        MoveContract::post(&*state, &next)?;

        *state = next;
        Ok(status)
    }

    /// Like [`attempt_move`](Self::attempt_move), for a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for indices past 8, checked before the
    /// state is touched; otherwise as [`attempt_move`](Self::attempt_move).
    #[instrument(skip(self))]
    pub fn attempt_move_index(&self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected out-of-range position");
            MoveError::OutOfRange(index)
        })?;
        self.attempt_move(pos)
    }

    /// Returns true iff a row, column or diagonal holds three equal marks.
    #[instrument(skip(self))]
    pub fn check_winner(&self) -> bool {
        rules::check_winner(self.read().board()).is_some()
    }

    /// Returns the player owning a complete line, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        self.read().status().winner()
    }

    /// Restores the empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        *self.write() = GameState::new();
        info!("Game has been reset");
    }

    /// Returns a copy of the whole state, taken atomically.
    pub fn snapshot(&self) -> GameState {
        self.read().clone()
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        *self.read().board()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.read().current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.read().status()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.read().is_over()
    }

    /// Returns the empty squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.read().board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_fresh_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.board(), Board::new());
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.is_over());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let engine = GameEngine::new();
        engine.attempt_move(Position::Center).unwrap();
        let before = engine.snapshot();

        assert_eq!(
            engine.attempt_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_out_of_range_index() {
        let engine = GameEngine::new();
        assert_eq!(engine.attempt_move_index(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine.snapshot(), GameState::new());
        assert_eq!(engine.attempt_move_index(8), Ok(GameStatus::InProgress));
        assert_eq!(
            engine.board().get(Position::BottomRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_reset_clears_history() {
        let engine = GameEngine::new();
        engine.attempt_move(Position::TopLeft).unwrap();
        engine.reset();
        assert!(engine.snapshot().history().is_empty());
        assert_eq!(engine.snapshot(), GameState::new());
    }
}
