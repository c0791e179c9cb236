//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::GameState;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Consecutive moves in history belong to different players, the first
/// move belongs to whoever was to move on the starting board, and the player
/// to move follows the last mover: the opponent while in progress, the mover
/// itself once the game has ended.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let Some(last) = history.last() else {
            return true;
        };

        if history[0].player != state.first_to_move() {
            return false;
        }

        let expected = if state.is_over() {
            last.player
        } else {
            last.player.opponent()
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
