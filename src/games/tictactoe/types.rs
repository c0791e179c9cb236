//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::position::Position;
use super::rules;
use derive_more::Display;
use std::str::FromStr;
use tracing::{info, instrument};

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character shown for this square when the board is rendered.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, index 0 top-left. The array
/// length fixes the board at nine squares; positions outside it cannot be
/// expressed because every access goes through [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "--+---+--")?;
            }
            writeln!(
                f,
                "{} | {} | {}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    Length(usize),
    /// A character that is not a mark or an empty marker.
    #[display("Invalid square character {:?}", _0)]
    Symbol(char),
}

impl std::error::Error for BoardParseError {}

/// Parses nine characters in row-major order: `X`, `O`, and `.` or `_`
/// for empty squares. Whitespace and `|` separators are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::Symbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardParseError::Length(len))?;
        Ok(Self::from_squares(squares))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Board the game started from (empty unless resumed).
    origin: Board,
    /// Player to move on the starting board.
    first_to_move: Player,
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves played since the game started or was resumed.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            origin: Board::new(),
            first_to_move: Player::X,
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Resumes a game from a preset board.
    ///
    /// The status is derived from the board: a completed line is a win for
    /// its owner, a full board without one is a draw.
    #[instrument]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let status = if let Some(winner) = rules::check_winner(&board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        info!(?status, %to_move, "Resumed game from preset board");
        Self {
            origin: board,
            first_to_move: to_move,
            board,
            current_player: to_move,
            status,
            history: Vec::new(),
        }
    }

    /// Returns the board the game started from.
    pub fn origin(&self) -> &Board {
        &self.origin
    }

    /// Returns the player who was to move on the starting board.
    pub fn first_to_move(&self) -> Player {
        self.first_to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark and advances the game.
    ///
    /// Callers must have checked [`MoveContract`](super::contracts::MoveContract)
    /// preconditions: the game is in progress and the square is empty.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub(crate) fn place(&mut self, pos: Position) -> GameStatus {
        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        info!(%player, position = pos.to_index(), "Player made a move");

        if rules::check_winner(&self.board).is_some() {
            self.status = GameStatus::Won(player);
            info!(%player, "Player wins");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("The game is a draw");
        } else {
            self.current_player = player.opponent();
            info!(player = %self.current_player, "Switched player");
        }

        self.status
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
