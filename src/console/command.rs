//! Parsing of console input lines into commands.

use crate::games::tictactoe::Position;
use std::str::FromStr;

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Move(Position),
    /// Wait for the user before continuing.
    Pause,
    /// Abandon the current game and start a fresh one.
    NewGame,
    /// Leave the console loop.
    Quit,
}

/// Input the console could not act on.
///
/// Never fatal: the loop reports it and prompts again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// A number that does not name a square, kept as typed since it may not
    /// fit any integer type.
    #[display("Invalid position: {} (must be 0-8)", _0)]
    OutOfRange(String),
    /// Neither a number nor a known command letter.
    #[display("Invalid input: '{}'", _0)]
    Unrecognized(String),
    /// The pause command was entered with pausing turned off.
    #[display("Pausing is disabled")]
    PauseDisabled,
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "p" => return Ok(Command::Pause),
            "n" => return Ok(Command::NewGame),
            "q" => return Ok(Command::Quit),
            _ => {}
        }

        let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::Unrecognized(input.to_string()));
        }

        input
            .parse::<usize>()
            .ok()
            .and_then(Position::from_index)
            .map(Command::Move)
            .ok_or_else(|| CommandError::OutOfRange(input.to_string()))
    }
}
