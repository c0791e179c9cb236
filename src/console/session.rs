//! Interactive console loop driving a [`GameEngine`].

use super::command::{Command, CommandError};
use super::error::ConsoleError;
use super::settings::ConsoleSettings;
use crate::games::tictactoe::{GameEngine, GameStatus, Position};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Prompt suffix shown after the current player.
const PROMPT: &str = "enter your move (0-8) or command (p: pause, n: new, q: quit): ";

/// Totals reported when the console loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Moves accepted by the engine.
    pub moves_played: usize,
    /// Games that ended in a win or a draw.
    pub games_completed: usize,
}

/// Whether the loop keeps reading input.
enum Flow {
    Continue,
    Quit,
}

/// Text front end for a shared [`GameEngine`].
///
/// Generic over its input and output so the same loop runs on a terminal or
/// on in-memory buffers.
pub struct Console<R, W> {
    engine: Arc<GameEngine>,
    input: R,
    output: W,
    settings: ConsoleSettings,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given engine and streams.
    pub fn new(engine: Arc<GameEngine>, input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            engine,
            input,
            output,
            settings,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs until the quit command or end of input.
    ///
    /// Invalid input and rejected moves are reported on the output and never
    /// end the loop; only I/O failures do.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        info!("Console session started");
        loop {
            self.render()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed");
                writeln!(self.output)?;
                self.quit()?;
                break;
            };

            if let Flow::Quit = self.handle_line(&line)? {
                break;
            }
        }
        Ok(self.summary)
    }

    fn render(&mut self) -> Result<(), ConsoleError> {
        let state = self.engine.snapshot();
        write!(self.output, "{}", state.board())?;
        write!(self.output, "Player {}, {}", state.current_player(), PROMPT)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow, ConsoleError> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                warn!(error = %e, "Invalid input");
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    #[instrument(skip(self))]
    fn execute(&mut self, command: Command) -> Result<Flow, ConsoleError> {
        debug!(?command, "Parsed command");
        match command {
            Command::Move(pos) => self.play(pos)?,
            Command::Pause if self.settings.pause_enabled => self.pause()?,
            Command::Pause => {
                warn!("Pause requested while disabled");
                self.report(&CommandError::PauseDisabled)?;
            }
            Command::NewGame => {
                self.engine.reset();
                writeln!(self.output, "Starting a new game.")?;
            }
            Command::Quit => {
                self.quit()?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, pos: Position) -> Result<(), ConsoleError> {
        match self.engine.attempt_move(pos) {
            Ok(status) => {
                self.summary.moves_played += 1;
                match status {
                    GameStatus::Won(player) => {
                        self.summary.games_completed += 1;
                        writeln!(self.output, "Player {} wins!", player)?;
                    }
                    GameStatus::Draw => {
                        self.summary.games_completed += 1;
                        writeln!(self.output, "The game is a draw.")?;
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), ConsoleError> {
        info!("Game paused");
        write!(self.output, "Game paused. Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)?;
        info!("Game resumed");
        Ok(())
    }

    fn quit(&mut self) -> Result<(), ConsoleError> {
        info!("Game quit by user");
        writeln!(self.output, "Game quit. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, err: &dyn std::error::Error) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;
    use std::io::Cursor;

    fn run(input: &str, settings: ConsoleSettings) -> (SessionSummary, String, Board) {
        let mut console = Console::new(
            Arc::new(GameEngine::new()),
            Cursor::new(input.to_string()),
            Vec::new(),
            settings,
        );
        let summary = console.run().unwrap();
        let output = String::from_utf8(console.output().clone()).unwrap();
        (summary, output, console.engine().board())
    }

    #[test]
    fn test_pause_waits_for_a_line() {
        let (summary, output, board) = run("p\n\n4\nq\n", ConsoleSettings::default());
        assert!(output.contains("Game paused. Press Enter to continue..."));
        assert_eq!(summary.moves_played, 1);
        assert!(!board.is_empty(Position::Center));
    }

    #[test]
    fn test_pause_disabled_is_reported() {
        let settings = ConsoleSettings {
            pause_enabled: false,
        };
        let (_, output, _) = run("p\nq\n", settings);
        assert!(output.contains("Pausing is disabled"));
        assert!(!output.contains("Game paused"));
    }
}
