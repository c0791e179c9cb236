//! Console front end: command parsing, rendering and the interactive loop.

mod command;
mod error;
mod session;
mod settings;

pub use command::{Command, CommandError};
pub use error::ConsoleError;
pub use session::{Console, SessionSummary};
pub use settings::ConsoleSettings;
