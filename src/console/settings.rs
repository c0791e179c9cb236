//! Console settings.

/// User-configurable behaviour of the console loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Whether `p` pauses the game. When off it is reported as invalid input.
    pub pause_enabled: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            pause_enabled: true,
        }
    }
}
