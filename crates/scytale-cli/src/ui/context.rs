//! Terminal detection for output decisions.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// What the current stdout can display.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// ANSI styling allowed
    pub color: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Inspect stdout, `TERM` and `NO_COLOR` together with the global flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        let mode = OutputMode::resolve(json_flag, is_tty, term_is_dumb);
        Self {
            color: mode.is_pretty() && !no_color_flag && !no_color_env,
            mode,
        }
    }

    /// Fixed context, for tests.
    #[cfg(test)]
    pub fn new(mode: OutputMode, color: bool) -> Self {
        Self { color, mode }
    }
}
