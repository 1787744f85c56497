//! Output mode selection.
//!
//! Cipher output must stay byte-exact when piped, so anything other than a
//! real terminal gets the bare transformed text.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `{text}` responses and `{error}` objects
    Json,
    /// Bare text, one result per line
    #[default]
    Plain,
    /// Labels, tables and emphasis for a terminal
    Pretty,
}

impl OutputMode {
    /// `--json` wins; otherwise pretty only on a capable terminal.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        match (json_flag, is_tty && !term_is_dumb) {
            (true, _) => Self::Json,
            (false, true) => Self::Pretty,
            (false, false) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}
