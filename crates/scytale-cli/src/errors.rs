//! CLI error types for structured error handling.
//!
//! Engine errors are typed values; this module turns them into the
//! user-facing message, hint and exit code.

use std::fmt;

use scytale_core::{CipherKind, InvalidKey, ScytaleError};

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Cipher method not recognized
    NotFound { message: String, hint: String },

    /// Key rejected by the cipher's validator
    InvalidKey { message: String, hint: String },

    /// Text or request the cipher cannot process
    InvalidInput(String),

    /// Config file present but unusable
    InvalidConfig(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::InvalidKey { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) | CliError::InvalidConfig(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidKey { .. } => exit_codes::INVALID_KEY,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::InvalidConfig(_) => exit_codes::INVALID_CONFIG,
        }
    }

    /// Stable machine-readable code, matching the engine's style.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::NotFound { .. } => "not_found",
            CliError::InvalidKey { .. } => "invalid_key",
            CliError::InvalidInput(_) => "invalid_input",
            CliError::InvalidConfig(_) => "invalid_config",
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<&ScytaleError> for CliError {
    fn from(err: &ScytaleError) -> Self {
        match err {
            ScytaleError::UnknownMethod(method) => CliError::NotFound {
                message: format!("Unknown cipher method \"{}\"", method),
                hint: format!(
                    "Hint: Use one of {}. Run `scytale methods` for details.",
                    method_list()
                ),
            },
            ScytaleError::InvalidKey(reason) => CliError::InvalidKey {
                message: format!("Invalid key: {}", reason),
                hint: key_hint(*reason).to_string(),
            },
            ScytaleError::UnsupportedCharacter { character, index } => {
                CliError::InvalidInput(format!(
                    "Text contains {:?} at position {}; only letters a-z and A-Z are supported",
                    character, index
                ))
            }
            ScytaleError::InvalidPad(_) => CliError::InvalidConfig(format!(
                "{}\nHint: Set [columnar] pad to a single letter.",
                err
            )),
            ScytaleError::CiphertextLength { .. } | ScytaleError::MalformedRequest(_) => {
                CliError::InvalidInput(err.to_string())
            }
        }
    }
}

fn method_list() -> String {
    CipherKind::ALL
        .iter()
        .map(|kind| kind.identifier())
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_hint(reason: InvalidKey) -> &'static str {
    match reason {
        InvalidKey::NotNumeric => "Hint: The Caesar key must be a non-negative integer, e.g. 3.",
        InvalidKey::InsufficientUniqueChars => {
            "Hint: The Columnar key needs at least two different characters, e.g. ray."
        }
        InvalidKey::NoAlphaChar => "Hint: The Vigenère key needs at least one letter, e.g. cab.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_exit_codes_by_error_kind() {
        let cases = [
            (
                ScytaleError::UnknownMethod("rot13".to_string()),
                exit_codes::NOT_FOUND,
            ),
            (
                ScytaleError::InvalidKey(InvalidKey::NotNumeric),
                exit_codes::INVALID_KEY,
            ),
            (
                ScytaleError::UnsupportedCharacter {
                    character: ' ',
                    index: 1,
                },
                exit_codes::INVALID_INPUT,
            ),
            (
                ScytaleError::CiphertextLength {
                    length: 4,
                    columns: 3,
                },
                exit_codes::INVALID_INPUT,
            ),
            (ScytaleError::InvalidPad('1'), exit_codes::INVALID_CONFIG),
        ];
        for (err, code) in cases {
            assert_eq!(CliError::from(&err).exit_code(), code, "{err}");
        }
    }

    #[test]
    fn test_unknown_method_lists_identifiers() {
        let err = CliError::from(&ScytaleError::UnknownMethod("rot13".to_string()));
        let message = err.to_string();
        assert!(message.contains("rot13"));
        assert!(message.contains("ceasar_cipher"));
        assert!(message.contains("vigenere_cipher"));
    }

    #[test]
    fn test_invalid_key_message() {
        let err = CliError::from(&ScytaleError::InvalidKey(InvalidKey::InsufficientUniqueChars));
        assert!(err
            .to_string()
            .starts_with("Invalid key: key must contain at least two distinct characters"));
    }

    #[test]
    fn test_codes_by_error_kind() {
        assert_eq!(CliError::InvalidInput("x".to_string()).code(), "invalid_input");
        assert_eq!(CliError::InvalidConfig("x".to_string()).code(), "invalid_config");
        let err = CliError::from(&ScytaleError::UnknownMethod("rot13".to_string()));
        assert_eq!(err.code(), "not_found");
    }
}
