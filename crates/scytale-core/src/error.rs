//! Error types for Scytale core operations.
//!
//! Errors are typed values rather than messages; the CLI (or any other
//! caller) maps them to user-facing text and exit codes.

use thiserror::Error;

/// Result type alias for Scytale operations.
pub type Result<T> = std::result::Result<T, ScytaleError>;

/// Reasons a raw key string is rejected by its cipher's validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidKey {
    /// Caesar key is empty or contains a non-digit
    #[error("key must be a non-negative integer")]
    NotNumeric,

    /// Columnar key has fewer than two distinct characters
    #[error("key must contain at least two distinct characters")]
    InsufficientUniqueChars,

    /// Vigenère key has no alphabetic character
    #[error("key must contain at least one letter")]
    NoAlphaChar,
}

impl InvalidKey {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidKey::NotNumeric => "invalid_key.not_numeric",
            InvalidKey::InsufficientUniqueChars => "invalid_key.insufficient_unique_chars",
            InvalidKey::NoAlphaChar => "invalid_key.no_alpha_char",
        }
    }
}

/// Core error type for Scytale operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScytaleError {
    /// Key rejected by the cipher's validator
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] InvalidKey),

    /// Text contains a character outside the alphabet
    #[error("Unsupported character {character:?} at position {index}")]
    UnsupportedCharacter { character: char, index: usize },

    /// Method identifier not known to the registry
    #[error("Unknown cipher method: {0}")]
    UnknownMethod(String),

    /// Columnar ciphertext does not fill a whole grid
    #[error("Ciphertext length {length} is not a multiple of the key length {columns}")]
    CiphertextLength { length: usize, columns: usize },

    /// Columnar pad is not a letter
    #[error("Invalid pad character {0:?} (expected a single letter)")]
    InvalidPad(char),

    /// Request payload could not be decoded
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<serde_json::Error> for ScytaleError {
    fn from(err: serde_json::Error) -> Self {
        ScytaleError::MalformedRequest(err.to_string())
    }
}

impl ScytaleError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ScytaleError::InvalidKey(inner) => inner.code(),
            ScytaleError::UnsupportedCharacter { .. } => "unsupported_character",
            ScytaleError::UnknownMethod(_) => "unknown_method",
            ScytaleError::CiphertextLength { .. } => "ciphertext_length",
            ScytaleError::InvalidPad(_) => "invalid_pad",
            ScytaleError::MalformedRequest(_) => "malformed_request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = ScytaleError::from(InvalidKey::NotNumeric);
        assert_eq!(
            err.to_string(),
            "Invalid key: key must be a non-negative integer"
        );
    }

    #[test]
    fn test_display_unsupported_character() {
        let err = ScytaleError::UnsupportedCharacter {
            character: ' ',
            index: 5,
        };
        assert_eq!(err.to_string(), "Unsupported character ' ' at position 5");
    }

    #[test]
    fn test_display_ciphertext_length() {
        let err = ScytaleError::CiphertextLength {
            length: 7,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "Ciphertext length 7 is not a multiple of the key length 3"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ScytaleError::InvalidKey(InvalidKey::NotNumeric),
            ScytaleError::InvalidKey(InvalidKey::InsufficientUniqueChars),
            ScytaleError::InvalidKey(InvalidKey::NoAlphaChar),
            ScytaleError::UnsupportedCharacter {
                character: '1',
                index: 0,
            },
            ScytaleError::UnknownMethod("rot13".to_string()),
            ScytaleError::CiphertextLength {
                length: 1,
                columns: 2,
            },
            ScytaleError::InvalidPad('1'),
            ScytaleError::MalformedRequest("eof".to_string()),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
