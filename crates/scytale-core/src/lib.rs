//! # Scytale Core
//!
//! Core library for Scytale - textbook substitution and transposition ciphers
//! behind one encrypt/decrypt interface.
//!
//! This crate provides the cipher engine (alphabet model, key validation and
//! the transforms themselves) independent of any CLI or transport layer.
//!
//! ## Architecture
//!
//! - **alphabet**: The fixed a-z coordinate space shared by every cipher
//! - **key**: Per-cipher key validation and normalized key forms
//! - **cipher**: The `Cipher` trait and the Caesar, Columnar and Vigenère transforms
//! - **registry**: Method identifiers, dispatch and the request entry point
//! - **types**: Request/response data contract
//!
//! ## Example
//!
//! ```
//! use scytale_core::CipherRegistry;
//!
//! let registry = CipherRegistry::new();
//! let text = registry.encrypt("ceasar_cipher", "hello", "3").unwrap();
//! assert_eq!(text, "khoor");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod key;
pub mod registry;
pub mod types;

pub use alphabet::Alphabet;
pub use cipher::{Caesar, Cipher, ColumnarTransposition, Vigenere};
pub use error::{InvalidKey, Result, ScytaleError};
pub use key::{CaesarKey, ColumnarKey, KeyValidator, ParsedKey, VigenereKey};
pub use registry::{CipherKind, CipherRegistry};
pub use types::{CipherRequest, CipherResponse, Direction, RequestPayload};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
