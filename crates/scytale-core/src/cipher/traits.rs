//! Cipher trait definition.
//!
//! The `Cipher` trait is the uniform encrypt/decrypt interface the registry
//! dispatches to. Keys arrive already validated, so a transform can only fail
//! on the text it is given.

use crate::error::Result;
use crate::registry::CipherKind;

/// Uniform interface over the textbook ciphers.
///
/// All implementations must ensure:
/// - The whole text is validated before any output is produced
/// - Identical inputs always produce identical output
/// - No state is kept between calls
pub trait Cipher: Send + Sync {
    /// Parsed key type this cipher consumes.
    type Key;

    /// Which cipher this is.
    fn kind(&self) -> CipherKind;

    /// Encrypt `text` with `key`.
    ///
    /// # Errors
    ///
    /// Returns `ScytaleError::UnsupportedCharacter` if the text contains a
    /// character outside the alphabet.
    fn encrypt(&self, text: &str, key: &Self::Key) -> Result<String>;

    /// Decrypt `text` with `key`.
    ///
    /// # Errors
    ///
    /// Returns `ScytaleError::UnsupportedCharacter` if the text contains a
    /// character outside the alphabet. Implementations may reject texts whose
    /// shape could not have come from `encrypt`.
    fn decrypt(&self, text: &str, key: &Self::Key) -> Result<String>;
}
