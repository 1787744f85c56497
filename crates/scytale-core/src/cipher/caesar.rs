//! Caesar shift cipher.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::key::CaesarKey;
use crate::registry::CipherKind;

use super::traits::Cipher;

/// Shifts every letter a fixed number of places along the alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caesar;

impl Caesar {
    fn transform(text: &str, offset: i64) -> Result<String> {
        let letters = Alphabet::LATIN.letters(text)?;
        Ok(letters.iter().map(|letter| letter.shifted(offset)).collect())
    }
}

impl Cipher for Caesar {
    type Key = CaesarKey;

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, text: &str, key: &CaesarKey) -> Result<String> {
        Self::transform(text, key.shift() as i64)
    }

    fn decrypt(&self, text: &str, key: &CaesarKey) -> Result<String> {
        Self::transform(text, -(key.shift() as i64))
    }
}
