//! Vigenère cipher with a running key.
//!
//! The key is repeated until it covers the text; each text letter is added
//! to its key letter modulo 26. The classic square (row = key letter,
//! column = text letter) is the addition table, exposed by [`square`] for
//! display.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::key::VigenereKey;
use crate::registry::CipherKind;

use super::traits::Cipher;

/// Polyalphabetic substitution driven by a repeating key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

impl Vigenere {
    fn transform(text: &str, key: &VigenereKey, sign: i64) -> Result<String> {
        let letters = Alphabet::LATIN.letters(text)?;
        Ok(letters
            .iter()
            .zip(key.stream())
            .map(|(letter, k)| letter.shifted(sign * k as i64))
            .collect())
    }
}

impl Cipher for Vigenere {
    type Key = VigenereKey;

    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }

    fn encrypt(&self, text: &str, key: &VigenereKey) -> Result<String> {
        Self::transform(text, key, 1)
    }

    fn decrypt(&self, text: &str, key: &VigenereKey) -> Result<String> {
        Self::transform(text, key, -1)
    }
}

/// The 26-row Vigenère square; row `n` is the alphabet rotated left by `n`.
pub fn square() -> Vec<String> {
    let alphabet = Alphabet::LATIN;
    (0..alphabet.len() as i64)
        .map(|row| {
            (0..alphabet.len() as i64)
                .map(|col| alphabet.char_at(row + col))
                .collect()
        })
        .collect()
}
