//! The fixed a-z alphabet shared by every cipher.
//!
//! Positions are the coordinate space the transforms work in: `a` is 0 and
//! `z` is 25. Case is not part of the alphabet; a [`Letter`] remembers it so
//! ciphers can re-apply it after shifting.

use crate::error::{Result, ScytaleError};

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Ordered set of the 26 lowercase Latin letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8; 26],
}

impl Alphabet {
    /// The Latin alphabet, `a` through `z`.
    pub const LATIN: Alphabet = Alphabet { symbols: LOWERCASE };

    /// Number of symbols (always 26).
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true; the alphabet always has 26 symbols.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Position of a lowercase letter, or `None` for anything else.
    pub fn index_of(&self, c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        self.symbols.iter().position(|&s| s == c as u8)
    }

    /// Letter at `position`, wrapping in both directions.
    pub fn char_at(&self, position: i64) -> char {
        let wrapped = position.rem_euclid(self.len() as i64) as usize;
        self.symbols[wrapped] as char
    }

    /// Case-aware lookup: `'H'` and `'h'` both resolve to position 7.
    pub fn letter(&self, c: char) -> Option<Letter> {
        let index = self.index_of(c.to_ascii_lowercase())?;
        Some(Letter {
            index: index as u8,
            upper: c.is_ascii_uppercase(),
        })
    }

    /// Decompose `text` into letters, rejecting anything outside the alphabet.
    ///
    /// The first offending character is reported with its char index.
    pub fn letters(&self, text: &str) -> Result<Vec<Letter>> {
        text.chars()
            .enumerate()
            .map(|(index, character)| {
                self.letter(character)
                    .ok_or(ScytaleError::UnsupportedCharacter { character, index })
            })
            .collect()
    }

    /// Iterate over the alphabet in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&s| s as char)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}

/// A letter of the text: its alphabet position plus original case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    index: u8,
    upper: bool,
}

impl Letter {
    /// Alphabet position (0..26).
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Whether the source character was uppercase.
    pub fn is_upper(&self) -> bool {
        self.upper
    }

    /// The letter moved `offset` places along the alphabet, original case kept.
    pub fn shifted(&self, offset: i64) -> char {
        let c = Alphabet::LATIN.char_at(self.index as i64 + offset);
        if self.upper {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// The letter as written in the source text.
    pub fn to_char(&self) -> char {
        self.shifted(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_char_are_inverse() {
        let alphabet = Alphabet::LATIN;
        for (position, c) in alphabet.symbols().enumerate() {
            assert_eq!(alphabet.index_of(c), Some(position));
            assert_eq!(alphabet.char_at(position as i64), c);
        }
        assert_eq!(alphabet.len(), 26);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_char_at_wraps_negative_and_large() {
        let alphabet = Alphabet::LATIN;
        assert_eq!(alphabet.char_at(26), 'a');
        assert_eq!(alphabet.char_at(27), 'b');
        assert_eq!(alphabet.char_at(-1), 'z');
        assert_eq!(alphabet.char_at(-27), 'z');
    }

    #[test]
    fn test_index_of_rejects_non_letters() {
        let alphabet = Alphabet::LATIN;
        assert_eq!(alphabet.index_of('A'), None);
        assert_eq!(alphabet.index_of(' '), None);
        assert_eq!(alphabet.index_of('é'), None);
    }

    #[test]
    fn test_letter_keeps_case() {
        let letter = Alphabet::LATIN.letter('Y').unwrap();
        assert_eq!(letter.index(), 24);
        assert!(letter.is_upper());
        assert_eq!(letter.shifted(3), 'B');
        assert_eq!(letter.to_char(), 'Y');
    }

    #[test]
    fn test_letters_reports_first_unsupported_character() {
        let err = Alphabet::LATIN.letters("ab c1").unwrap_err();
        assert_eq!(
            err,
            ScytaleError::UnsupportedCharacter {
                character: ' ',
                index: 2
            }
        );
    }

    #[test]
    fn test_letters_empty_text() {
        assert!(Alphabet::LATIN.letters("").unwrap().is_empty());
    }
}
