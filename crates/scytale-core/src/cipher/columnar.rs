//! Columnar transposition cipher.
//!
//! The text is written row by row into a grid with one column per key
//! character, the last row filled out with a pad letter. Ciphertext is the
//! grid read column by column, columns visited in key rank order.
//!
//! Padding is not self-describing: decryption strips trailing pad letters
//! from the last row, so a plaintext that really ends in the pad letter
//! loses it.

use crate::alphabet::Alphabet;
use crate::error::{Result, ScytaleError};
use crate::key::ColumnarKey;
use crate::registry::CipherKind;

use super::traits::Cipher;

/// Pad letter used when none is configured.
pub const DEFAULT_PAD: char = 'q';

/// Transposition over a key-ranked column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnarTransposition {
    pad: char,
}

impl ColumnarTransposition {
    pub fn new() -> Self {
        Self { pad: DEFAULT_PAD }
    }

    /// Use `pad` to fill the last row. Must be an ASCII letter; stored lowercase.
    pub fn with_pad(pad: char) -> Result<Self> {
        if !pad.is_ascii_alphabetic() {
            return Err(ScytaleError::InvalidPad(pad));
        }
        Ok(Self {
            pad: pad.to_ascii_lowercase(),
        })
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    fn validated(text: &str) -> Result<Vec<char>> {
        Alphabet::LATIN.letters(text)?;
        Ok(text.chars().collect())
    }
}

impl Default for ColumnarTransposition {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for ColumnarTransposition {
    type Key = ColumnarKey;

    fn kind(&self) -> CipherKind {
        CipherKind::Columnar
    }

    fn encrypt(&self, text: &str, key: &ColumnarKey) -> Result<String> {
        let mut cells = Self::validated(text)?;
        if cells.is_empty() {
            return Ok(String::new());
        }

        let columns = key.columns();
        let rows = cells.len().div_ceil(columns);
        cells.resize(rows * columns, self.pad);

        let mut out = String::with_capacity(cells.len());
        for &column in key.order() {
            for row in 0..rows {
                out.push(cells[row * columns + column]);
            }
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str, key: &ColumnarKey) -> Result<String> {
        let chars = Self::validated(text)?;
        let columns = key.columns();
        if chars.len() % columns != 0 {
            return Err(ScytaleError::CiphertextLength {
                length: chars.len(),
                columns,
            });
        }

        let rows = chars.len() / columns;
        let mut cells = vec![self.pad; chars.len()];
        let positions = key
            .order()
            .iter()
            .flat_map(|&column| (0..rows).map(move |row| row * columns + column));
        for (position, &c) in positions.zip(&chars) {
            cells[position] = c;
        }

        // at most columns - 1 cells of the last row can be padding
        let padded = cells
            .iter()
            .rev()
            .take(columns - 1)
            .take_while(|&&c| c == self.pad)
            .count();
        cells.truncate(cells.len() - padded);

        Ok(cells.into_iter().collect())
    }
}
