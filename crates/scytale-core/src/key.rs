//! Key validation and the normalized key forms each cipher consumes.
//!
//! Every key type parses from the raw string a caller supplies via
//! [`FromStr`]; [`KeyValidator`] picks the parser for a [`CipherKind`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::error::InvalidKey;
use crate::registry::CipherKind;

/// Caesar shift, stored reduced modulo the alphabet length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    pub fn new(shift: u64) -> Self {
        Self {
            shift: (shift % Alphabet::LATIN.len() as u64) as u8,
        }
    }

    pub fn shift(&self) -> usize {
        self.shift as usize
    }
}

impl FromStr for CaesarKey {
    type Err = InvalidKey;

    /// Accepts a non-empty run of ASCII digits of any length.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(InvalidKey::NotNumeric);
        }
        let modulus = Alphabet::LATIN.len() as u32;
        let mut shift = 0u32;
        for c in raw.chars() {
            let digit = c.to_digit(10).ok_or(InvalidKey::NotNumeric)?;
            shift = (shift * 10 + digit) % modulus;
        }
        Ok(Self {
            shift: shift as u8,
        })
    }
}

/// Column permutation derived from the stable rank of each key character.
///
/// Characters sort by class first (space, uppercase, lowercase, digits, then
/// everything else) and by code point within a class, so `"Ray"` visits `R`
/// before `a`. `ranks[column]` is the rank of that column's key character;
/// `order[rank]` is the column visited at that rank. Equal characters rank
/// left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnarKey {
    ranks: Vec<usize>,
    order: Vec<usize>,
}

impl ColumnarKey {
    /// Number of grid columns.
    pub fn columns(&self) -> usize {
        self.order.len()
    }

    /// Columns in reading order, e.g. `"mark"` gives `[1, 3, 0, 2]`.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Rank of each column, e.g. `"mark"` gives `[2, 0, 3, 1]`.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }
}

impl FromStr for ColumnarKey {
    type Err = InvalidKey;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = raw.chars().collect();
        let distinct = chars.first().is_some_and(|first| chars.iter().any(|c| c != first));
        if chars.len() < 2 || !distinct {
            return Err(InvalidKey::InsufficientUniqueChars);
        }

        let mut order: Vec<usize> = (0..chars.len()).collect();
        // sort_by_key is stable, so ties keep their left-to-right order
        order.sort_by_key(|&column| sort_key(chars[column]));

        let mut ranks = vec![0; order.len()];
        for (rank, &column) in order.iter().enumerate() {
            ranks[column] = rank;
        }

        Ok(Self { ranks, order })
    }
}

fn sort_key(c: char) -> (u8, char) {
    let class = match c {
        ' ' => 0,
        'A'..='Z' => 1,
        'a'..='z' => 2,
        '0'..='9' => 3,
        _ if c.is_ascii() => 4,
        _ => 5,
    };
    (class, c)
}

/// Running key: the letters of the raw key, lowercased, repeated as needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VigenereKey {
    letters: String,
}

impl VigenereKey {
    /// The normalized key letters.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Alphabet positions of the key, cycled without end.
    pub fn stream(&self) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .chars()
            .filter_map(|c| Alphabet::LATIN.index_of(c))
            .cycle()
    }
}

impl FromStr for VigenereKey {
    type Err = InvalidKey;

    /// Non-letters are dropped; at least one letter must remain.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let letters: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if letters.is_empty() {
            return Err(InvalidKey::NoAlphaChar);
        }
        Ok(Self { letters })
    }
}

/// A validated key for one of the supported ciphers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method")]
pub enum ParsedKey {
    #[serde(rename = "ceasar_cipher")]
    Caesar(CaesarKey),
    #[serde(rename = "columnar_transposition_cipher")]
    Columnar(ColumnarKey),
    #[serde(rename = "vigenere_cipher")]
    Vigenere(VigenereKey),
}

impl ParsedKey {
    pub fn kind(&self) -> CipherKind {
        match self {
            ParsedKey::Caesar(_) => CipherKind::Caesar,
            ParsedKey::Columnar(_) => CipherKind::Columnar,
            ParsedKey::Vigenere(_) => CipherKind::Vigenere,
        }
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedKey::Caesar(key) => write!(f, "shift {}", key.shift()),
            ParsedKey::Columnar(key) => write!(f, "column order {:?}", key.order()),
            ParsedKey::Vigenere(key) => write!(f, "running key {}", key.as_str()),
        }
    }
}

/// Per-cipher key predicate and parser.
pub struct KeyValidator;

impl KeyValidator {
    /// Parse `raw` with the rules of `kind`.
    pub fn validate(kind: CipherKind, raw: &str) -> Result<ParsedKey, InvalidKey> {
        match kind {
            CipherKind::Caesar => raw.parse().map(ParsedKey::Caesar),
            CipherKind::Columnar => raw.parse().map(ParsedKey::Columnar),
            CipherKind::Vigenere => raw.parse().map(ParsedKey::Vigenere),
        }
    }

    pub fn is_valid(kind: CipherKind, raw: &str) -> bool {
        Self::validate(kind, raw).is_ok()
    }
}
