//! Method identifiers and request dispatch.
//!
//! `CipherRegistry` is the single entry point for callers: it resolves a
//! method, validates the key with that method's rules, and only then runs
//! the transform. A rejected key or text never produces partial output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cipher::{Caesar, Cipher, ColumnarTransposition, Vigenere};
use crate::error::{Result, ScytaleError};
use crate::key::{KeyValidator, ParsedKey};
use crate::types::{CipherRequest, CipherResponse, Direction, RequestPayload};

/// The closed set of supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CipherKind {
    #[serde(rename = "ceasar_cipher")]
    Caesar,
    #[serde(rename = "columnar_transposition_cipher")]
    Columnar,
    #[serde(rename = "vigenere_cipher")]
    Vigenere,
}

impl CipherKind {
    /// Every supported cipher, in display order.
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Caesar,
        CipherKind::Columnar,
        CipherKind::Vigenere,
    ];

    /// Canonical wire identifier (the Caesar spelling matches existing clients).
    pub fn identifier(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "ceasar_cipher",
            CipherKind::Columnar => "columnar_transposition_cipher",
            CipherKind::Vigenere => "vigenere_cipher",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar Cipher",
            CipherKind::Columnar => "Columnar Transposition Cipher",
            CipherKind::Vigenere => "Vigenère Cipher",
        }
    }

    /// What a valid key looks like, for help text.
    pub fn key_rule(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "a non-negative integer",
            CipherKind::Columnar => "a string with at least two distinct characters",
            CipherKind::Vigenere => "a string containing at least one letter",
        }
    }

    fn normalize(identifier: &str) -> String {
        identifier
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect()
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for CipherKind {
    type Err = ScytaleError;

    /// Accepts the wire identifiers plus a few short aliases, ignoring case,
    /// surrounding whitespace, and space/hyphen vs underscore.
    fn from_str(identifier: &str) -> Result<Self> {
        match Self::normalize(identifier).as_str() {
            "ceasar_cipher" | "caesar_cipher" | "ceasar" | "caesar" => Ok(CipherKind::Caesar),
            "columnar_transposition_cipher" | "columnar_transposition" | "columnar" => {
                Ok(CipherKind::Columnar)
            }
            "vigenere_cipher" | "vigenere" => Ok(CipherKind::Vigenere),
            _ => Err(ScytaleError::UnknownMethod(identifier.to_string())),
        }
    }
}

impl TryFrom<String> for CipherKind {
    type Error = ScytaleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Resolves methods to their validator and cipher and runs requests.
#[derive(Debug, Clone, Default)]
pub struct CipherRegistry {
    caesar: Caesar,
    columnar: ColumnarTransposition,
    vigenere: Vigenere,
}

impl CipherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose Columnar cipher pads with `pad` instead of `q`.
    pub fn with_columnar_pad(pad: char) -> Result<Self> {
        Ok(Self {
            columnar: ColumnarTransposition::with_pad(pad)?,
            ..Self::default()
        })
    }

    pub fn columnar_pad(&self) -> char {
        self.columnar.pad()
    }

    /// Encrypt `text` with the cipher named by `method`.
    pub fn encrypt(&self, method: &str, text: &str, raw_key: &str) -> Result<String> {
        self.dispatch(method.parse()?, Direction::Encrypt, text, raw_key)
    }

    /// Decrypt `text` with the cipher named by `method`.
    pub fn decrypt(&self, method: &str, text: &str, raw_key: &str) -> Result<String> {
        self.dispatch(method.parse()?, Direction::Decrypt, text, raw_key)
    }

    /// Validate `raw_key` for `kind`, then run the transform.
    ///
    /// # Errors
    ///
    /// - `ScytaleError::InvalidKey` if the key fails the cipher's rules
    /// - `ScytaleError::UnsupportedCharacter` if the text has a non-letter
    /// - `ScytaleError::CiphertextLength` for a malformed Columnar ciphertext
    pub fn dispatch(
        &self,
        kind: CipherKind,
        direction: Direction,
        text: &str,
        raw_key: &str,
    ) -> Result<String> {
        tracing::debug!(
            method = %kind,
            %direction,
            text_len = text.len(),
            "dispatching cipher request"
        );

        let result = KeyValidator::validate(kind, raw_key)
            .map_err(ScytaleError::from)
            .and_then(|key| match key {
                ParsedKey::Caesar(key) => run(&self.caesar, direction, text, &key),
                ParsedKey::Columnar(key) => run(&self.columnar, direction, text, &key),
                ParsedKey::Vigenere(key) => run(&self.vigenere, direction, text, &key),
            });

        if let Err(err) = &result {
            tracing::debug!(method = %kind, code = err.code(), "cipher request rejected");
        }
        result
    }

    /// Serve a typed request.
    pub fn handle(&self, request: &CipherRequest) -> Result<CipherResponse> {
        let text = self.dispatch(
            request.method,
            request.direction,
            &request.text,
            &request.key,
        )?;
        Ok(CipherResponse { text })
    }

    /// Serve a wire payload for the method named by `method`.
    pub fn handle_payload(&self, method: &str, payload: RequestPayload) -> Result<CipherResponse> {
        let kind: CipherKind = method.parse()?;
        self.handle(&payload.into_request(kind))
    }
}

fn run<C: Cipher>(cipher: &C, direction: Direction, text: &str, key: &C::Key) -> Result<String> {
    tracing::trace!(method = %cipher.kind(), %direction, "running transform");
    match direction {
        Direction::Encrypt => cipher.encrypt(text, key),
        Direction::Decrypt => cipher.decrypt(text, key),
    }
}
