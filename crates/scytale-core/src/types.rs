//! Request and response data contract.
//!
//! `RequestPayload` and `CipherResponse` mirror the JSON shapes exchanged
//! with web clients (`{userInput, key, encryptFlag}` in, `{text}` out);
//! `CipherRequest` is the typed form the registry consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScytaleError};
use crate::registry::CipherKind;

/// Which way to run a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ScytaleError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            other => Err(ScytaleError::MalformedRequest(unknown_direction(other))),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse().map_err(|_| unknown_direction(value.trim()))
    }
}

fn unknown_direction(value: &str) -> String {
    format!("unknown direction \"{}\" (expected encrypt or decrypt)", value)
}

/// Wire shape of an incoming request; the method travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Text to transform
    #[serde(rename = "userInput")]
    pub user_input: String,

    /// Raw key as typed by the user
    pub key: String,

    /// Direction as the literal string "encrypt" or "decrypt"
    #[serde(rename = "encryptFlag")]
    pub encrypt_flag: Direction,
}

impl RequestPayload {
    /// Decode a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Attach the method to form a complete request.
    pub fn into_request(self, method: CipherKind) -> CipherRequest {
        CipherRequest {
            method,
            text: self.user_input,
            key: self.key,
            direction: self.encrypt_flag,
        }
    }
}

/// A complete, typed cipher request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    /// Cipher to run
    pub method: CipherKind,

    /// Input text
    pub text: String,

    /// Raw (unvalidated) key
    pub key: String,

    /// Encrypt or decrypt
    pub direction: Direction,
}

impl CipherRequest {
    pub fn new(
        method: CipherKind,
        direction: Direction,
        text: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            method,
            text: text.into(),
            key: key.into(),
            direction,
        }
    }
}

/// Result of a successful request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResponse {
    /// Transformed text
    pub text: String,
}

impl CipherResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_client_json() {
        let body = r#"{"userInput":"hello","key":"3","encryptFlag":"encrypt"}"#;
        let payload = RequestPayload::from_json(body).unwrap();
        assert_eq!(payload.user_input, "hello");
        assert_eq!(payload.key, "3");
        assert_eq!(payload.encrypt_flag, Direction::Encrypt);

        let request = payload.into_request(CipherKind::Caesar);
        assert_eq!(
            request,
            CipherRequest::new(CipherKind::Caesar, Direction::Encrypt, "hello", "3")
        );
    }

    #[test]
    fn test_payload_rejects_boolean_flag() {
        let body = r#"{"userInput":"hello","key":"3","encryptFlag":true}"#;
        let err = RequestPayload::from_json(body).unwrap_err();
        assert_eq!(err.code(), "malformed_request");
    }

    #[test]
    fn test_payload_rejects_missing_field() {
        let body = r#"{"userInput":"hello","encryptFlag":"decrypt"}"#;
        assert!(matches!(
            RequestPayload::from_json(body),
            Err(ScytaleError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_payload_direction_parses_like_from_str() {
        let body = r#"{"userInput":"khoor","key":"3","encryptFlag":" Decrypt "}"#;
        let payload = RequestPayload::from_json(body).unwrap();
        assert_eq!(payload.encrypt_flag, " decrypt".parse::<Direction>().unwrap());

        let body = r#"{"userInput":"khoor","key":"3","encryptFlag":"sideways"}"#;
        let err = RequestPayload::from_json(body).unwrap_err();
        assert!(err.to_string().contains("unknown direction \"sideways\""), "{err}");
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Encrypt).unwrap(), "\"encrypt\"");
    }

    #[test]
    fn test_response_json_shape() {
        let response = CipherResponse {
            text: "khoor".to_string(),
        };
        assert_eq!(response.to_json().unwrap(), r#"{"text":"khoor"}"#);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(" Decrypt ".parse::<Direction>().unwrap(), Direction::Decrypt);
        assert_eq!("encrypt".parse::<Direction>().unwrap(), Direction::Encrypt);
        assert!("both".parse::<Direction>().is_err());
    }

    #[test]
    fn test_request_serializes_canonical_method() {
        let request =
            CipherRequest::new(CipherKind::Columnar, Direction::Decrypt, "eohllq", "ray");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "columnar_transposition_cipher");
        assert_eq!(json["direction"], "decrypt");
    }
}
