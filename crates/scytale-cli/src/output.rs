//! JSON output shapes for the CLI.

use scytale_core::{CipherKind, CipherResponse, ParsedKey, ScytaleError};

/// Successful transform, in the `{text}` response shape.
pub fn response_json(response: &CipherResponse) -> serde_json::Value {
    serde_json::json!({ "text": response.text })
}

/// Engine error as a JSON object with a stable code.
pub fn error_json(err: &ScytaleError) -> serde_json::Value {
    error_object(err.code(), &err.to_string())
}

/// Any failure in the `{"error": {code, message}}` shape.
pub fn error_object(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
        }
    })
}

/// Validated key with its normalized form.
pub fn key_json(key: &ParsedKey) -> serde_json::Value {
    serde_json::json!({
        "valid": true,
        "summary": key.to_string(),
        "key": key,
    })
}

/// One row of the method listing.
pub fn method_json(kind: CipherKind) -> serde_json::Value {
    serde_json::json!({
        "method": kind.identifier(),
        "name": kind.name(),
        "key": kind.key_rule(),
    })
}
