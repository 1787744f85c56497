//! Input helper functions for the CLI.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::errors::CliError;

/// Text from the argument, or stdin when it is piped.
///
/// A single trailing newline from `echo` or a heredoc is dropped.
pub fn read_text(text: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = text {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        return Err(CliError::InvalidInput(
            "No text provided. Pass TEXT or pipe it on stdin.".to_string(),
        )
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(strip_line_ending(&buffer).to_string())
}

/// Request body from a file, or from stdin.
pub fn read_request_body(input: Option<&str>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(Path::new(path)).map_err(|e| {
            CliError::InvalidInput(format!("Failed to read request {}: {}", path, e)).into()
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

fn strip_line_ending(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value)
}
