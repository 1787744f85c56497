//! Config file handling.
//!
//! The config is optional TOML; a missing file means defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use scytale_core::cipher::DEFAULT_PAD;
use scytale_core::{CipherKind, CipherRegistry};

use crate::errors::CliError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScytaleConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub columnar: ColumnarSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Method used when `--method` is not given
    pub method: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnarSection {
    #[serde(default = "default_pad")]
    pub pad: char,
}

fn default_pad() -> char {
    DEFAULT_PAD
}

impl Default for ColumnarSection {
    fn default() -> Self {
        Self { pad: default_pad() }
    }
}

impl ScytaleConfig {
    /// Build a registry honoring the configured pad.
    pub fn registry(&self) -> scytale_core::Result<CipherRegistry> {
        CipherRegistry::with_columnar_pad(self.columnar.pad)
    }

    /// Resolve the method from a flag, falling back to `[defaults] method`.
    pub fn method(&self, flag: Option<&str>) -> anyhow::Result<CipherKind> {
        let identifier = flag.or(self.defaults.method.as_deref()).ok_or_else(|| {
            CliError::InvalidInput(
                "No cipher method given. Pass --method or set [defaults] method in the config."
                    .to_string(),
            )
        })?;
        Ok(identifier.parse()?)
    }
}

/// `$XDG_CONFIG_HOME/scytale/config.toml`, else `~/.config/scytale/config.toml`.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .ok_or_else(|| anyhow::anyhow!("Neither XDG_CONFIG_HOME nor HOME is set"))?,
    };
    Ok(base.join("scytale").join("config.toml"))
}

/// Config path from `--config` / `SCYTALE_CONFIG`, else the XDG default.
pub fn resolve_config_path(flag: Option<&str>) -> anyhow::Result<PathBuf> {
    match flag.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

/// Read the config at `path`, or defaults if there is no file.
pub fn load_config(path: &Path) -> anyhow::Result<ScytaleConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ScytaleConfig::default());
    }
    tracing::debug!(path = %path.display(), "loading config");
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
}

/// Write `config` to `path`, creating parent directories.
pub fn write_config(path: &Path, config: &ScytaleConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", dir.display()))?;
    }
    std::fs::write(path, to_toml(config)?)
        .with_context(|| format!("Cannot write config {}", path.display()))
}

pub fn to_toml(config: &ScytaleConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("absent.toml")).expect("load should succeed");
        assert_eq!(config.columnar.pad, 'q');
        assert!(config.defaults.method.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let config = ScytaleConfig {
            defaults: DefaultsSection {
                method: Some("vigenere_cipher".to_string()),
            },
            columnar: ColumnarSection { pad: 'x' },
        };
        write_config(&path, &config).expect("write should succeed");

        let loaded = load_config(&path).expect("read should succeed");
        assert_eq!(loaded.defaults.method.as_deref(), Some("vigenere_cipher"));
        assert_eq!(loaded.columnar.pad, 'x');
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: ScytaleConfig =
            toml::from_str("[defaults]\nmethod = \"caesar\"\n").expect("parse should succeed");
        assert_eq!(config.columnar.pad, 'q');
        assert_eq!(config.method(None).expect("method"), CipherKind::Caesar);
    }

    #[test]
    fn test_empty_columnar_table_keeps_default_pad() {
        let config: ScytaleConfig =
            toml::from_str("[columnar]\n").expect("parse should succeed");
        assert_eq!(config.columnar.pad, 'q');
    }

    #[test]
    fn test_flag_overrides_default_method() {
        let config: ScytaleConfig =
            toml::from_str("[defaults]\nmethod = \"caesar\"\n").expect("parse should succeed");
        assert_eq!(
            config.method(Some("columnar")).expect("method"),
            CipherKind::Columnar
        );
    }

    #[test]
    fn test_no_method_anywhere_is_an_error() {
        let config = ScytaleConfig::default();
        assert!(config.method(None).is_err());
    }

    #[test]
    fn test_bad_pad_rejected_by_registry() {
        let config: ScytaleConfig =
            toml::from_str("[columnar]\npad = \"7\"\n").expect("parse should succeed");
        assert!(config.registry().is_err());
    }

    #[test]
    fn test_resolve_config_path_prefers_flag() {
        let path = resolve_config_path(Some("/tmp/custom.toml")).expect("path");
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
