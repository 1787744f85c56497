//! Application context for the Scytale CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config and the UI context so
//! handlers don't thread several parameters around.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use scytale_core::CipherRegistry;

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, ScytaleConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    config: OnceCell<ScytaleConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli, ui: UiContext) -> Self {
        Self {
            cli,
            ui,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Resolved config file path (may not exist).
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli.config.as_deref())
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&ScytaleConfig> {
        self.config.get_or_try_init(|| -> anyhow::Result<ScytaleConfig> {
            let path = self.config_path()?;
            load_config(&path).map_err(|e| CliError::InvalidConfig(format!("{:#}", e)).into())
        })
    }

    /// Registry configured from the config file.
    pub fn registry(&self) -> anyhow::Result<CipherRegistry> {
        let config = self.config()?;
        config
            .registry()
            .map_err(|e| CliError::from(&e).into())
    }
}
