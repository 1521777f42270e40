// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <config_dir>/setenvironment/setenvironment.toml
//! 3. --settings FILE
//! 4. SETENV_* env vars
//! 5. CLI overrides (--config, --log-level)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SETENV_BACKEND=bash                → backend = "bash"
//! SETENV_BASH__RC_FILE=~/.zshenv     → bash.rc_file = "~/.zshenv"
//! SETENV_REGISTRY__BROADCAST=true    → registry.broadcast = true
//! ```
//!
//! `SETENVIRONMENT_CONFIG_FILE` is read separately when the rc file is
//! resolved; it sits between `--config` and `bash.rc_file`.

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{BackendKind, BashConfig, LoggingConfig, RegistryConfig, ReloadConfig};

const UNSET: &str = "<unset>";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Persistence store selection.
    pub backend: BackendKind,
    /// Shell rc file options.
    pub bash: BashConfig,
    /// Windows registry options.
    pub registry: RegistryConfig,
    /// Reload options.
    pub reload: ReloadConfig,
    /// Logging options.
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use setenv_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("setenvironment.toml")
    ///     .with_env_prefix("SETENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when no rc file can ever be selected or the backend is
    /// not available on this platform.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.bash.rc_file.is_none() && self.bash.candidates.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "bash".to_string(),
                key: "candidates".to_string(),
                message: "must not be empty when rc_file is unset".to_string(),
            });
        }
        if self.backend == BackendKind::Registry && !cfg!(windows) {
            return Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "backend".to_string(),
                message: "the registry backend is only available on Windows".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let fmt = |p: Option<&Path>| p.map_or_else(|| UNSET.to_string(), |p| p.display().to_string());

        options.insert("backend".to_string(), self.backend.to_string());
        options.insert(
            "bash.rc_file".to_string(),
            fmt(self
                .bash
                .rc_file_override
                .as_deref()
                .or(self.bash.rc_file.as_deref())),
        );
        options.insert(
            "bash.candidates".to_string(),
            self.bash
                .candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
        options.insert("bash.profile".to_string(), fmt(Some(&self.bash.profile)));
        options.insert(
            "registry.broadcast".to_string(),
            self.registry.broadcast.to_string(),
        );
        options.insert("reload.resolve".to_string(), self.reload.resolve.to_string());
        options.insert(
            "logging.level".to_string(),
            self.logging
                .level
                .map_or_else(|| UNSET.to_string(), |l| l.as_u8().to_string()),
        );
        options.insert("logging.file".to_string(), fmt(self.logging.file.as_deref()));
        options.insert("logging.format".to_string(), self.logging.format.to_string());
        options.insert(
            "logging.targets".to_string(),
            self.logging.targets.to_string(),
        );
        options.insert(
            "logging.timestamps".to_string(),
            self.logging.timestamps.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
