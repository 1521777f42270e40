// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← rc file to edit, wins over everything
//! --settings FILE   ← settings TOML (can repeat)
//! --set KEY=VAL     ← direct settings override, e.g. reload.resolve=false
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity (overrides --log-level)
//! --log-file FILE   ← log file
//! --no-update       ← persist only, leave the live process alone
//!
//! Precedence: CLI flags > --set > SETENV_* > --settings > default file
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::{ConfigError, SetenvResult};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Shell rc file to edit instead of the detected one.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Additional settings file(s). Can be specified multiple times.
    #[arg(long = "settings", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub settings: Vec<PathBuf>,

    /// Skips loading the default settings file.
    #[arg(long = "no-default-settings", global = true)]
    pub no_default_settings: bool,

    /// Sets an option, such as 'backend=bash' or 'registry.broadcast=true'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Only persists changes; the current process environment is left alone.
    #[arg(long = "no-update", global = true)]
    pub no_update: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` settings overrides.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for a `--set` option without `=`.
    pub fn to_config_overrides(&self) -> SetenvResult<Vec<(String, String)>> {
        let mut overrides = Vec::with_capacity(self.options.len() + 2);
        for option in &self.options {
            let (key, value) = option.split_once('=').ok_or_else(|| ConfigError::ParseError {
                message: format!("expected KEY=VALUE, got '{option}'"),
            })?;
            overrides.push((key.trim().replace('/', "."), value.trim().to_string()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("logging.level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("logging.file".to_string(), path.display().to_string()));
        }

        Ok(overrides)
    }
}
