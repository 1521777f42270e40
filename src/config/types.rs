// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config
//!   backend   auto | bash | registry
//!   bash      rc_file, candidates, profile
//!   registry  broadcast
//!   reload    resolve
//!   logging   level, file, format, timestamps, targets
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};

/// Which persistence store to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Registry on Windows, rc file elsewhere.
    #[default]
    Auto,
    /// Shell rc file.
    Bash,
    /// Windows registry.
    Registry,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Bash => write!(f, "bash"),
            Self::Registry => write!(f, "registry"),
        }
    }
}

/// Shell rc file selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BashConfig {
    /// Explicit rc file from the command line or API; wins over everything.
    #[serde(skip)]
    pub rc_file_override: Option<PathBuf>,
    /// Configured rc file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_file: Option<PathBuf>,
    /// Searched in order when no rc file is set; the first existing one wins.
    pub candidates: Vec<PathBuf>,
    /// Sourced before the rc file when querying a subshell.
    pub profile: PathBuf,
}

impl Default for BashConfig {
    fn default() -> Self {
        Self {
            rc_file_override: None,
            rc_file: None,
            candidates: vec![
                PathBuf::from("~/.profile"),
                PathBuf::from("~/.bash_profile"),
                PathBuf::from("~/.bashrc"),
            ],
            profile: PathBuf::from("~/.profile"),
        }
    }
}

/// Windows registry options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Broadcast `WM_SETTINGCHANGE` after every write.
    pub broadcast: bool,
}

/// Reload options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReloadConfig {
    /// Expand variable references while reloading.
    pub resolve: bool,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self { resolve: true }
    }
}

/// Logging options; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Console log level (0-6).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    /// Log file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Log file line format.
    pub format: LogFormat,
    /// Timestamps on console lines.
    pub timestamps: bool,
    /// Module paths on console lines.
    pub targets: bool,
}
