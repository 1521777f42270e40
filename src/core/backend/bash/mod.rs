// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell rc file backend.
//!
//! # rc File Resolution
//!
//! ```text
//! bash.rc_file_override (--config)
//!   > $SETENVIRONMENT_CONFIG_FILE
//!   > bash.rc_file
//!   > first existing of bash.candidates (~/.profile, ~/.bash_profile, ~/.bashrc)
//!   > ConfigNotFound
//! ```
//!
//! # Read / Write
//!
//! ```text
//! read():  rc file --read_block--> lines --parse_environment--> Environment
//! write(): Environment --serialize_environment--> lines --write_block--> rc file
//! ```

pub mod block;
pub mod parse;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::debug;

use super::EnvironmentBackend;
use crate::config::paths::{expand_home, home_dir};
use crate::config::types::BashConfig;
use crate::core::env::container::Environment;
use crate::core::env::types::Flavor;
use crate::error::{SetenvResult, config_not_found};

/// Environment variable naming the rc file to edit.
pub const CONFIG_FILE_ENV: &str = "SETENVIRONMENT_CONFIG_FILE";

/// Edits the `setenvironment` block of one rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BashBackend {
    rc_file: PathBuf,
}

impl BashBackend {
    #[must_use]
    pub fn new(rc_file: impl Into<PathBuf>) -> Self {
        Self {
            rc_file: rc_file.into(),
        }
    }

    /// Creates a backend for the rc file selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when no rc file can be selected.
    pub fn from_config(config: &BashConfig) -> SetenvResult<Self> {
        resolve_rc_file(config).map(Self::new)
    }

    #[must_use]
    pub fn rc_file(&self) -> &Path {
        &self.rc_file
    }
}

impl EnvironmentBackend for BashBackend {
    fn name(&self) -> &'static str {
        "bash"
    }

    fn flavor(&self) -> Flavor {
        Flavor::Posix
    }

    fn read(&self) -> SetenvResult<Environment> {
        let lines = block::read_block(&self.rc_file)?;
        Ok(parse::parse_environment(&lines))
    }

    fn write(&self, env: &Environment) -> SetenvResult<bool> {
        let lines = parse::serialize_environment(env);
        block::write_block(&self.rc_file, &lines)
    }

    fn describe(&self) -> String {
        self.rc_file.display().to_string()
    }

    fn show(&self) -> SetenvResult<String> {
        block::read_text(&self.rc_file)
    }
}

/// Selects the rc file to edit.
///
/// # Errors
///
/// Returns `ConfigNotFound` when nothing is configured and no candidate exists.
pub fn resolve_rc_file(config: &BashConfig) -> SetenvResult<PathBuf> {
    let from_env = std::env::var(CONFIG_FILE_ENV).ok();
    resolve_rc_file_with(config, from_env.as_deref(), home_dir().as_deref())
}

/// [`resolve_rc_file`] with the environment value and home directory given.
///
/// # Errors
///
/// Returns `ConfigNotFound` when nothing is configured and no candidate exists.
pub fn resolve_rc_file_with(
    config: &BashConfig,
    from_env: Option<&str>,
    home: Option<&Path>,
) -> SetenvResult<PathBuf> {
    if let Some(path) = &config.rc_file_override {
        debug!(path = %path.display(), "rc file from override");
        return Ok(expand_home(path, home));
    }
    if let Some(value) = from_env.map(str::trim).filter(|v| !v.is_empty()) {
        debug!(path = value, "rc file from {CONFIG_FILE_ENV}");
        return Ok(expand_home(Path::new(value), home));
    }
    if let Some(path) = &config.rc_file {
        debug!(path = %path.display(), "rc file from settings");
        return Ok(expand_home(path, home));
    }

    let searched: Vec<PathBuf> = config
        .candidates
        .iter()
        .map(|p| expand_home(p, home))
        .collect();
    match searched.iter().find(|p| p.is_file()) {
        Some(found) => {
            debug!(path = %found.display(), "rc file from candidates");
            Ok(found.clone())
        }
        None => Err(config_not_found(searched)),
    }
}
