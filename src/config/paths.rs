// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Home-relative path handling.
//!
//! ```text
//! ~            → $HOME
//! ~/.bashrc    → $HOME/.bashrc
//! /etc/profile → unchanged
//! ```

use std::path::{Path, PathBuf};

/// File name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "setenvironment.toml";

/// The current user's home directory.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Default settings file: `<config_dir>/setenvironment/setenvironment.toml`.
#[must_use]
pub fn default_settings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("setenvironment").join(SETTINGS_FILE_NAME))
}

/// Expands a leading `~` against `home`. Paths without one are returned as-is.
#[must_use]
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    if text == "~" {
        return home.to_path_buf();
    }
    text.strip_prefix("~/")
        .or_else(|| text.strip_prefix("~\\"))
        .map_or_else(|| path.to_path_buf(), |rest| home.join(rest))
}
