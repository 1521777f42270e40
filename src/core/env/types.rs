// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform flavor of an environment.
//!
//! ```text
//! Flavor::Posix   → separator ':'  sentinel "$GROUP"   refs $NAME ${NAME}
//! Flavor::Windows → separator ';'  sentinel "%GROUP%"  refs %NAME%
//! ```

use serde::{Deserialize, Serialize};

/// Path-list and variable-reference syntax of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// `:`-separated PATH, `$NAME` references.
    Posix,
    /// `;`-separated PATH, `%NAME%` references.
    Windows,
}

impl Default for Flavor {
    fn default() -> Self {
        Self::native()
    }
}

impl Flavor {
    /// The flavor of the platform this binary was built for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Path-list separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }

    /// The token placed in PATH to stand for a path group.
    #[must_use]
    pub fn sentinel(self, group: &str) -> String {
        match self {
            Self::Posix => format!("${group}"),
            Self::Windows => format!("%{group}%"),
        }
    }

    /// Whether `name` refers to PATH.
    ///
    /// Windows variable names are case-insensitive (`Path` is PATH).
    #[must_use]
    pub fn is_path_var(self, name: &str) -> bool {
        match self {
            Self::Posix => name == "PATH",
            Self::Windows => name.eq_ignore_ascii_case("PATH"),
        }
    }

    /// Whether a PATH entry is a self-reference (`$PATH`, `${PATH}`, `%PATH%`).
    #[must_use]
    pub fn is_path_self_reference(self, entry: &str) -> bool {
        let entry = entry.trim();
        match self {
            Self::Posix => {
                entry.eq_ignore_ascii_case("$PATH") || entry.eq_ignore_ascii_case("${PATH}")
            }
            Self::Windows => entry.eq_ignore_ascii_case("%PATH%"),
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
