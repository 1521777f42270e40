// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PATH and path-group command arguments.
//!
//! ```text
//! addgroup TOOLS /opt/a   → TOOLS=/opt/a, PATH=$TOOLS:...
//! delgroup TOOLS /opt/a   → member removed, group gone once empty
//! delgroup TOOLS          → whole group removed
//! ```

use clap::Args;

/// Arguments for `addpath` and `delpath`.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Directory.
    pub path: String,
}

/// Arguments for `addgroup`.
#[derive(Debug, Clone, Args)]
pub struct GroupArgs {
    /// Group variable name.
    pub group: String,

    /// Directory to add.
    pub path: String,
}

/// Arguments for `delgroup`.
#[derive(Debug, Clone, Args)]
pub struct DelGroupArgs {
    /// Group variable name.
    pub group: String,

    /// Directory to remove; the whole group when omitted.
    pub path: Option<String>,

    /// Keeps an emptied group (empty variable, sentinel stays in PATH).
    #[arg(long = "keep-empty", requires = "path")]
    pub keep_empty: bool,
}
