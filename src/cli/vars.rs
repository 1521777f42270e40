// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable command arguments.

use clap::Args;

/// Arguments for `set`.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    pub name: String,

    /// Value; may reference other variables ($NAME or %NAME%).
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for `get`, `del` and `has`.
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Variable name.
    pub name: String,
}
