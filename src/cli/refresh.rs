// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `refresh` arguments.

use clap::Args;

/// Arguments for `show`.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Sources the rc file in bash and prints the resulting environment as JSON.
    #[arg(long)]
    pub shell: bool,
}

/// Arguments for `refresh`.
#[derive(Debug, Clone, Default, Args)]
pub struct RefreshArgs {
    /// Leaves $NAME / %NAME% references unexpanded.
    #[arg(long = "no-resolve")]
    pub no_resolve: bool,

    /// Command to run in the reloaded environment.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CMD")]
    pub command: Vec<String>,
}
