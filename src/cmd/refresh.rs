// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `refresh`: reload, then print PATH or run a command.
//!
//! ```text
//! refresh            → reload, print PATH, exit 0
//! refresh CMD ARGS.. → reload, run CMD with inherited stdio, exit with its code
//! ```

use std::process::Command;

use anyhow::{Context, bail};
use tracing::debug;

use crate::cli::refresh::RefreshArgs;
use crate::config::Config;
use crate::core::reload::reload_environment;
use crate::core::sync::Synchronizer;
use crate::error::Result;

/// Run the `refresh` command. Returns the exit code to report.
///
/// # Errors
///
/// Returns an error if the backend cannot be read or the command cannot start.
pub fn run_refresh_command(args: &RefreshArgs, sync: &Synchronizer, config: &Config) -> Result<i32> {
    let resolve = config.reload.resolve && !args.no_resolve;
    let report = reload_environment(sync.backend(), true, resolve)
        .context("failed to reload the environment")?;
    debug!(vars = report.vars_applied, "applied persisted variables");

    let Some((program, rest)) = args.command.split_first() else {
        println!("{}", report.path);
        return Ok(0);
    };

    let status = Command::new(program)
        .args(rest)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    match status.code() {
        Some(code) => Ok(code),
        None => bail!("{program} was terminated by a signal"),
    }
}
