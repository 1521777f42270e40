// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PATH and path-group commands.

use anyhow::Context;

use crate::cli::path::{DelGroupArgs, GroupArgs, PathArgs};
use crate::core::sync::{SyncFlags, Synchronizer};
use crate::error::Result;

/// Run the `addpath` command.
///
/// # Errors
///
/// Returns an error if the backend fails.
pub fn run_addpath_command(args: &PathArgs, sync: &Synchronizer, flags: SyncFlags) -> Result<()> {
    sync.add_env_path(&args.path, flags)
        .with_context(|| format!("failed to add {} to PATH", args.path))
}

/// Run the `delpath` command.
///
/// # Errors
///
/// Returns an error if the backend fails.
pub fn run_delpath_command(args: &PathArgs, sync: &Synchronizer, flags: SyncFlags) -> Result<()> {
    sync.remove_env_path(&args.path, flags)
        .with_context(|| format!("failed to remove {} from PATH", args.path))?;
    Ok(())
}

/// Run the `paths` command.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn run_paths_command(sync: &Synchronizer) -> Result<()> {
    for path in sync.get_paths().context("failed to read PATH")? {
        println!("{path}");
    }
    Ok(())
}

/// Run the `addgroup` command.
///
/// # Errors
///
/// Returns an error for an invalid group or path, or if the backend fails.
pub fn run_addgroup_command(args: &GroupArgs, sync: &Synchronizer, flags: SyncFlags) -> Result<()> {
    sync.add_template_path(&args.group, &args.path, flags)
        .with_context(|| format!("failed to add {} to group {}", args.path, args.group))
}

/// Run the `delgroup` command.
///
/// # Errors
///
/// Returns an error for an invalid group or path, or if the backend fails.
pub fn run_delgroup_command(
    args: &DelGroupArgs,
    sync: &Synchronizer,
    flags: SyncFlags,
) -> Result<()> {
    match &args.path {
        Some(path) => sync
            .remove_template_path(&args.group, path, !args.keep_empty, flags)
            .with_context(|| format!("failed to remove {path} from group {}", args.group))?,
        None => sync
            .remove_template_group(&args.group, flags)
            .with_context(|| format!("failed to remove group {}", args.group))?,
    };
    Ok(())
}
