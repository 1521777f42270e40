// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable commands.

use anyhow::Context;

use crate::cli::vars::{NameArgs, SetArgs};
use crate::core::sync::{SyncFlags, Synchronizer};
use crate::error::Result;

/// Run the `set` command.
///
/// # Errors
///
/// Returns an error if the name is `PATH` or the backend fails.
pub fn run_set_command(args: &SetArgs, sync: &Synchronizer, flags: SyncFlags) -> Result<()> {
    sync.set_env_var(&args.name, &args.value, flags)
        .with_context(|| format!("failed to set {}", args.name))
}

/// Run the `get` command. Returns whether the variable exists.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn run_get_command(args: &NameArgs, sync: &Synchronizer) -> Result<bool> {
    let value = sync
        .get_env_var(&args.name)
        .with_context(|| format!("failed to read {}", args.name))?;
    match value {
        Some(value) => {
            println!("{value}");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Run the `del` command.
///
/// # Errors
///
/// Returns an error if the name is `PATH` or the backend fails.
pub fn run_del_command(args: &NameArgs, sync: &Synchronizer, flags: SyncFlags) -> Result<()> {
    let removed = sync
        .unset_env_var(&args.name, flags)
        .with_context(|| format!("failed to remove {}", args.name))?;
    if !removed {
        tracing::debug!(name = %args.name, "variable was not persisted");
    }
    Ok(())
}

/// Run the `has` command. Returns whether the variable exists.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn run_has_command(args: &NameArgs, sync: &Synchronizer) -> Result<bool> {
    sync.has_env_var(&args.name)
        .with_context(|| format!("failed to read {}", args.name))
}
