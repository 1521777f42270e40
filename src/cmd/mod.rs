// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   vars     set / get / del / has
//!   path     addpath / delpath / paths / addgroup / delgroup
//!   show     show / dump-env
//!   refresh  refresh [CMD...]
//!   config   options
//! ```

pub mod config;
pub mod path;
pub mod refresh;
pub mod show;
pub mod vars;

use anyhow::Context;

use crate::config::Config;
use crate::core::backend::open_backend;
use crate::core::sync::{SyncFlags, Synchronizer};
use crate::error::Result;

/// Opens the configured backend behind a [`Synchronizer`].
///
/// # Errors
///
/// Returns an error when no backend can be opened.
pub fn open_synchronizer(config: &Config) -> Result<Synchronizer> {
    let backend = open_backend(config).context("failed to open the environment backend")?;
    Ok(Synchronizer::new(backend))
}

/// Mutation flags for the `--no-update` option.
#[must_use]
pub fn sync_flags(no_update: bool) -> SyncFlags {
    if no_update {
        SyncFlags::empty()
    } else {
        SyncFlags::UPDATE_PROCESS
    }
}
