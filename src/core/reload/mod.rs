// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Replays persisted state into the live process.
//!
//! ```text
//! backend.read_merged()
//!   vars  --resolve?--> std::env::set_var
//!   paths --resolve?--> split --> [declared..., os-only...]
//!                                   |
//!                       collapse adjacent duplicates
//!                                   |
//!                              set PATH
//! ```
//!
//! An OS entry is declared when it equals a raw or an expanded backend entry;
//! declared entries keep the backend's position.


use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::backend::EnvironmentBackend;
use crate::core::env::expand::has_reference;
use crate::core::env::paths::{join_paths, remove_adjacent_duplicates, split_paths};
use crate::core::env::process::ProcessEnv;
use crate::core::env::types::Flavor;
use crate::error::SetenvResult;

/// Outcome of a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReloadReport {
    /// Variables written to the live environment.
    pub vars_applied: usize,
    /// The live PATH afterwards.
    pub path: String,
}

/// Rebuilds the live environment from the backend.
///
/// # Errors
///
/// Returns `BackendUnavailable` when the backend cannot be read; the live
/// environment is left untouched in that case.
pub fn reload_environment(
    backend: &dyn EnvironmentBackend,
    verbose: bool,
    resolve: bool,
) -> SetenvResult<ReloadReport> {
    let declared = backend.read_merged()?;
    let flavor = Flavor::native();
    let expand = |value: &str| {
        if resolve && has_reference(backend.flavor(), value) {
            backend.resolve(value)
        } else {
            value.to_owned()
        }
    };

    for (name, value) in &declared.vars {
        ProcessEnv::set_var(name, &expand(value));
    }

    let os_paths = ProcessEnv::paths(flavor);
    let merged = merge_paths(&declared.paths, &os_paths, flavor, expand);
    let path = join_paths(&merged, flavor);
    ProcessEnv::set_var("PATH", &path);

    if verbose {
        info!(backend = backend.name(), path = %path, "reloaded environment");
    } else {
        debug!(backend = backend.name(), path = %path, "reloaded environment");
    }

    Ok(ReloadReport {
        vars_applied: declared.vars.len(),
        path,
    })
}

/// Backend entries first (expanded by `expand`), then OS-only entries in
/// their original order, adjacent duplicates collapsed.
pub fn merge_paths<F>(declared: &[String], os: &[String], flavor: Flavor, expand: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let expanded: Vec<String> = declared
        .iter()
        .flat_map(|entry| split_paths(&expand(entry), flavor))
        .collect();
    let known: HashSet<&str> = declared
        .iter()
        .chain(&expanded)
        .map(String::as_str)
        .collect();

    let mut merged = expanded.clone();
    merged.extend(
        os.iter()
            .filter(|entry| !known.contains(entry.as_str()))
            .cloned(),
    );
    remove_adjacent_duplicates(merged)
}
