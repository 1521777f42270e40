// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The live process environment.
//!
//! ```text
//! ProcessEnv::snapshot(flavor) --> Environment (PATH split into paths)
//! ProcessEnv::apply(before, after)
//!   removed vars  --> remove_var
//!   changed vars  --> set_var
//!   paths changed --> set_var("PATH", join(after.paths))
//! ```
//!
//! Group sentinels are written verbatim; expansion happens at reload.

use super::container::Environment;
use super::paths::{join_paths, split_paths};
use super::types::Flavor;
use tracing::trace;

/// Handle to the current process's variable table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Captures the live environment.
    #[must_use]
    pub fn snapshot(flavor: Flavor) -> Environment {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Environment::from_parts(flavor, vars, Vec::new())
    }

    /// Reads one variable.
    #[must_use]
    pub fn get(name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    /// The live PATH entries.
    #[must_use]
    pub fn paths(flavor: Flavor) -> Vec<String> {
        Self::get("PATH")
            .map(|p| split_paths(&p, flavor))
            .unwrap_or_default()
    }

    /// Sets one variable.
    pub fn set_var(name: &str, value: &str) {
        trace!(name, value, "process set_var");
        // SAFETY: no other thread reads the environment. The binary's only
        // extra thread is the log file writer, and tests that touch the
        // environment run under `#[serial]`.
        unsafe { std::env::set_var(name, value) };
    }

    /// Removes one variable.
    pub fn remove_var(name: &str) {
        trace!(name, "process remove_var");
        // SAFETY: see `set_var`.
        unsafe { std::env::remove_var(name) };
    }

    /// Replaces the live PATH.
    pub fn set_paths(paths: &[String], flavor: Flavor) {
        Self::set_var("PATH", &join_paths(paths, flavor));
    }

    /// Writes the difference between two snapshots into the live environment.
    pub fn apply(before: &Environment, after: &Environment) {
        for name in before.vars.keys() {
            if !after.vars.contains_key(name) {
                Self::remove_var(name);
            }
        }
        for (name, value) in &after.vars {
            if before.vars.get(name) != Some(value) {
                Self::set_var(name, value);
            }
        }
        if before.paths != after.paths {
            Self::set_paths(&after.paths, after.flavor());
        }
    }
}
