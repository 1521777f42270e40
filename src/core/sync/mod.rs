// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Applies one mutation to the live process and to the backend.
//!
//! ```text
//! Synchronizer::set_env_var("FOO", "bar", SyncFlags::UPDATE_PROCESS)
//!   1. UPDATE_PROCESS?  snapshot --op--> apply diff to std::env
//!   2. backend.read()   --op--> backend.write()
//! ```
//!
//! The same closure runs against both environments, so a rejected mutation
//! fails before anything is touched.

#[cfg(test)]
mod tests;

use bitflags::bitflags;
use tracing::info;

use crate::core::backend::EnvironmentBackend;
use crate::core::env::container::Environment;
use crate::core::env::process::ProcessEnv;
use crate::core::env::types::Flavor;
use crate::error::SetenvResult;

bitflags! {
    /// Flags controlling how a mutation is applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyncFlags: u32 {
        /// Also mutate the current process environment
        const UPDATE_PROCESS = 0x01;
    }
}

impl Default for SyncFlags {
    fn default() -> Self {
        Self::UPDATE_PROCESS
    }
}

/// Keeps the live environment and a backend in step.
pub struct Synchronizer {
    backend: Box<dyn EnvironmentBackend>,
}

impl Synchronizer {
    #[must_use]
    pub fn new(backend: Box<dyn EnvironmentBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &dyn EnvironmentBackend {
        self.backend.as_ref()
    }

    fn mutate<F>(&self, flags: SyncFlags, op: F) -> SetenvResult<bool>
    where
        F: Fn(&mut Environment) -> SetenvResult<bool>,
    {
        if flags.contains(SyncFlags::UPDATE_PROCESS) {
            let before = ProcessEnv::snapshot(Flavor::native());
            let mut after = before.clone();
            op(&mut after)?;
            ProcessEnv::apply(&before, &after);
        }

        let mut env = self.backend.read()?;
        let changed = op(&mut env)?;
        self.backend.write(&env)?;
        Ok(changed)
    }

    /// Sets a variable. `PATH` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for `PATH`, or the backend's error.
    pub fn set_env_var(&self, name: &str, value: &str, flags: SyncFlags) -> SetenvResult<()> {
        self.mutate(flags, |env| {
            env.set(name, value)?;
            Ok(true)
        })?;
        info!(name, value, backend = self.backend.name(), "set variable");
        Ok(())
    }

    /// Removes a variable. Returns whether the backend held it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for `PATH`, or the backend's error.
    pub fn unset_env_var(&self, name: &str, flags: SyncFlags) -> SetenvResult<bool> {
        let removed = self.mutate(flags, |env| env.remove(name))?;
        info!(name, removed, backend = self.backend.name(), "unset variable");
        Ok(removed)
    }

    /// Puts `path` first in PATH.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn add_env_path(&self, path: &str, flags: SyncFlags) -> SetenvResult<()> {
        self.mutate(flags, |env| {
            env.add_path(path);
            Ok(true)
        })?;
        info!(path, backend = self.backend.name(), "added path");
        Ok(())
    }

    /// Removes `path` from PATH. Returns whether the backend held it.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn remove_env_path(&self, path: &str, flags: SyncFlags) -> SetenvResult<bool> {
        let removed = self.mutate(flags, |env| Ok(env.remove_path(path)))?;
        info!(path, removed, backend = self.backend.name(), "removed path");
        Ok(removed)
    }

    /// Adds `path` to a path group.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for a bad group name or path, or the
    /// backend's error.
    pub fn add_template_path(&self, group: &str, path: &str, flags: SyncFlags) -> SetenvResult<()> {
        self.mutate(flags, |env| {
            env.add_to_group(group, path)?;
            Ok(true)
        })?;
        info!(group, path, backend = self.backend.name(), "added group path");
        Ok(())
    }

    /// Removes `path` from a path group. An emptied group is torn down only
    /// when `remove_if_empty` is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for a bad group name or path, or the
    /// backend's error.
    pub fn remove_template_path(
        &self,
        group: &str,
        path: &str,
        remove_if_empty: bool,
        flags: SyncFlags,
    ) -> SetenvResult<bool> {
        let removed = self.mutate(flags, |env| {
            env.remove_from_group_with(group, path, remove_if_empty)
        })?;
        info!(group, path, removed, backend = self.backend.name(), "removed group path");
        Ok(removed)
    }

    /// Removes a whole path group.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for a bad group name, or the backend's error.
    pub fn remove_template_group(&self, group: &str, flags: SyncFlags) -> SetenvResult<bool> {
        let removed = self.mutate(flags, |env| env.remove_group(group))?;
        info!(group, removed, backend = self.backend.name(), "removed group");
        Ok(removed)
    }

    /// A persisted variable; `PATH` yields the joined persisted paths.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn get_env_var(&self, name: &str) -> SetenvResult<Option<String>> {
        let env = self.backend.read()?;
        if env.flavor().is_path_var(name) && env.paths.is_empty() {
            return Ok(None);
        }
        Ok(env.get(name))
    }

    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn has_env_var(&self, name: &str) -> SetenvResult<bool> {
        self.get_env_var(name).map(|v| v.is_some())
    }

    /// The persisted environment.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn get_env(&self) -> SetenvResult<Environment> {
        self.backend.read()
    }

    /// The persisted PATH entries.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub fn get_paths(&self) -> SetenvResult<Vec<String>> {
        Ok(self.backend.read()?.paths)
    }
}
