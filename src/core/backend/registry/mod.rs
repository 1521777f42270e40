// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows registry backend.
//!
//! ```text
//! Scope::User    HKCU\Environment                                   read/write
//! Scope::System  HKLM\SYSTEM\...\Session Manager\Environment        read-only
//!
//! RegistryBackend<S: RegistryStore>
//!   read()         user scope, PATH/Path split into paths
//!   read_merged()  user paths + system paths, user vars over system vars
//!   write(env)     write_all(vars + PATH, remove_missing = true)
//!                  then broadcast WM_SETTINGCHANGE when enabled
//! ```
//!
//! All values are written as `REG_EXPAND_SZ`. Value names compare
//! case-insensitively, as Windows does.

#[cfg(windows)]
pub mod win;


use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::EnvironmentBackend;
use crate::core::env::container::Environment;
use crate::core::env::expand::expand_windows;
use crate::core::env::paths::{join_paths, split_windows_paths};
use crate::core::env::process::ProcessEnv;
use crate::core::env::types::Flavor;
use crate::error::SetenvResult;

/// Registry location of an environment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Current user, writable.
    User,
    /// Machine-wide, read-only here.
    System,
}

impl Scope {
    #[must_use]
    pub const fn hive(self) -> &'static str {
        match self {
            Self::User => "HKEY_CURRENT_USER",
            Self::System => "HKEY_LOCAL_MACHINE",
        }
    }

    #[must_use]
    pub const fn key_path(self) -> &'static str {
        match self {
            Self::User => "Environment",
            Self::System => r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment",
        }
    }

    /// `HIVE\key`, for messages.
    #[must_use]
    pub fn display_key(self) -> String {
        format!(r"{}\{}", self.hive(), self.key_path())
    }
}

/// Raw access to the registry environment keys.
pub trait RegistryStore {
    /// All string values under the scope's key.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the key cannot be opened or read.
    fn values(&self, scope: Scope) -> SetenvResult<BTreeMap<String, String>>;

    /// Writes a user value as `REG_EXPAND_SZ`.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the value cannot be written.
    fn set_value(&self, name: &str, value: &str) -> SetenvResult<()>;

    /// Deletes a user value. A missing value is not an error.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the value cannot be deleted.
    fn delete_value(&self, name: &str) -> SetenvResult<()>;

    /// Tells running programs that the environment changed.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the broadcast fails.
    fn broadcast(&self) -> SetenvResult<()>;
}

/// Persists an [`Environment`] in the registry through a [`RegistryStore`].
#[derive(Debug)]
pub struct RegistryBackend<S> {
    store: S,
    broadcast: bool,
}

impl<S: RegistryStore> RegistryBackend<S> {
    pub const fn new(store: S, broadcast: bool) -> Self {
        Self { store, broadcast }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Raw values of a scope.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the key cannot be read.
    pub fn read_all(&self, scope: Scope) -> SetenvResult<BTreeMap<String, String>> {
        let values = self.store.values(scope)?;
        debug!(key = %scope.display_key(), count = values.len(), "read registry values");
        Ok(values)
    }

    /// A scope as an [`Environment`].
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the key cannot be read.
    pub fn read_scope(&self, scope: Scope) -> SetenvResult<Environment> {
        let mut vars = self.read_all(scope)?;
        let path_keys: Vec<String> = vars
            .keys()
            .filter(|k| Flavor::Windows.is_path_var(k))
            .cloned()
            .collect();
        let mut paths = Vec::new();
        for key in path_keys {
            if let Some(value) = vars.remove(&key) {
                paths.extend(split_windows_paths(&value));
            }
        }
        Ok(Environment::from_parts(Flavor::Windows, vars, paths))
    }

    /// Writes `vars` to the user scope.
    ///
    /// Values already holding the same content are skipped. With
    /// `remove_missing`, user values absent from `vars` are deleted. Returns
    /// whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when a value cannot be read, written or deleted.
    pub fn write_all(
        &self,
        vars: &BTreeMap<String, String>,
        remove_missing: bool,
    ) -> SetenvResult<bool> {
        let current = self.read_all(Scope::User)?;
        let mut changed = false;

        for (name, value) in vars {
            let existing = current
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name));
            match existing {
                Some((_, old)) if old == value => {}
                Some((stored_name, _)) => {
                    debug!(name = %stored_name, "update registry value");
                    self.store.set_value(stored_name, value)?;
                    changed = true;
                }
                None => {
                    debug!(name = %name, "create registry value");
                    self.store.set_value(name, value)?;
                    changed = true;
                }
            }
        }

        if remove_missing {
            for name in current.keys() {
                if !vars.keys().any(|k| k.eq_ignore_ascii_case(name)) {
                    debug!(name = %name, "delete registry value");
                    self.store.delete_value(name)?;
                    changed = true;
                }
            }
        }

        if changed {
            info!(key = %Scope::User.display_key(), "registry environment updated");
            self.broadcast_change();
        }
        Ok(changed)
    }

    /// Broadcasts `WM_SETTINGCHANGE` when enabled. Failures only warn.
    pub fn broadcast_change(&self) {
        if !self.broadcast {
            return;
        }
        if let Err(e) = self.store.broadcast() {
            warn!(error = %e, "environment change broadcast failed");
        }
    }

    fn lookup(user: &BTreeMap<String, String>, name: &str) -> Option<String> {
        user.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
            .or_else(|| ProcessEnv::get(name))
    }
}

impl<S: RegistryStore> EnvironmentBackend for RegistryBackend<S> {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn flavor(&self) -> Flavor {
        Flavor::Windows
    }

    fn read(&self) -> SetenvResult<Environment> {
        self.read_scope(Scope::User)
    }

    fn write(&self, env: &Environment) -> SetenvResult<bool> {
        let mut vars = env.vars.clone();
        let path = join_paths(&env.paths, Flavor::Windows);
        if !path.is_empty() {
            vars.insert("PATH".to_owned(), path);
        }
        self.write_all(&vars, true)
    }

    fn read_merged(&self) -> SetenvResult<Environment> {
        let user = self.read_scope(Scope::User)?;
        let system = self.read_scope(Scope::System)?;

        let mut vars = system.vars;
        for (name, value) in user.vars {
            vars.retain(|k, _| !k.eq_ignore_ascii_case(&name));
            vars.insert(name, value);
        }
        let mut paths = user.paths;
        paths.extend(system.paths);
        Ok(Environment::from_parts(Flavor::Windows, vars, paths))
    }

    fn resolve(&self, value: &str) -> String {
        let user = self.read_all(Scope::User).unwrap_or_else(|e| {
            debug!(error = %e, "user registry unavailable for expansion");
            BTreeMap::new()
        });
        expand_windows(value, |name| Self::lookup(&user, name))
    }

    fn describe(&self) -> String {
        Scope::User.display_key()
    }

    fn show(&self) -> SetenvResult<String> {
        let values = self.read_all(Scope::User)?;
        Ok(values
            .iter()
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect())
    }
}
