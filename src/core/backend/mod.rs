// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistence backends.
//!
//! ```text
//! open_backend(&Config)
//!   backend = auto     --> Registry on Windows, Bash elsewhere
//!   backend = bash     --> BashBackend (rc file block)
//!   backend = registry --> RegistryBackend<WinRegistry>   (Windows only)
//!
//! EnvironmentBackend
//!   read()        persisted Environment
//!   write(env)    persist, true when something changed
//!   read_merged() view used by reload (registry: user + system)
//!   resolve(v)    expand $NAME / %NAME% references
//! ```

pub mod bash;
pub mod registry;

use crate::config::Config;
use crate::config::types::BackendKind;
use crate::core::env::container::Environment;
use crate::core::env::expand::expand;
use crate::core::env::process::ProcessEnv;
use crate::core::env::types::Flavor;
use crate::error::SetenvResult;

use bash::BashBackend;

/// A persistent store for an [`Environment`].
pub trait EnvironmentBackend {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Separator and sentinel syntax used by this store.
    fn flavor(&self) -> Flavor;

    /// Reads the persisted environment.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the store cannot be read.
    fn read(&self) -> SetenvResult<Environment>;

    /// Persists `env`. Returns `true` when the store changed.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the store cannot be written.
    fn write(&self, env: &Environment) -> SetenvResult<bool>;

    /// The environment a reload should apply.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the store cannot be read.
    fn read_merged(&self) -> SetenvResult<Environment> {
        self.read()
    }

    /// Expands variable references in `value`.
    fn resolve(&self, value: &str) -> String {
        expand(self.flavor(), value, ProcessEnv::get)
    }

    /// Where the data lives, for humans.
    fn describe(&self) -> String;

    /// Raw persisted content.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` when the store cannot be read.
    fn show(&self) -> SetenvResult<String>;
}

/// Reads the environment persisted in `backend`.
///
/// # Errors
///
/// Propagates the backend's read error.
pub fn load_from(backend: &dyn EnvironmentBackend) -> SetenvResult<Environment> {
    backend.read()
}

/// Persists `env` into `backend`.
///
/// # Errors
///
/// Propagates the backend's write error.
pub fn save_to(backend: &dyn EnvironmentBackend, env: &Environment) -> SetenvResult<bool> {
    backend.write(env)
}

/// Selects and constructs the backend named by the configuration.
///
/// # Errors
///
/// Returns `ConfigNotFound` when no rc file can be located, or `Config` when
/// the registry is requested off Windows.
pub fn open_backend(config: &Config) -> SetenvResult<Box<dyn EnvironmentBackend>> {
    match config.backend {
        BackendKind::Bash => Ok(Box::new(BashBackend::from_config(&config.bash)?)),
        BackendKind::Registry => open_registry(config),
        BackendKind::Auto if cfg!(windows) => open_registry(config),
        BackendKind::Auto => Ok(Box::new(BashBackend::from_config(&config.bash)?)),
    }
}

#[cfg(windows)]
fn open_registry(config: &Config) -> SetenvResult<Box<dyn EnvironmentBackend>> {
    use registry::{RegistryBackend, win::WinRegistry};
    Ok(Box::new(RegistryBackend::new(
        WinRegistry,
        config.registry.broadcast,
    )))
}

#[cfg(not(windows))]
fn open_registry(_config: &Config) -> SetenvResult<Box<dyn EnvironmentBackend>> {
    use crate::error::ConfigError;
    Err(ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "backend".to_string(),
        message: "the registry backend is only available on Windows".to_string(),
    }
    .into())
}
