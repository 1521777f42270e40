// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                SetenvError (~24 bytes)
//!                       |
//!   +--------+--------+-+------+-------+------+
//!   |        |        |        |       |      |
//!   v        v        v        v       v      v
//! NotFound Backend  Invalid  Shell  Config   Io
//!  Box     Box      Box<str> Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Backend  Read, Write, Encoding, Registry
//!   Shell    BashNotFound, SpawnFailed, NonZeroExit, MissingDelimiter, InvalidJson
//!   Config   ParseError, InvalidValue
//! ```
//!
//! A missing END marker in an rc file is not an error: it is logged as a
//! warning and the block is read to the end of the file.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SetenvError`].
pub type SetenvResult<T> = std::result::Result<T, SetenvError>;

/// Top-level error type for the synchronization engine.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SetenvError {
    /// No rc file candidate exists and none was given explicitly.
    #[error("no shell config file found (searched: {})", format_searched(.0))]
    ConfigNotFound(Box<[PathBuf]>),

    /// The persistence store could not be read or written.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] Box<BackendError>),

    /// The requested mutation is not allowed.
    #[error("invalid operation: {0}")]
    InvalidOperation(Box<str>),

    /// Querying a subshell for its environment failed.
    #[error("shell query failed: {0}")]
    ShellQuery(#[from] Box<ShellError>),

    /// Settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a [`SetenvError::InvalidOperation`].
pub fn invalid_operation(message: impl Into<String>) -> SetenvError {
    SetenvError::InvalidOperation(message.into().into_boxed_str())
}

/// Create a [`SetenvError::ConfigNotFound`] listing the searched candidates.
pub fn config_not_found(searched: Vec<PathBuf>) -> SetenvError {
    SetenvError::ConfigNotFound(searched.into_boxed_slice())
}

fn format_searched(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SetenvError {
                fn from(err: $error) -> Self {
                    SetenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    BackendError => BackendUnavailable,
    ShellError => ShellQuery,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Backend Errors ---

/// Persistence store errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Failed to read the rc file.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the rc file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The rc file is not valid UTF-8.
    #[error("'{path}' is not valid UTF-8")]
    Encoding { path: String },

    /// Registry call failed.
    #[error("registry error on '{key}': {message}")]
    Registry { key: String, message: String },
}

// --- Shell Errors ---

/// Errors raised while querying a subshell for its environment.
#[derive(Debug, Error)]
pub enum ShellError {
    /// No bash executable on PATH.
    #[error("bash not found in PATH")]
    BashNotFound,

    /// Failed to spawn the shell.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The shell exited with a non-zero status.
    #[error("shell exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    /// The delimiter line was not found in the shell output.
    #[error("delimiter not found in shell output")]
    MissingDelimiter,

    /// The dump after the delimiter was not valid JSON.
    #[error("invalid environment dump: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse the settings sources.
    #[error("failed to parse settings: {message}")]
    ParseError { message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
