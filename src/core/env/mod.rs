// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment model.
//!
//! # Architecture
//!
//! ```text
//! Environment { vars, paths }     value type, group ops
//! Flavor      Posix | Windows     separator + sentinel syntax
//! paths       split/join/dedup    PATH-list primitives
//! expand      $NAME / %NAME%      reference resolution
//! ProcessEnv  std::env            live process table
//! ```
//!
//! - **PATH is never a var**: it always lives in `paths`
//! - **Prepend everywhere**: new entries go first, once

pub mod container;
pub mod expand;
pub mod paths;
pub mod process;
pub mod types;


/// Captures the current process environment in the native flavor.
#[must_use]
pub fn current_env() -> container::Environment {
    process::ProcessEnv::snapshot(types::Flavor::native())
}
