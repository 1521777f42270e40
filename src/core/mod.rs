// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment persistence.
//!
//! ```text
//!               core
//!                |
//!    +-----+-----+-----+--------+
//!    |     |     |     |        |
//!    v     v     v     v        v
//!  sync reload shell backend   env
//!    |     |          |   |     |
//!    +-----+----------+   |   Environment
//!    live env + backend   |   Flavor, paths
//!                      bash | registry
//! ```

pub mod backend;
pub mod env;
pub mod reload;
pub mod shell;
pub mod sync;
