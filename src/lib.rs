// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         vars / path / show / refresh
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!         +------------------------------------+
//!         |  core   sync  reload  shell        |
//!         |           |      |                 |
//!         |        backend (bash | registry)   |
//!         |           |                        |
//!         |        env (Environment, PATH ops) |
//!         +------------------------------------+
//!         |  foundation  error, logging, utility |
//!         +------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod utility;
