// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_output()    shell stdout, UTF-8 or Windows-1252
//!   registry_string()  REG_SZ / REG_EXPAND_SZ data --> UTF-8
//!   registry_bytes()   UTF-8 --> REG_EXPAND_SZ data
//! ```

pub mod encoding;
