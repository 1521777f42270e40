// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for setenvironment using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! setenvironment [global options] <command>
//! set NAME VALUE | get NAME | del NAME | has NAME
//! addpath PATH | delpath PATH | paths
//! addgroup GROUP PATH | delgroup GROUP [PATH] [--keep-empty]
//! show [--shell]
//! refresh [CMD...]
//! options
//! dump-env (hidden)
//! ```

pub mod global;
pub mod path;
pub mod refresh;
pub mod vars;


use crate::cli::global::GlobalOptions;
use crate::cli::path::{DelGroupArgs, GroupArgs, PathArgs};
use crate::cli::refresh::{RefreshArgs, ShowArgs};
use crate::cli::vars::{NameArgs, SetArgs};
use clap::{Parser, Subcommand};

/// Persistent environment variable manager.
#[derive(Debug, Parser)]
#[command(
    name = "setenvironment",
    author,
    version,
    about = "Persistent environment variable manager",
    long_about = "setenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Sets environment variables and PATH entries for the current\n\
                  process and persists them: in a marked block of the shell rc\n\
                  file on Unix, in HKCU\\Environment on Windows.",
    after_help = "RC FILE:\n\n\
                  The rc file is chosen from, in order: --config, the\n\
                  SETENVIRONMENT_CONFIG_FILE environment variable, bash.rc_file\n\
                  from the settings, then the first existing of ~/.profile,\n\
                  ~/.bash_profile and ~/.bashrc.\n\n\
                  SETTINGS:\n\n\
                  Settings are read from <config dir>/setenvironment/setenvironment.toml,\n\
                  then --settings FILE, then SETENV_SECTION__KEY environment variables,\n\
                  then --set options."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sets a variable.
    Set(SetArgs),

    /// Prints a persisted variable; exits with 1 when it is not set.
    Get(NameArgs),

    /// Removes a variable.
    #[command(visible_alias = "unset")]
    Del(NameArgs),

    /// Exits with 0 when a variable is persisted, 1 otherwise.
    Has(NameArgs),

    /// Puts a directory first in PATH.
    #[command(name = "addpath")]
    AddPath(PathArgs),

    /// Removes a directory from PATH.
    #[command(name = "delpath")]
    DelPath(PathArgs),

    /// Lists the persisted PATH entries.
    Paths,

    /// Adds a directory to a path group.
    #[command(name = "addgroup")]
    AddGroup(GroupArgs),

    /// Removes a directory from a path group, or the whole group.
    #[command(name = "delgroup")]
    DelGroup(DelGroupArgs),

    /// Prints the persisted configuration.
    Show(ShowArgs),

    /// Reloads the persisted environment, then prints PATH or runs a command.
    Refresh(RefreshArgs),

    /// Lists all settings and their values.
    Options,

    /// Prints the process environment as JSON.
    #[command(name = "dump-env", hide = true)]
    DumpEnv,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
