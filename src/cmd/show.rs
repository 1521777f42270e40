// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `dump-env`.

use anyhow::Context;

use crate::cli::refresh::ShowArgs;
use crate::config::Config;
use crate::config::paths::{expand_home, home_dir};
use crate::core::backend::bash::resolve_rc_file;
use crate::core::shell::{EnvDump, get_env_vars_from_shell};
use crate::core::sync::Synchronizer;
use crate::error::Result;

/// Run the `show` command.
///
/// # Errors
///
/// Returns an error if the backend cannot be read or the shell query fails.
pub fn run_show_command(args: &ShowArgs, sync: &Synchronizer, config: &Config) -> Result<()> {
    if args.shell {
        let rc_file = resolve_rc_file(&config.bash)?;
        let profile = expand_home(&config.bash.profile, home_dir().as_deref());
        let env = get_env_vars_from_shell(&rc_file, Some(&profile))
            .with_context(|| format!("failed to source {}", rc_file.display()))?;
        let dump = EnvDump {
            path: env.paths,
            environment: env.vars,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let backend = sync.backend();
    eprintln!("# {}", backend.describe());
    print!("{}", backend.show().context("failed to read the backend")?);
    Ok(())
}

/// Run the hidden `dump-env` command.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run_dump_env_command() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&EnvDump::capture())?);
    Ok(())
}
