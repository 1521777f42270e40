// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   set | get | del | has | addpath | delpath | paths
//!   addgroup | delgroup | show | refresh | options | dump-env
//! ```
//!
//! Exit codes: 0 success, 1 error or `get`/`has` found nothing,
//! `refresh CMD` passes the command's code through.

use std::process::ExitCode;

use setenv_rs::cli::global::GlobalOptions;
use setenv_rs::cli::{self, Command};
use setenv_rs::cmd::config::run_options_command;
use setenv_rs::cmd::path::{
    run_addgroup_command, run_addpath_command, run_delgroup_command, run_delpath_command,
    run_paths_command,
};
use setenv_rs::cmd::refresh::run_refresh_command;
use setenv_rs::cmd::show::{run_dump_env_command, run_show_command};
use setenv_rs::cmd::vars::{run_del_command, run_get_command, run_has_command, run_set_command};
use setenv_rs::cmd::{open_synchronizer, sync_flags};
use setenv_rs::config::Config;
use setenv_rs::config::loader::ConfigLoader;
use setenv_rs::config::paths::default_settings_file;
use setenv_rs::logging::init_logging;
use setenv_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    // The dump is parsed by a caller; nothing else may reach stdout.
    if matches!(cli.command, Some(Command::DumpEnv)) {
        return finish(run_dump_env_command().map(|()| ExitCode::SUCCESS));
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => return finish(Err(e)),
    };
    let settings_files = loader.format_loaded_files();
    let config = match load_config(loader, &cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    finish(dispatch_command(&cli, &config, &settings_files))
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    LogConfig::from_settings(
        &config.logging,
        global.log_level.and_then(LogLevel::from_u8),
        global.file_log_level.and_then(LogLevel::from_u8),
    )
}

fn dispatch_command(
    cli: &cli::Cli,
    config: &Config,
    settings_files: &[String],
) -> setenv_rs::error::Result<ExitCode> {
    let flags = sync_flags(cli.global.no_update);
    let found = |found: bool| {
        if found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    };

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return Err(anyhow::anyhow!("No command specified"));
    };

    if let Command::Options = command {
        run_options_command(config, settings_files);
        return Ok(ExitCode::SUCCESS);
    }

    let sync = open_synchronizer(config)?;
    match command {
        Command::Set(args) => run_set_command(args, &sync, flags).map(|()| ExitCode::SUCCESS),
        Command::Get(args) => run_get_command(args, &sync).map(found),
        Command::Del(args) => run_del_command(args, &sync, flags).map(|()| ExitCode::SUCCESS),
        Command::Has(args) => run_has_command(args, &sync).map(found),
        Command::AddPath(args) => {
            run_addpath_command(args, &sync, flags).map(|()| ExitCode::SUCCESS)
        }
        Command::DelPath(args) => {
            run_delpath_command(args, &sync, flags).map(|()| ExitCode::SUCCESS)
        }
        Command::Paths => run_paths_command(&sync).map(|()| ExitCode::SUCCESS),
        Command::AddGroup(args) => {
            run_addgroup_command(args, &sync, flags).map(|()| ExitCode::SUCCESS)
        }
        Command::DelGroup(args) => {
            run_delgroup_command(args, &sync, flags).map(|()| ExitCode::SUCCESS)
        }
        Command::Show(args) => run_show_command(args, &sync, config).map(|()| ExitCode::SUCCESS),
        Command::Refresh(args) => run_refresh_command(args, &sync, config)
            .map(|code| ExitCode::from(u8::try_from(code).unwrap_or(1))),
        Command::Options | Command::DumpEnv => Ok(ExitCode::SUCCESS),
    }
}

fn finish(result: setenv_rs::error::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> setenv_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_settings
        && let Some(default) = default_settings_file()
    {
        loader = loader.add_toml_file_optional(default);
    }
    for path in &global.settings {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("SETENV");
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(loader: ConfigLoader, global: &GlobalOptions) -> setenv_rs::error::Result<Config> {
    let mut config = loader.build()?;
    config.bash.rc_file_override.clone_from(&global.config);
    Ok(config)
}
