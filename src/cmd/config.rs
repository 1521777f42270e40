// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Config;

/// Display current settings and the files they came from.
pub fn run_options_command(config: &Config, settings_files: &[String]) {
    for line in config.format_options() {
        println!("{line}");
    }
    if settings_files.is_empty() {
        println!("\n# no settings files loaded");
    } else {
        println!();
        for line in settings_files {
            println!("# {line}");
        }
    }
}
