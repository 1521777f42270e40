// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment of a freshly sourced shell.
//!
//! ```text
//! bash -c '
//!   if [ -f ~/.profile ]; then . ~/.profile; fi
//!   . <rc file>
//!   echo -------- BEGIN setenvironment env dump --------
//!   <setenvironment> dump-env'
//!        |
//!        v
//! stdout: <noise from rc files> DELIMITER {"PATH": [...], "ENVIRONMENT": {...}}
//!        |
//!        v
//! EnvDump --into_environment--> Environment (adjacent duplicates collapsed)
//! ```


use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::env::container::Environment;
use crate::core::env::current_env;
use crate::core::env::paths::remove_adjacent_duplicates;
use crate::core::env::types::Flavor;
use crate::error::{SetenvResult, ShellError};
use crate::utility::encoding::decode_output;

/// Printed between the rc files' own output and the JSON dump.
pub const DELIMITER: &str = "-------- BEGIN setenvironment env dump --------";

/// JSON interchange printed by `dump-env`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvDump {
    #[serde(rename = "PATH")]
    pub path: Vec<String>,
    #[serde(rename = "ENVIRONMENT")]
    pub environment: BTreeMap<String, String>,
}

impl EnvDump {
    /// Dumps the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        let env = current_env();
        Self {
            path: env.paths,
            environment: env.vars,
        }
    }

    /// Converts to an [`Environment`], collapsing adjacent duplicate paths.
    #[must_use]
    pub fn into_environment(self, flavor: Flavor) -> Environment {
        let paths = remove_adjacent_duplicates(self.path);
        Environment::from_parts(flavor, self.environment, paths)
    }
}

/// Runs bash to learn what environment an rc file produces.
#[derive(Debug, Clone, Builder)]
pub struct ShellQuery {
    /// rc file sourced last.
    #[builder(into)]
    rc_file: PathBuf,
    /// Sourced first when it exists.
    #[builder(into)]
    profile: Option<PathBuf>,
    /// Explicit bash binary; looked up on PATH otherwise.
    #[builder(into)]
    bash: Option<PathBuf>,
    /// Command printing an [`EnvDump`]; defaults to this program's `dump-env`.
    #[builder(into)]
    dumper: Option<String>,
}

impl ShellQuery {
    /// The script handed to `bash -c`.
    ///
    /// # Errors
    ///
    /// Returns `ShellQuery` when the dumper command cannot be determined.
    pub fn script(&self) -> SetenvResult<String> {
        let dumper = match &self.dumper {
            Some(dumper) => dumper.clone(),
            None => default_dumper()?,
        };
        let mut script = String::new();
        if let Some(profile) = &self.profile {
            let profile = shell_quote(&profile.display().to_string());
            script.push_str(&format!("if [ -f {profile} ]; then . {profile}; fi; "));
        }
        script.push_str(&format!(
            ". {}; echo '{DELIMITER}'; {dumper}",
            shell_quote(&self.rc_file.display().to_string())
        ));
        Ok(script)
    }

    /// Runs the query and parses its output.
    ///
    /// # Errors
    ///
    /// Returns `ShellQuery` when bash is missing, fails to start, exits
    /// non-zero, or prints no valid dump.
    pub fn run(&self) -> SetenvResult<EnvDump> {
        let bash = match &self.bash {
            Some(bash) => bash.clone(),
            None => which::which("bash").map_err(|_| ShellError::BashNotFound)?,
        };
        let script = self.script()?;
        debug!(bash = %bash.display(), script = %script, "querying shell environment");

        let output = Command::new(&bash)
            .arg("-c")
            .arg(&script)
            .output()
            .map_err(|source| ShellError::SpawnFailed {
                command: bash.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ShellError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: decode_output(&output.stderr).trim().to_owned(),
            }
            .into());
        }
        Ok(parse_shell_output(&decode_output(&output.stdout))?)
    }
}

/// Environment produced by sourcing `rc_file` after `profile`.
///
/// # Errors
///
/// See [`ShellQuery::run`].
pub fn get_env_vars_from_shell(rc_file: &Path, profile: Option<&Path>) -> SetenvResult<Environment> {
    let dump = ShellQuery::builder()
        .rc_file(rc_file)
        .maybe_profile(profile.map(Path::to_path_buf))
        .build()
        .run()?;
    Ok(dump.into_environment(Flavor::Posix))
}

/// Extracts the dump printed after [`DELIMITER`].
///
/// # Errors
///
/// Returns `MissingDelimiter` or `InvalidJson`.
pub fn parse_shell_output(stdout: &str) -> Result<EnvDump, ShellError> {
    let (_, dump) = stdout
        .split_once(DELIMITER)
        .ok_or(ShellError::MissingDelimiter)?;
    Ok(serde_json::from_str(dump.trim())?)
}

/// Single-quotes `value` for a POSIX shell.
#[must_use]
pub fn shell_quote(value: &str) -> String {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '~' | ':' | '+' | ','))
        && !value.starts_with('~')
    {
        return value.to_owned();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn default_dumper() -> Result<String, ShellError> {
    let exe = std::env::current_exe().map_err(|source| ShellError::SpawnFailed {
        command: "current_exe".to_string(),
        source,
    })?;
    Ok(format!("{} dump-env", shell_quote(&exe.display().to_string())))
}
