// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the synchronizer and reload engine over an rc file.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use setenv_rs::config::Config;
use setenv_rs::config::types::BackendKind;
use setenv_rs::core::backend::{load_from, open_backend, save_to};
use setenv_rs::core::env::process::ProcessEnv;
use setenv_rs::core::reload::reload_environment;
use setenv_rs::core::sync::{SyncFlags, Synchronizer};
use tempfile::TempDir;

fn bash_config(rc: PathBuf) -> Config {
    let mut config = Config::default();
    config.backend = BackendKind::Bash;
    config.bash.rc_file_override = Some(rc);
    config
}

/// Restores PATH when dropped.
struct PathGuard(Option<String>);

impl PathGuard {
    fn new() -> Self {
        Self(ProcessEnv::get("PATH"))
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        match &self.0 {
            Some(path) => ProcessEnv::set_var("PATH", path),
            None => ProcessEnv::remove_var("PATH"),
        }
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn sync_then_reload_round_trip() {
    let _path = PathGuard::new();
    let dir = TempDir::new().unwrap();
    let rc = dir.path().join("profile");
    let config = bash_config(rc.clone());
    let sync = Synchronizer::new(open_backend(&config).unwrap());
    let flags = SyncFlags::empty();

    sync.set_env_var("SETENV_RS_IT_HOME", "/opt/it", flags).unwrap();
    sync.add_env_path("/opt/it/bin", flags).unwrap();
    sync.add_template_path("SETENV_RS_IT_GROUP", "/opt/g", flags)
        .unwrap();

    let text = fs::read_to_string(&rc).unwrap();
    insta::assert_snapshot!(text, @r"
    # START setenvironment
    export SETENV_RS_IT_GROUP=/opt/g
    export SETENV_RS_IT_HOME=/opt/it
    export PATH=$SETENV_RS_IT_GROUP:/opt/it/bin:$PATH
    # END setenvironment
    ");

    ProcessEnv::set_var("PATH", "/sys1:/opt/it/bin:/sys2");
    let report = reload_environment(sync.backend(), false, true).unwrap();
    assert_eq!(report.path, "/opt/g:/opt/it/bin:/sys1:/sys2");
    assert_eq!(ProcessEnv::get("SETENV_RS_IT_HOME").as_deref(), Some("/opt/it"));

    ProcessEnv::remove_var("SETENV_RS_IT_HOME");
    ProcessEnv::remove_var("SETENV_RS_IT_GROUP");
}

#[test]
#[serial]
fn save_is_idempotent_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let rc = dir.path().join("profile");
    fs::write(&rc, "export USER_LINE=1\n").unwrap();
    let backend = open_backend(&bash_config(rc.clone())).unwrap();

    let mut env = load_from(backend.as_ref()).unwrap();
    env.set("A", "with space").unwrap();
    env.add_path("/a");
    assert!(save_to(backend.as_ref(), &env).unwrap());
    assert!(!save_to(backend.as_ref(), &env).unwrap());
    assert_eq!(load_from(backend.as_ref()).unwrap(), env);
    assert!(fs::read_to_string(&rc).unwrap().starts_with("export USER_LINE=1\n"));
}

#[cfg(unix)]
#[test]
#[serial]
fn live_process_follows_mutations() {
    let _path = PathGuard::new();
    let dir = TempDir::new().unwrap();
    let sync = Synchronizer::new(open_backend(&bash_config(dir.path().join("rc"))).unwrap());

    sync.add_env_path("/x/y", SyncFlags::default()).unwrap();
    let live = ProcessEnv::get("PATH").unwrap_or_default();
    assert!(live.starts_with("/x/y"), "{live}");

    sync.remove_env_path("/x/y", SyncFlags::default()).unwrap();
    let live = ProcessEnv::get("PATH").unwrap_or_default();
    assert!(!live.contains("/x/y"), "{live}");
}
