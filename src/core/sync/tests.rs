// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use super::{SyncFlags, Synchronizer};
use crate::core::backend::bash::BashBackend;
use crate::core::env::process::ProcessEnv;
use crate::core::env::types::Flavor;
use crate::error::SetenvError;

struct Fixture {
    _dir: TempDir,
    rc: std::path::PathBuf,
    sync: Synchronizer,
    saved_path: Option<String>,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join(".bashrc");
        fs::write(&rc, "# user content\n").unwrap();
        let sync = Synchronizer::new(Box::new(BashBackend::new(&rc)));
        Self {
            _dir: dir,
            rc,
            sync,
            saved_path: ProcessEnv::get("PATH"),
        }
    }

    fn rc_text(&self) -> String {
        fs::read_to_string(&self.rc).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        match &self.saved_path {
            Some(path) => ProcessEnv::set_var("PATH", path),
            None => ProcessEnv::remove_var("PATH"),
        }
    }
}

#[test]
#[serial]
fn test_set_and_unset_variable() {
    let fx = Fixture::new();

    fx.sync
        .set_env_var("SETENV_RS_SYNC_FOO", "bar", SyncFlags::UPDATE_PROCESS)
        .unwrap();
    assert_eq!(ProcessEnv::get("SETENV_RS_SYNC_FOO").as_deref(), Some("bar"));
    assert!(fx.rc_text().contains("export SETENV_RS_SYNC_FOO=bar\n"));
    assert!(fx.rc_text().starts_with("# user content\n"));

    assert!(fx.sync.unset_env_var("SETENV_RS_SYNC_FOO", SyncFlags::UPDATE_PROCESS).unwrap());
    assert_eq!(ProcessEnv::get("SETENV_RS_SYNC_FOO"), None);
    assert!(!fx.rc_text().contains("SETENV_RS_SYNC_FOO"));

    assert!(
        !fx.sync.unset_env_var("SETENV_RS_SYNC_FOO", SyncFlags::UPDATE_PROCESS).unwrap(),
        "second unset is a no-op"
    );
}

#[test]
#[serial]
fn test_add_and_remove_path() {
    let fx = Fixture::new();

    fx.sync.add_env_path("/x/y", SyncFlags::UPDATE_PROCESS).unwrap();
    assert_eq!(
        ProcessEnv::paths(Flavor::native()).first().map(String::as_str),
        Some("/x/y")
    );
    assert!(fx.rc_text().contains("export PATH=/x/y:$PATH\n"));
    assert_eq!(fx.sync.get_paths().unwrap(), vec!["/x/y"]);

    assert!(fx.sync.remove_env_path("/x/y", SyncFlags::UPDATE_PROCESS).unwrap());
    assert!(!ProcessEnv::paths(Flavor::native()).contains(&"/x/y".to_string()));
    assert!(!fx.rc_text().contains("/x/y"));
    assert!(!fx.sync.remove_env_path("/x/y", SyncFlags::UPDATE_PROCESS).unwrap());
}

#[test]
#[serial]
fn test_path_group_lifecycle() {
    let fx = Fixture::new();
    let flags = SyncFlags::empty();

    fx.sync.add_env_path("/usr/local/bin", flags).unwrap();
    fx.sync.add_template_path("GROUP", "/a", flags).unwrap();
    fx.sync.add_template_path("GROUP", "/b", flags).unwrap();

    let env = fx.sync.get_env().unwrap();
    assert_eq!(env.vars["GROUP"], "/b:/a");
    assert_eq!(env.paths, vec!["$GROUP", "/usr/local/bin"]);

    assert!(fx.sync.remove_template_path("GROUP", "/a", true, flags).unwrap());
    assert!(fx.sync.has_env_var("GROUP").unwrap());
    assert!(fx.sync.remove_template_path("GROUP", "/b", true, flags).unwrap());

    let env = fx.sync.get_env().unwrap();
    assert!(!env.vars.contains_key("GROUP"));
    assert_eq!(env.paths, vec!["/usr/local/bin"]);
}

#[test]
#[serial]
fn test_group_keep_empty_and_remove_group() {
    let fx = Fixture::new();
    let flags = SyncFlags::empty();

    fx.sync.add_template_path("TOOLS", "/t", flags).unwrap();
    fx.sync.remove_template_path("TOOLS", "/t", false, flags).unwrap();
    assert_eq!(fx.sync.get_env_var("TOOLS").unwrap().as_deref(), Some(""));
    assert_eq!(fx.sync.get_paths().unwrap(), vec!["$TOOLS"]);

    assert!(fx.sync.remove_template_group("TOOLS", flags).unwrap());
    assert!(fx.sync.get_paths().unwrap().is_empty());
    assert!(!fx.sync.remove_template_group("TOOLS", flags).unwrap());
}

#[test]
#[serial]
fn test_path_is_guarded() {
    let fx = Fixture::new();
    let before = fx.rc_text();

    assert!(matches!(
        fx.sync.set_env_var("PATH", "/evil", SyncFlags::UPDATE_PROCESS),
        Err(SetenvError::InvalidOperation(_))
    ));
    assert!(matches!(
        fx.sync.unset_env_var("PATH", SyncFlags::UPDATE_PROCESS),
        Err(SetenvError::InvalidOperation(_))
    ));
    assert_eq!(ProcessEnv::get("PATH"), fx.saved_path);
    assert_eq!(fx.rc_text(), before);
}

#[test]
#[serial]
fn test_without_update_process_leaves_live_env() {
    let fx = Fixture::new();
    fx.sync
        .set_env_var("SETENV_RS_SYNC_BACKEND_ONLY", "1", SyncFlags::empty())
        .unwrap();
    assert_eq!(ProcessEnv::get("SETENV_RS_SYNC_BACKEND_ONLY"), None);
    assert_eq!(
        fx.sync.get_env_var("SETENV_RS_SYNC_BACKEND_ONLY").unwrap().as_deref(),
        Some("1")
    );
}

#[test]
#[serial]
fn test_get_path_when_nothing_persisted() {
    let fx = Fixture::new();
    assert_eq!(fx.sync.get_env_var("PATH").unwrap(), None);
    assert!(!fx.sync.has_env_var("MISSING").unwrap());
}

#[test]
fn test_default_flags_update_process() {
    assert_eq!(SyncFlags::default(), SyncFlags::UPDATE_PROCESS);
}
