// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigLoader;
use super::paths::expand_home;
use super::types::BackendKind;
use super::Config;
use crate::logging::{LogFormat, LogLevel};
use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.backend, BackendKind::Auto);
    assert!(config.bash.rc_file.is_none());
    assert_eq!(config.bash.candidates.len(), 3);
    assert_eq!(config.bash.profile, PathBuf::from("~/.profile"));
    assert!(!config.registry.broadcast);
    assert!(config.reload.resolve);
    assert!(config.validate().is_ok());
}

#[test]
fn test_backend_kind_names() {
    let config = Config::parse(r#"backend = "bash""#).unwrap();
    assert_eq!(config.backend, BackendKind::Bash);
    assert!(Config::parse(r#"backend = "zsh""#).is_err());
    assert_eq!(BackendKind::Auto.to_string(), "auto");
    assert_eq!(BackendKind::Registry.to_string(), "registry");
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
backend = "bash"

[bash]
rc_file = "~/.zshenv"
candidates = ["~/.bashrc"]

[reload]
resolve = false

[logging]
level = 4
format = "json"
timestamps = true
"#,
    )
    .unwrap();

    assert_eq!(config.backend, BackendKind::Bash);
    assert_eq!(config.bash.rc_file, Some(PathBuf::from("~/.zshenv")));
    assert_eq!(config.bash.candidates, vec![PathBuf::from("~/.bashrc")]);
    assert_eq!(config.bash.profile, PathBuf::from("~/.profile"));
    assert!(!config.reload.resolve);
    assert_eq!(config.logging.level, Some(LogLevel::DEBUG));
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.logging.timestamps);
    assert!(!config.logging.targets);
}

#[test]
fn test_parse_rejects_unknown_fields() {
    assert!(Config::parse("[bash]\nshell = \"zsh\"\n").is_err());
}

#[test]
fn test_validate_rejects_empty_candidates() {
    let err = Config::parse("[bash]\ncandidates = []\n").unwrap_err();
    assert!(err.to_string().contains("candidates"), "{err}");

    assert!(Config::parse("[bash]\nrc_file = \"/tmp/rc\"\ncandidates = []\n").is_ok());
}

#[test]
fn test_later_sources_override_earlier() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[registry]\nbroadcast = true\n[reload]\nresolve = false").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[reload]\nresolve = true\n")
        .build()
        .unwrap();

    assert!(config.registry.broadcast);
    assert!(config.reload.resolve);
}

#[test]
fn test_missing_required_file_fails() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/setenvironment.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_is_not_listed_when_missing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/setenvironment.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
#[serial]
fn test_env_prefix_override() {
    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::set_var("SETENV_BASH__RC_FILE", "/tmp/from-env.sh") };

    let config = ConfigLoader::new().with_env_prefix("SETENV").build();

    // SAFETY: see above.
    unsafe { std::env::remove_var("SETENV_BASH__RC_FILE") };

    assert_eq!(
        config.unwrap().bash.rc_file,
        Some(PathBuf::from("/tmp/from-env.sh"))
    );
}

#[test]
fn test_set_override() {
    let config = ConfigLoader::new()
        .set("backend", "bash")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.backend, BackendKind::Bash);
}

#[test]
fn test_format_options_is_aligned() {
    let options = Config::default().format_options();
    insta::assert_snapshot!(options.join("\n"), @r"
    backend            = auto
    bash.candidates    = ~/.profile, ~/.bash_profile, ~/.bashrc
    bash.profile       = ~/.profile
    bash.rc_file       = <unset>
    logging.file       = <unset>
    logging.format     = text
    logging.level      = <unset>
    logging.targets    = false
    logging.timestamps = false
    registry.broadcast = false
    reload.resolve     = true
    ");
}

#[test]
fn test_expand_home() {
    let home = Path::new("/home/u");
    assert_eq!(
        expand_home(Path::new("~/.bashrc"), Some(home)),
        PathBuf::from("/home/u/.bashrc")
    );
    assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/u"));
    assert_eq!(
        expand_home(Path::new("/etc/profile"), Some(home)),
        PathBuf::from("/etc/profile")
    );
    assert_eq!(
        expand_home(Path::new("~/.bashrc"), None),
        PathBuf::from("~/.bashrc")
    );
}
