// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::block::{END_MARKER, START_MARKER, extract_block, read_block, replace_block, write_block};
use super::parse::{parse_environment, serialize_environment};
use super::{BashBackend, resolve_rc_file_with};
use crate::config::types::BashConfig;
use crate::core::backend::EnvironmentBackend;
use crate::core::env::container::Environment;
use crate::core::env::types::Flavor;
use crate::error::SetenvError;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn rc_in(dir: &TempDir) -> PathBuf {
    dir.path().join(".bashrc")
}

// --- block ---

#[test]
fn test_extract_block_between_markers() {
    let text = format!("alias ll='ls -l'\n{START_MARKER}\nexport A=1\n{END_MARKER}\necho hi\n");
    assert_eq!(extract_block(&text, Path::new("rc")), lines(&["export A=1"]));
}

#[test]
fn test_extract_block_without_markers_is_empty() {
    assert!(extract_block("export A=1\n", Path::new("rc")).is_empty());
}

#[test]
fn test_extract_block_missing_end_reads_to_eof() {
    let text = format!("{START_MARKER}\nexport A=1\nexport B=2\n");
    assert_eq!(
        extract_block(&text, Path::new("rc")),
        lines(&["export A=1", "export B=2"])
    );
}

#[test]
fn test_replace_block_appends_when_absent() {
    let out = replace_block("alias ll='ls -l'\n", &lines(&["export A=1"]));
    insta::assert_snapshot!(out, @r"
    alias ll='ls -l'

    # START setenvironment
    export A=1
    # END setenvironment
    ");
}

#[test]
fn test_replace_block_keeps_surrounding_text() {
    let text = format!("before\n{START_MARKER}\nexport OLD=1\n{END_MARKER}\nafter");
    let out = replace_block(&text, &lines(&["export NEW=2"]));
    assert_eq!(
        out,
        format!("before\n{START_MARKER}\nexport NEW=2\n{END_MARKER}\nafter")
    );
}

#[test]
fn test_replace_block_closes_unterminated_block() {
    let text = format!("{START_MARKER}\nexport OLD=1\n");
    let out = replace_block(&text, &lines(&["export NEW=2"]));
    assert_eq!(out, format!("{START_MARKER}\nexport NEW=2\n{END_MARKER}\n"));
}

#[test]
fn test_replace_block_keeps_crlf_line_endings() {
    let text = format!("alias a=b\r\n{START_MARKER}\r\nexport OLD=1\r\n{END_MARKER}\r\necho hi\r\n");
    let out = replace_block(&text, &lines(&["export NEW=2"]));
    assert_eq!(
        out,
        format!("alias a=b\r\n{START_MARKER}\r\nexport NEW=2\r\n{END_MARKER}\r\necho hi\r\n")
    );
}

#[test]
fn test_write_block_appends_to_crlf_file_verbatim() {
    let dir = TempDir::new().unwrap();
    let rc = rc_in(&dir);
    fs::write(&rc, "alias a=b\r\nexport KEEP=1\r\n").unwrap();

    assert!(write_block(&rc, &lines(&["export A=1"])).unwrap());
    assert_eq!(
        fs::read_to_string(&rc).unwrap(),
        format!("alias a=b\r\nexport KEEP=1\r\n\r\n{START_MARKER}\r\nexport A=1\r\n{END_MARKER}\r\n")
    );
    assert_eq!(read_block(&rc).unwrap(), lines(&["export A=1"]));
}

#[test]
fn test_read_block_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(read_block(&rc_in(&dir)).unwrap().is_empty());
}

#[test]
fn test_read_block_rejects_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let rc = rc_in(&dir);
    fs::write(&rc, [0xff, 0xfe, b'\n']).unwrap();
    assert!(matches!(
        read_block(&rc),
        Err(SetenvError::BackendUnavailable(_))
    ));
}

#[test]
fn test_write_block_creates_file_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let rc = rc_in(&dir);
    let block = lines(&["export A=1"]);

    assert!(write_block(&rc, &block).unwrap());
    let first = fs::read_to_string(&rc).unwrap();
    assert!(!write_block(&rc, &block).unwrap(), "same content is not rewritten");
    assert_eq!(fs::read_to_string(&rc).unwrap(), first);
    assert_eq!(read_block(&rc).unwrap(), block);
}

// --- parse ---

#[test]
fn test_parse_environment() {
    let env = parse_environment(&lines(&[
        "# comment",
        "export JAVA_HOME=/opt/jdk",
        "export NOTE=\"two words\"",
        "export BROKEN",
        "FOO=not-exported",
        "export PATH=$TOOLS:/opt/bin::$PATH",
    ]));

    assert_eq!(env.vars.len(), 2);
    assert_eq!(env.vars["JAVA_HOME"], "/opt/jdk");
    assert_eq!(env.vars["NOTE"], "two words");
    assert_eq!(env.paths, lines(&["$TOOLS", "/opt/bin"]));
}

#[test]
fn test_parse_multiple_path_lines() {
    let env = parse_environment(&lines(&[
        "export PATH=/a:$PATH",
        "export PATH=/b:${PATH}:/z",
    ]));
    assert_eq!(env.paths, lines(&["/b", "/a", "/z"]));
}

#[test]
fn test_serialize_environment() {
    let mut env = Environment::new(Flavor::Posix);
    env.set("B", "2").unwrap();
    env.set("A", "has space").unwrap();
    env.add_path("/usr/local/bin");
    env.add_to_group("TOOLS", "/opt/tools").unwrap();

    insta::assert_snapshot!(serialize_environment(&env).join("\n"), @r#"
    export A="has space"
    export B=2
    export TOOLS=/opt/tools
    export PATH=$TOOLS:/usr/local/bin:$PATH
    "#);
}

#[test]
fn test_serialize_omits_empty_path() {
    let mut env = Environment::new(Flavor::Posix);
    env.set("A", "1").unwrap();
    assert_eq!(serialize_environment(&env), lines(&["export A=1"]));
}

#[test]
fn test_parse_reads_back_serialized_values() {
    let mut env = Environment::new(Flavor::Posix);
    env.set("QUOTED", "say \"hi\" to `you`").unwrap();
    env.set("REF", "$HOME/bin").unwrap();
    env.add_path("/my tools/bin");

    let parsed = parse_environment(&serialize_environment(&env));
    assert_eq!(parsed, env);
}

#[test]
fn test_escaped_dollar_survives_rewrite() {
    let block = lines(&[r#"export X="a\$b c""#]);
    let env = parse_environment(&block);
    assert_eq!(env.vars["X"], r"a\$b c");
    assert_eq!(serialize_environment(&env), block);
}

// --- backend ---

#[test]
fn test_backend_read_write() {
    let dir = TempDir::new().unwrap();
    let rc = rc_in(&dir);
    fs::write(&rc, "alias ll='ls -l'\n").unwrap();
    let backend = BashBackend::new(&rc);

    let mut env = backend.read().unwrap();
    assert_eq!(env, Environment::new(Flavor::Posix));
    env.set("FOO", "bar").unwrap();
    env.add_path("/opt/bin");
    assert!(backend.write(&env).unwrap());

    assert_eq!(backend.read().unwrap(), env);
    assert!(backend.show().unwrap().starts_with("alias ll='ls -l'\n"));
    assert_eq!(backend.describe(), rc.display().to_string());
}

// --- rc file resolution ---

#[test]
fn test_resolve_precedence() {
    let dir = TempDir::new().unwrap();
    let home = dir.path();
    fs::write(home.join(".bashrc"), "").unwrap();

    let mut config = BashConfig::default();
    assert_eq!(
        resolve_rc_file_with(&config, None, Some(home)).unwrap(),
        home.join(".bashrc")
    );

    config.rc_file = Some(PathBuf::from("~/.custom"));
    assert_eq!(
        resolve_rc_file_with(&config, None, Some(home)).unwrap(),
        home.join(".custom")
    );
    assert_eq!(
        resolve_rc_file_with(&config, Some("~/.from-env"), Some(home)).unwrap(),
        home.join(".from-env")
    );

    config.rc_file_override = Some(PathBuf::from("/explicit/rc"));
    assert_eq!(
        resolve_rc_file_with(&config, Some("~/.from-env"), Some(home)).unwrap(),
        PathBuf::from("/explicit/rc")
    );
}

#[test]
fn test_resolve_first_existing_candidate() {
    let dir = TempDir::new().unwrap();
    let home = dir.path();
    fs::write(home.join(".bash_profile"), "").unwrap();
    fs::write(home.join(".bashrc"), "").unwrap();

    let config = BashConfig::default();
    assert_eq!(
        resolve_rc_file_with(&config, Some("  "), Some(home)).unwrap(),
        home.join(".bash_profile")
    );
}

#[test]
fn test_resolve_not_found() {
    let dir = TempDir::new().unwrap();
    let err = resolve_rc_file_with(&BashConfig::default(), None, Some(dir.path())).unwrap_err();
    match err {
        SetenvError::ConfigNotFound(searched) => assert_eq!(searched.len(), 3),
        other => panic!("unexpected error: {other}"),
    }
}
