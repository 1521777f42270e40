// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{
    BackendError, ConfigError, SetenvError, SetenvResult, config_not_found, invalid_operation,
};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "bash".to_string(),
        key: "candidates".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'candidates' in section '[bash]': must not be empty"
    );
}

#[test]
fn test_config_not_found_lists_candidates() {
    let err = config_not_found(vec![
        PathBuf::from("/home/u/.profile"),
        PathBuf::from("/home/u/.bashrc"),
    ]);
    insta::assert_snapshot!(
        err.to_string(),
        @"no shell config file found (searched: /home/u/.profile, /home/u/.bashrc)"
    );
}

#[test]
fn test_backend_error_is_boxed_into_backend_unavailable() {
    let err: SetenvError = BackendError::Encoding {
        path: "/tmp/rc".to_string(),
    }
    .into();
    assert!(matches!(err, SetenvError::BackendUnavailable(_)));
    assert_eq!(
        err.to_string(),
        "backend unavailable: '/tmp/rc' is not valid UTF-8"
    );
}

#[test]
fn test_invalid_operation_message() {
    let err = invalid_operation("cannot unset PATH");
    assert_eq!(err.to_string(), "invalid operation: cannot unset PATH");
}

#[test]
fn test_setenv_error_size() {
    // Box<str> and Box<[PathBuf]> are fat pointers (16 bytes) plus discriminant
    let size = std::mem::size_of::<SetenvError>();
    assert!(size <= 24, "SetenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_setenv_result_size() {
    let size = std::mem::size_of::<SetenvResult<()>>();
    assert!(size <= 24, "SetenvResult<()> is {size} bytes, expected <= 24");
}
