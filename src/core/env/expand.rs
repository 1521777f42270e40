// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable-reference expansion.
//!
//! ```text
//! Posix:   "$HOME/bin:${TOOLS}"  → lookup(HOME), lookup(TOOLS)
//! Windows: "%USERPROFILE%\bin"   → lookup(USERPROFILE)
//! unresolved references are left as written
//! ```

use super::types::Flavor;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn posix_reference() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").ok())
        .as_ref()
}

fn windows_reference() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%([^%;=\s]+)%").ok()).as_ref()
}

/// Expands variable references in `value` using the flavor's syntax.
pub fn expand<F>(flavor: Flavor, value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match flavor {
        Flavor::Posix => expand_posix(value, lookup),
        Flavor::Windows => expand_windows(value, lookup),
    }
}

/// Expands `$NAME` and `${NAME}` references.
pub fn expand_posix<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !value.contains('$') {
        return value.to_owned();
    }
    let Some(re) = posix_reference() else {
        return value.to_owned();
    };
    re.replace_all(value, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        lookup(name).unwrap_or_else(|| caps[0].to_owned())
    })
    .into_owned()
}

/// Expands `%NAME%` references.
pub fn expand_windows<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !value.contains('%') {
        return value.to_owned();
    }
    let Some(re) = windows_reference() else {
        return value.to_owned();
    };
    re.replace_all(value, |caps: &Captures<'_>| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_owned())
    })
    .into_owned()
}

/// Whether `value` holds at least one reference in the flavor's syntax.
#[must_use]
pub fn has_reference(flavor: Flavor, value: &str) -> bool {
    let re = match flavor {
        Flavor::Posix => posix_reference(),
        Flavor::Windows => windows_reference(),
    };
    re.is_some_and(|re| re.is_match(value))
}
