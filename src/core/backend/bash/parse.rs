// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `export` lines to and from an [`Environment`].
//!
//! ```text
//! export JAVA_HOME=/opt/jdk          vars["JAVA_HOME"]
//! export NOTE="two words"            vars["NOTE"] = two words
//! export PATH=$TOOLS:/opt/bin:$PATH  paths = [$TOOLS, /opt/bin]
//! ```
//!
//! Entries before `$PATH` are prepended to what earlier lines declared,
//! entries after it are appended.

use std::collections::BTreeMap;

use crate::core::env::container::Environment;
use crate::core::env::paths::join_paths;
use crate::core::env::types::Flavor;

const EXPORT: &str = "export ";

/// Builds an environment from block lines.
#[must_use]
pub fn parse_environment(lines: &[String]) -> Environment {
    let flavor = Flavor::Posix;
    let mut vars = BTreeMap::new();
    let mut paths: Vec<String> = Vec::new();

    for line in lines {
        let Some(rest) = line.trim_start().strip_prefix(EXPORT) else {
            continue;
        };
        let Some((name, value)) = rest.split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = unquote(value.trim());
        if name.is_empty() {
            continue;
        }

        if flavor.is_path_var(name) {
            let mut before = Vec::new();
            let mut after = Vec::new();
            let mut seen_self = false;
            for entry in value.split(flavor.separator()).map(str::trim) {
                if flavor.is_path_self_reference(entry) {
                    seen_self = true;
                } else if !entry.is_empty() {
                    let target = if seen_self { &mut after } else { &mut before };
                    target.push(entry.to_owned());
                }
            }
            before.append(&mut paths);
            before.append(&mut after);
            paths = before;
        } else {
            vars.insert(name.to_owned(), value);
        }
    }

    Environment::from_parts(flavor, vars, paths)
}

/// Renders an environment as block lines, PATH last.
#[must_use]
pub fn serialize_environment(env: &Environment) -> Vec<String> {
    let mut lines: Vec<String> = env
        .vars
        .iter()
        .map(|(name, value)| format!("{EXPORT}{name}={}", quote(value)))
        .collect();

    let joined = join_paths(&env.paths, Flavor::Posix);
    if !joined.is_empty() {
        lines.push(format!("{EXPORT}PATH={}", quote(&format!("{joined}:$PATH"))));
    }
    lines
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(|c| {
        c.is_whitespace()
            || matches!(
                c,
                '"' | '\'' | '\\' | '`' | ';' | '&' | '|' | '<' | '>' | '(' | ')' | '#' | '*' | '?'
                    | '[' | ']' | '!'
            )
    })
}

/// Double-quotes a value when the shell would otherwise split or glob it.
/// `$` stays live so references still expand; a value keeps a literal dollar
/// as `\$`, which is written through unchanged.
fn quote(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_owned();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        let escaped_dollar = c == '\\' && chars.peek() == Some(&'$');
        if matches!(c, '"' | '\\' | '`') && !escaped_dollar {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_owned();
    }
    if !(value.len() >= 2 && value.starts_with('"') && value.ends_with('"')) {
        return value.to_owned();
    }
    let inner = &value[1..value.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '"' | '\\' | '`')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
