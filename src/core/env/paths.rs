// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered path-list primitives.
//!
//! ```text
//! split_paths("a::b ", ':')        → [a, b]
//! split_windows_paths("C:/x/;")    → [C:\x]
//! join_paths([a, "", b], ':')      → "a:b"
//! remove_adjacent_duplicates       → [A, A, B] → [A, B]   [A, B, A] kept
//! prepend_unique(list, x)          → x moved to the front, once
//! ```

use super::types::Flavor;

/// Splits a PATH-style string, trimming entries and dropping blanks.
#[must_use]
pub fn split_paths(value: &str, flavor: Flavor) -> Vec<String> {
    value
        .split(flavor.separator())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Splits a Windows PATH value as stored in the registry.
///
/// Forward slashes become backslashes and trailing separators are stripped,
/// except on bare roots such as `C:\`.
#[must_use]
pub fn split_windows_paths(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(|p| normalize_windows_path(p.trim()))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Normalizes one Windows path entry the way registry values are read.
#[must_use]
pub(crate) fn normalize_windows_path(path: &str) -> String {
    let mut out = path.replace('/', "\\");
    while out.len() > 1 && out.ends_with('\\') && !is_drive_root(&out) {
        out.pop();
    }
    out.trim().to_owned()
}

fn is_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Joins paths with the flavor's separator, skipping blank entries.
#[must_use]
pub fn join_paths<S: AsRef<str>>(paths: &[S], flavor: Flavor) -> String {
    let sep = flavor.separator().to_string();
    paths
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(&sep)
}

/// Collapses runs of equal neighbouring entries into one.
///
/// Non-adjacent repeats are kept: a directory may legitimately appear once
/// as a literal and once through an expanded group.
#[must_use]
pub fn remove_adjacent_duplicates(paths: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(paths.len());
    for path in paths {
        if out.last() != Some(&path) {
            out.push(path);
        }
    }
    out
}

/// Moves `item` to the front of `list`, removing every other occurrence.
pub fn prepend_unique(list: &mut Vec<String>, item: &str) {
    list.retain(|p| p != item);
    list.insert(0, item.to_owned());
}

/// Removes every occurrence of `item`. Returns whether anything was removed.
pub fn remove_all(list: &mut Vec<String>, item: &str) -> bool {
    let before = list.len();
    list.retain(|p| p != item);
    list.len() != before
}
