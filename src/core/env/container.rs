// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `Environment` value type and its path-group operations.
//!
//! # Architecture
//!
//! ```text
//! Environment { vars: BTreeMap<String, String>, paths: Vec<String>, flavor }
//!   vars never holds PATH; PATH lives in `paths`
//!
//! add_to_group("G", "/a")
//!   1. vars["G"] = "/a:<old members without /a>"
//!   2. paths     = ["$G", <old paths without $G>]
//!
//! remove_from_group("G", "/a")
//!   members empty? --yes--> remove_group("G")  (sentinel + var gone)
//!                  --no---> vars["G"] rewritten, sentinel kept
//! ```
//!
//! Every insertion prepends and deduplicates: the newest entry is first and
//! appears once.

use super::paths::{join_paths, normalize_windows_path, prepend_unique, remove_all, split_paths};
use super::types::Flavor;
use crate::error::{SetenvResult, invalid_operation};
use serde::Serialize;
use std::collections::BTreeMap;

/// A set of variables plus an ordered PATH list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Variables other than PATH.
    pub vars: BTreeMap<String, String>,
    /// PATH entries, first entry wins at lookup time.
    pub paths: Vec<String>,
    #[serde(skip)]
    flavor: Flavor,
}

impl Environment {
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        Self {
            vars: BTreeMap::new(),
            paths: Vec::new(),
            flavor,
        }
    }

    /// Creates an environment from parts.
    ///
    /// A PATH entry in `vars` is moved in front of `paths`.
    #[must_use]
    pub fn from_parts(flavor: Flavor, mut vars: BTreeMap<String, String>, paths: Vec<String>) -> Self {
        let path_keys: Vec<String> = vars
            .keys()
            .filter(|k| flavor.is_path_var(k))
            .cloned()
            .collect();
        let mut merged = Vec::new();
        for key in path_keys {
            if let Some(value) = vars.remove(&key) {
                merged.extend(split_paths(&value, flavor));
            }
        }
        merged.extend(paths);
        Self {
            vars,
            paths: merged,
            flavor,
        }
    }

    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Gets a variable value. `PATH` yields the joined path list.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        if self.flavor.is_path_var(name) {
            return Some(self.path_string());
        }
        self.vars.get(name).cloned()
    }

    /// Sets a variable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` when `name` is PATH or empty.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> SetenvResult<&mut Self> {
        self.check_var_name(name, "set")?;
        self.vars.insert(name.to_owned(), value.into());
        Ok(self)
    }

    /// Removes a variable. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` when `name` is PATH.
    pub fn remove(&mut self, name: &str) -> SetenvResult<bool> {
        self.check_var_name(name, "unset")?;
        Ok(self.vars.remove(name).is_some())
    }

    /// Puts `path` at the front of PATH, once.
    pub fn add_path(&mut self, path: &str) -> &mut Self {
        let path = self.path_entry(path);
        if !path.is_empty() {
            prepend_unique(&mut self.paths, &path);
        }
        self
    }

    /// Removes every occurrence of `path` from PATH. Returns whether it was present.
    pub fn remove_path(&mut self, path: &str) -> bool {
        let path = self.path_entry(path);
        remove_all(&mut self.paths, &path)
    }

    /// A PATH argument in the form entries are stored in.
    fn path_entry(&self, path: &str) -> String {
        match self.flavor {
            Flavor::Posix => path.trim().to_owned(),
            Flavor::Windows => normalize_windows_path(path.trim()),
        }
    }

    /// PATH entries joined with the flavor's separator.
    #[must_use]
    pub fn path_string(&self) -> String {
        join_paths(&self.paths, self.flavor)
    }

    /// The token standing for `group` in PATH.
    #[must_use]
    pub fn sentinel(&self, group: &str) -> String {
        self.flavor.sentinel(group)
    }

    /// Members of a path group, newest first. A missing group is empty.
    #[must_use]
    pub fn group_members(&self, group: &str) -> Vec<String> {
        self.vars
            .get(group)
            .map(|v| split_paths(v, self.flavor))
            .unwrap_or_default()
    }

    /// Whether the group's sentinel is present in PATH.
    #[must_use]
    pub fn has_group(&self, group: &str) -> bool {
        let sentinel = self.sentinel(group);
        self.paths.iter().any(|p| *p == sentinel)
    }

    /// Adds `path` to a path group, creating the group if needed.
    ///
    /// The member is written before the sentinel is inserted so the sentinel
    /// never points at a missing variable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for an invalid group name or a path holding
    /// variable-reference characters.
    pub fn add_to_group(&mut self, group: &str, path: &str) -> SetenvResult<()> {
        self.check_group_name(group)?;
        let path = self.check_literal_path(path)?;

        let mut members = self.group_members(group);
        prepend_unique(&mut members, path);
        let joined = join_paths(&members, self.flavor);
        self.vars.insert(group.to_owned(), joined);

        let sentinel = self.sentinel(group);
        prepend_unique(&mut self.paths, &sentinel);
        Ok(())
    }

    /// Removes `path` from a group, tearing the group down once it is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for an invalid group name or path.
    pub fn remove_from_group(&mut self, group: &str, path: &str) -> SetenvResult<bool> {
        self.remove_from_group_with(group, path, true)
    }

    /// Removes `path` from a group.
    ///
    /// With `remove_if_empty` unset, an emptied group keeps its (empty)
    /// variable and its sentinel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for an invalid group name or path.
    pub fn remove_from_group_with(
        &mut self,
        group: &str,
        path: &str,
        remove_if_empty: bool,
    ) -> SetenvResult<bool> {
        self.check_group_name(group)?;
        let path = self.check_literal_path(path)?;

        let mut members = self.group_members(group);
        if !remove_all(&mut members, path) {
            return Ok(false);
        }
        if members.is_empty() && remove_if_empty {
            self.remove_group(group)?;
        } else {
            let joined = join_paths(&members, self.flavor);
            self.vars.insert(group.to_owned(), joined);
        }
        Ok(true)
    }

    /// Removes a group's sentinel and variable regardless of its members.
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for an invalid group name.
    pub fn remove_group(&mut self, group: &str) -> SetenvResult<bool> {
        self.check_group_name(group)?;
        let sentinel = self.sentinel(group);
        let removed_sentinel = remove_all(&mut self.paths, &sentinel);
        let removed_var = self.vars.remove(group).is_some();
        Ok(removed_sentinel || removed_var)
    }

    fn check_var_name(&self, name: &str, action: &str) -> SetenvResult<()> {
        if name.trim().is_empty() {
            return Err(invalid_operation(format!("cannot {action} an empty variable name")));
        }
        if self.flavor.is_path_var(name) {
            return Err(invalid_operation(format!(
                "cannot {action} PATH directly, use the path operations"
            )));
        }
        Ok(())
    }

    fn check_group_name(&self, group: &str) -> SetenvResult<()> {
        self.check_var_name(group, "use as a path group")?;
        if group.contains(['$', '%']) {
            return Err(invalid_operation(format!(
                "group name '{group}' must not contain '$' or '%'"
            )));
        }
        Ok(())
    }

    fn check_literal_path<'a>(&self, path: &'a str) -> SetenvResult<&'a str> {
        let path = path.trim();
        if path.is_empty() {
            return Err(invalid_operation("group member path is empty"));
        }
        if path.contains(['$', '%']) {
            return Err(invalid_operation(format!(
                "group member '{path}' must be a literal path without '$' or '%'"
            )));
        }
        if path.contains(self.flavor.separator()) {
            return Err(invalid_operation(format!(
                "group member '{path}' must not contain '{}'",
                self.flavor.separator()
            )));
        }
        Ok(path)
    }
}
