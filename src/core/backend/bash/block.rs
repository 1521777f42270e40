// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The marker-delimited block inside an rc file.
//!
//! ```text
//! ...user content...            kept verbatim
//! # START setenvironment
//! export FOO=bar                owned by this program
//! export PATH=/opt/bin:$PATH
//! # END setenvironment
//! ...user content...            kept verbatim
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{BackendError, SetenvResult};

pub const START_MARKER: &str = "# START setenvironment";
pub const END_MARKER: &str = "# END setenvironment";

/// Reads the whole rc file. A missing file reads as empty.
///
/// # Errors
///
/// Returns `BackendUnavailable` when the file cannot be read or is not UTF-8.
pub fn read_text(path: &Path) -> SetenvResult<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(String::new()),
        Err(source) => {
            return Err(BackendError::Read {
                path: path.display().to_string(),
                source,
            }
            .into());
        }
    };
    String::from_utf8(bytes).map_err(|_| {
        BackendError::Encoding {
            path: path.display().to_string(),
        }
        .into()
    })
}

/// Reads the lines between the markers.
///
/// # Errors
///
/// Returns `BackendUnavailable` when the file cannot be read.
pub fn read_block(path: &Path) -> SetenvResult<Vec<String>> {
    let text = read_text(path)?;
    let lines = extract_block(&text, path);
    debug!(path = %path.display(), lines = lines.len(), "read rc block");
    Ok(lines)
}

/// Lines strictly between the markers of `text`.
///
/// No start marker yields nothing; a missing end marker reads to the end of
/// the text and logs a warning.
#[must_use]
pub fn extract_block(text: &str, origin: &Path) -> Vec<String> {
    let mut lines = text.lines();
    if !lines.by_ref().any(|l| l.starts_with(START_MARKER)) {
        return Vec::new();
    }
    let mut block = Vec::new();
    for line in lines {
        if line.starts_with(END_MARKER) {
            return block;
        }
        block.push(line.to_owned());
    }
    warn!(
        path = %origin.display(),
        "malformed block: '{END_MARKER}' missing, reading to end of file"
    );
    block
}

/// Replaces the block content of `text` with `block`.
///
/// Text outside the markers is copied byte for byte, line endings included.
/// New lines use the line ending of the start marker, or the file's first
/// line ending when a block is appended.
#[must_use]
pub fn replace_block(text: &str, block: &[String]) -> String {
    let mut offset = 0;
    let mut start: Option<(usize, &str)> = None;
    let mut end: Option<usize> = None;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        match start {
            None if trimmed.starts_with(START_MARKER) => {
                start = Some((offset + line.len(), line));
            }
            Some(_) if trimmed.starts_with(END_MARKER) => {
                end = Some(offset);
                break;
            }
            _ => {}
        }
        offset += line.len();
    }

    let block_len: usize = block.iter().map(|l| l.len() + 2).sum();
    let mut out = String::with_capacity(text.len() + block_len);
    match start {
        Some((body, start_line)) => {
            let eol = line_ending(start_line);
            out.push_str(&text[..body]);
            if !start_line.ends_with('\n') {
                out.push_str(eol);
            }
            push_lines(&mut out, block, eol);
            match end {
                Some(end) => out.push_str(&text[end..]),
                None => {
                    out.push_str(END_MARKER);
                    out.push_str(eol);
                }
            }
        }
        None => {
            let eol = text.split_inclusive('\n').next().map_or("\n", line_ending);
            out.push_str(text);
            if !text.is_empty() {
                if !text.ends_with('\n') {
                    out.push_str(eol);
                }
                out.push_str(eol);
            }
            out.push_str(START_MARKER);
            out.push_str(eol);
            push_lines(&mut out, block, eol);
            out.push_str(END_MARKER);
            out.push_str(eol);
        }
    }
    out
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

fn push_lines(out: &mut String, lines: &[String], eol: &str) {
    for line in lines {
        out.push_str(line);
        out.push_str(eol);
    }
}

/// Writes `block` between the markers of the rc file, creating it if needed.
///
/// Returns `false` without touching the file when the content is unchanged.
///
/// # Errors
///
/// Returns `BackendUnavailable` when the file cannot be read or written.
pub fn write_block(path: &Path, block: &[String]) -> SetenvResult<bool> {
    let current = read_text(path)?;
    let updated = replace_block(&current, block);
    if updated == current {
        debug!(path = %path.display(), "rc block unchanged");
        return Ok(false);
    }

    let write_err = |source| BackendError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, updated).map_err(write_err)?;
    debug!(path = %path.display(), lines = block.len(), "wrote rc block");
    Ok(true)
}
