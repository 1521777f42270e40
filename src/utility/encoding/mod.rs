// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for shell output and registry data.
//!
//! ```text
//! shell stdout      --decode_output--->   UTF-8 (fallback Windows-1252)
//! registry REG_*SZ  --registry_string-->  UTF-8 (trailing NULs trimmed)
//! UTF-8             --registry_bytes--->  UTF-16 LE + NUL
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// Decodes captured process output: UTF-8 when valid, Windows-1252 otherwise.
///
/// # Example
/// ```
/// use setenv_rs::utility::encoding::decode_output;
///
/// assert_eq!(decode_output(b"caf\xe9"), "café");
/// ```
#[must_use]
pub fn decode_output(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Decodes a registry string value, dropping the trailing NUL terminator(s).
#[must_use]
pub fn registry_string(bytes: &[u8]) -> String {
    let text = utf16_le_to_utf8(bytes);
    text.trim_end_matches('\0').to_owned()
}

/// Encodes a string as NUL-terminated UTF-16 LE bytes for the registry.
#[must_use]
pub fn registry_bytes(value: &str) -> Vec<u8> {
    value
        .encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

/// Converts UTF-16 LE bytes to UTF-8.
fn utf16_le_to_utf8(bytes: &[u8]) -> Cow<'static, str> {
    // A stray odd byte is dropped.
    let len = bytes.len() & !1;
    if len == 0 {
        return Cow::Borrowed("");
    }

    let u16_slice: Vec<u16> = bytes[..len]
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    Cow::Owned(String::from_utf16_lossy(&u16_slice))
}
