// setenv-rs: Persistent environment variable manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! [`RegistryStore`] over the Win32 registry API.
//!
//! ```text
//! values(scope)    RegOpenKeyExW(KEY_READ) + RegEnumValueW loop
//! set_value        RegOpenKeyExW(KEY_SET_VALUE) + RegSetValueExW(REG_EXPAND_SZ)
//! delete_value     RegOpenKeyExW(KEY_SET_VALUE) + RegDeleteValueW
//! broadcast        SendMessageTimeoutW(HWND_BROADCAST, WM_SETTINGCHANGE, "Environment")
//! ```

use std::collections::BTreeMap;

use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS, LPARAM, WIN32_ERROR,
    WPARAM,
};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE, REG_EXPAND_SZ,
    REG_SAM_FLAGS, REG_SZ, REG_VALUE_TYPE, RegCloseKey, RegDeleteValueW, RegEnumValueW,
    RegOpenKeyExW, RegSetValueExW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
};
use windows::core::{PCWSTR, PWSTR};

use super::{RegistryStore, Scope};
use crate::error::{BackendError, SetenvResult};
use crate::utility::encoding::{registry_bytes, registry_string};

/// Longest value name the registry allows, plus the terminator.
const MAX_NAME_LEN: usize = 16_384;

const BROADCAST_TIMEOUT_MS: u32 = 5000;

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn registry_error(scope: Scope, what: &str, code: WIN32_ERROR) -> BackendError {
    BackendError::Registry {
        key: scope.display_key(),
        message: format!(
            "{what}: {}",
            std::io::Error::from_raw_os_error(i32::try_from(code.0).unwrap_or(i32::MAX))
        ),
    }
}

/// An open registry key, closed on drop.
struct Key(HKEY);

impl Key {
    fn open(scope: Scope, access: REG_SAM_FLAGS) -> SetenvResult<Self> {
        let root = match scope {
            Scope::User => HKEY_CURRENT_USER,
            Scope::System => HKEY_LOCAL_MACHINE,
        };
        let path = wide(scope.key_path());
        let mut key = HKEY::default();
        // SAFETY: `path` is NUL-terminated and outlives the call; `key` is a
        // valid out pointer.
        let status = unsafe { RegOpenKeyExW(root, PCWSTR(path.as_ptr()), None, access, &raw mut key) };
        if status != ERROR_SUCCESS {
            return Err(registry_error(scope, "open", status).into());
        }
        Ok(Self(key))
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        // SAFETY: the handle came from a successful RegOpenKeyExW.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// The live Windows registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinRegistry;

impl RegistryStore for WinRegistry {
    fn values(&self, scope: Scope) -> SetenvResult<BTreeMap<String, String>> {
        let key = Key::open(scope, KEY_READ)?;
        let mut values = BTreeMap::new();
        let mut name = vec![0u16; MAX_NAME_LEN];
        let mut data = vec![0u8; 4096];
        let mut index = 0u32;

        loop {
            let mut name_len = u32::try_from(name.len()).unwrap_or(u32::MAX);
            let mut data_len = u32::try_from(data.len()).unwrap_or(u32::MAX);
            let mut kind = REG_VALUE_TYPE::default();
            // SAFETY: the buffers and their lengths describe live allocations.
            let status = unsafe {
                RegEnumValueW(
                    key.0,
                    index,
                    Some(PWSTR(name.as_mut_ptr())),
                    &raw mut name_len,
                    None,
                    Some(&raw mut kind),
                    Some(data.as_mut_ptr()),
                    Some(&raw mut data_len),
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status == ERROR_MORE_DATA {
                data.resize(data_len as usize, 0);
                continue;
            }
            if status != ERROR_SUCCESS {
                return Err(registry_error(scope, "enumerate", status).into());
            }
            index += 1;

            if kind != REG_SZ && kind != REG_EXPAND_SZ {
                continue;
            }
            let value_name = String::from_utf16_lossy(&name[..name_len as usize]);
            let value = registry_string(&data[..data_len as usize]);
            values.insert(value_name, value);
        }
        Ok(values)
    }

    fn set_value(&self, name: &str, value: &str) -> SetenvResult<()> {
        let key = Key::open(Scope::User, KEY_SET_VALUE)?;
        let wide_name = wide(name);
        let bytes = registry_bytes(value);
        // SAFETY: `wide_name` is NUL-terminated and `bytes` is a complete
        // REG_EXPAND_SZ payload.
        let status = unsafe {
            RegSetValueExW(
                key.0,
                PCWSTR(wide_name.as_ptr()),
                None,
                REG_EXPAND_SZ,
                Some(&bytes),
            )
        };
        if status != ERROR_SUCCESS {
            return Err(registry_error(Scope::User, &format!("set '{name}'"), status).into());
        }
        Ok(())
    }

    fn delete_value(&self, name: &str) -> SetenvResult<()> {
        let key = Key::open(Scope::User, KEY_SET_VALUE)?;
        let wide_name = wide(name);
        // SAFETY: `wide_name` is NUL-terminated.
        let status = unsafe { RegDeleteValueW(key.0, PCWSTR(wide_name.as_ptr())) };
        if status != ERROR_SUCCESS && status != ERROR_FILE_NOT_FOUND {
            return Err(registry_error(Scope::User, &format!("delete '{name}'"), status).into());
        }
        Ok(())
    }

    fn broadcast(&self) -> SetenvResult<()> {
        let area = wide("Environment");
        let mut result = 0usize;
        // SAFETY: `area` is NUL-terminated and outlives the synchronous call.
        let sent = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                WPARAM(0),
                LPARAM(area.as_ptr() as isize),
                SMTO_ABORTIFHUNG,
                BROADCAST_TIMEOUT_MS,
                Some(&raw mut result),
            )
        };
        if sent.0 == 0 {
            return Err(BackendError::Registry {
                key: "HWND_BROADCAST".to_string(),
                message: std::io::Error::last_os_error().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
