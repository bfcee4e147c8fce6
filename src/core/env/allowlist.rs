// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variables and search directories admitted into a cleanup environment.
//!
//! ```text
//! host env --(ALLOWED_ENV filter)--> cleanup vars
//! SystemRoot (Windows) ----------> cleanup PATH
//! ```

/// Variables copied into a cleanup environment on Windows.
pub const WINDOWS_ALLOWED_ENV: &[&str] = &[
    "ALLUSERSPROFILE",
    "APPDATA",
    "CommonProgramFiles",
    "CommonProgramFiles(x86)",
    "CommonProgramW6432",
    "COMPUTERNAME",
    "ComSpec",
    "HOMEDRIVE",
    "HOMEPATH",
    "LOCALAPPDATA",
    "LOGONSERVER",
    "NUMBER_OF_PROCESSORS",
    "OS",
    "PATHEXT",
    "PROCESSOR_ARCHITECTURE",
    "PROCESSOR_ARCHITEW6432",
    "PROCESSOR_IDENTIFIER",
    "PROCESSOR_LEVEL",
    "PROCESSOR_REVISION",
    "ProgramData",
    "ProgramFiles",
    "ProgramFiles(x86)",
    "ProgramW6432",
    "PROMPT",
    "PSModulePath",
    "PUBLIC",
    "SystemDrive",
    "SystemRoot",
    "TEMP",
    "TMP",
    "USERDNSDOMAIN",
    "USERDOMAIN",
    "USERDOMAIN_ROAMINGPROFILE",
    "USERNAME",
    "USERPROFILE",
    "windir",
    // Windows Terminal
    "SESSIONNAME",
    "WT_SESSION",
    "WSLENV",
    // Proxy settings honoured by curl-based downloaders
    "http_proxy",
    "https_proxy",
    // Custom SSH executable or command for git
    "GIT_SSH",
    "GIT_SSH_COMMAND",
    // ssh-agent based authentication
    "SSH_AUTH_SOCK",
    "SSH_AGENT_PID",
];

/// Variables copied into a cleanup environment on POSIX systems.
pub const POSIX_ALLOWED_ENV: &[&str] = &[
    "HOME",
    "USER",
    "LOGNAME",
    "SHELL",
    "TERM",
    "LANG",
    "LANGUAGE",
    "LC_ALL",
    "LC_CTYPE",
    "TZ",
    "TMPDIR",
    "DISPLAY",
    "XDG_RUNTIME_DIR",
    // Proxy settings honoured by curl-based downloaders
    "http_proxy",
    "https_proxy",
    "no_proxy",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "NO_PROXY",
    // Custom SSH executable or command for git
    "GIT_SSH",
    "GIT_SSH_COMMAND",
    // ssh-agent based authentication
    "SSH_AUTH_SOCK",
    "SSH_AGENT_PID",
];

/// Allow-list for the platform this binary was built for.
#[cfg(windows)]
pub const ALLOWED_ENV: &[&str] = WINDOWS_ALLOWED_ENV;

/// Allow-list for the platform this binary was built for.
#[cfg(not(windows))]
pub const ALLOWED_ENV: &[&str] = POSIX_ALLOWED_ENV;

/// Returns the allow-listed spelling of `key`, if admitted.
///
/// Windows variable names are case-insensitive, so `Path`-style spellings
/// there map onto the canonical entry.
#[must_use]
pub fn allowed_name(key: &str) -> Option<&'static str> {
    if cfg!(windows) {
        ALLOWED_ENV
            .iter()
            .copied()
            .find(|name| name.eq_ignore_ascii_case(key))
    } else {
        ALLOWED_ENV.iter().copied().find(|name| *name == key)
    }
}

/// Fixed system search path for a Windows cleanup environment.
#[must_use]
pub fn windows_cleanup_path(system_root: &str) -> Vec<String> {
    vec![
        format!("{system_root}\\System32"),
        system_root.to_string(),
        format!("{system_root}\\System32\\Wbem"),
        format!("{system_root}\\System32\\WindowsPowerShell\\v1.0"),
    ]
}

/// Fixed system search path for a POSIX cleanup environment.
#[must_use]
pub fn posix_cleanup_path() -> Vec<String> {
    [
        "/usr/local/sbin",
        "/usr/local/bin",
        "/usr/sbin",
        "/usr/bin",
        "/sbin",
        "/bin",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Fixed cleanup search path for this platform.
///
/// `system_root` is only consulted on Windows.
#[must_use]
pub fn cleanup_path(system_root: Option<&str>) -> Vec<String> {
    if cfg!(windows) {
        windows_cleanup_path(system_root.unwrap_or_default())
    } else {
        posix_cleanup_path()
    }
}
