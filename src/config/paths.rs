// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path resolution.
//!
//! ```text
//! ~/.config/cfg/
//!   config.properties   (settings: repository, git.dir, work.tree, ssh.key)
//!   cfg.toml            (optional tool options)
//!
//! "~"        --> $HOME
//! "~/x"      --> $HOME/x
//! "$VAR/x"   --> value of VAR + "/x"
//! "${VAR}x"  --> value of VAR + "x"
//! ```

use anyhow::Context;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

use crate::error::{CfgResult, Result, SettingsError};

/// Directory holding every file `cfg` owns, relative to the home directory.
pub const CONFIG_DIR: &str = ".config/cfg";

/// Settings file name inside [`CONFIG_DIR`].
pub const SETTINGS_FILE_NAME: &str = "config.properties";

/// Optional tool options file name inside [`CONFIG_DIR`].
pub const OPTIONS_FILE_NAME: &str = "cfg.toml";

/// Home directory of the current user.
///
/// # Errors
///
/// Returns `SettingsError::HomeDirUnavailable` if the OS cannot tell.
pub fn home_dir() -> CfgResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| SettingsError::HomeDirUnavailable.into())
}

/// Expand a leading `~` against the given home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some("") => home.to_path_buf(),
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Expand a leading `~` against the current user's home directory.
///
/// The home directory is only looked up when the path needs it.
///
/// # Errors
///
/// Returns `SettingsError::HomeDirUnavailable` if expansion is needed and the
/// home directory cannot be determined.
pub fn resolve(path: &str) -> CfgResult<PathBuf> {
    if path == "~" || path.starts_with("~/") {
        Ok(expand_tilde(path, &home_dir()?))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Replace `$NAME` and `${NAME}` with values from `lookup`.
///
/// Unknown variables expand to the empty string, like a shell would.
///
/// # Errors
///
/// Returns an error if the variable pattern fails to compile.
pub fn expand_vars_with<F>(input: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return Ok(input.to_string());
    }

    let pattern = Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .context("failed to compile environment variable pattern")?;

    let expanded = pattern.replace_all(input, |caps: &Captures<'_>| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .and_then(|name| lookup(name.as_str()))
            .unwrap_or_default()
    });
    Ok(expanded.into_owned())
}

/// Replace `$NAME` and `${NAME}` with values from the process environment.
///
/// # Errors
///
/// Returns an error if the variable pattern fails to compile.
pub fn expand_env(input: &str) -> Result<String> {
    expand_vars_with(input, |name| std::env::var(name).ok())
}

/// Directory holding the settings and options files.
///
/// # Errors
///
/// Returns `SettingsError::HomeDirUnavailable` if the home directory is unknown.
pub fn config_dir() -> CfgResult<PathBuf> {
    Ok(home_dir()?.join(CONFIG_DIR))
}

/// Default location of the settings file.
///
/// # Errors
///
/// Returns `SettingsError::HomeDirUnavailable` if the home directory is unknown.
pub fn settings_file() -> CfgResult<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Default location of the optional options file.
///
/// # Errors
///
/// Returns `SettingsError::HomeDirUnavailable` if the home directory is unknown.
pub fn options_file() -> CfgResult<PathBuf> {
    Ok(config_dir()?.join(OPTIONS_FILE_NAME))
}
