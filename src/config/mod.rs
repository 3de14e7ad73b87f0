// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for cfg-rs.
//!
//! Two distinct files live under `~/.config/cfg/`:
//!
//! ```text
//! config.properties   settings record, written by `cfg init`   (store, settings)
//! cfg.toml            tool options, only ever read              (Options)
//! ```
//!
//! # Tool Options Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ~/.config/cfg/cfg.toml
//! 3. CFG_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CFG_GIT=/usr/bin/git          → git = "/usr/bin/git"
//! CFG_SETTINGS_FILE=/tmp/x      → settings_file = "/tmp/x"
//! CFG_LOG_LEVEL=4               → log_level = 4
//! CFG_LOG_FILE=~/cfg.log        → log_file = "~/cfg.log"
//! ```

pub mod loader;
pub mod merge;
pub mod paths;
pub mod settings;
pub mod store;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::logging::{LogConfig, LogLevel};

use loader::OptionsLoader;
use store::SettingsStore;

/// Environment variable prefix for tool options.
pub const ENV_PREFIX: &str = "CFG";

fn default_git() -> String {
    "git".to_string()
}

const fn default_file_log_level() -> LogLevel {
    LogLevel::TRACE
}

/// Tool options: how `cfg` itself behaves, as opposed to the settings record
/// that describes the dotfiles repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Git program name or path.
    #[serde(default = "default_git")]
    pub git: String,
    /// Settings file override. `~` and `$VAR` are expanded.
    pub settings_file: Option<String>,
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Log file level (0-5).
    #[serde(default = "default_file_log_level")]
    pub file_log_level: LogLevel,
    /// Optional log file. `~` and `$VAR` are expanded.
    pub log_file: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            git: default_git(),
            settings_file: None,
            log_level: LogLevel::INFO,
            file_log_level: default_file_log_level(),
            log_file: None,
        }
    }
}

impl Options {
    /// Create a new options builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cfg_rs::config::Options;
    ///
    /// let options = Options::builder()
    ///     .add_toml_file_optional("/home/me/.config/cfg/cfg.toml")
    ///     .with_env_prefix("CFG")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> OptionsLoader {
        OptionsLoader::new()
    }

    /// Load options from the default file and the `CFG_*` environment.
    ///
    /// Without a home directory the options file is skipped and only the
    /// environment is consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the options file or an environment value is invalid.
    pub fn load() -> Result<Self> {
        let mut loader = Self::builder();
        if let Ok(path) = paths::options_file() {
            loader = loader.add_toml_file_optional(path);
        }
        loader.with_env_prefix(ENV_PREFIX).build()
    }

    /// Load options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Options` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns an error if the git program is blank.
    pub fn validate(&self) -> Result<()> {
        if self.git.trim().is_empty() {
            anyhow::bail!("option 'git' must name a program");
        }
        Ok(())
    }

    /// Resolved settings file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed and unknown, or the
    /// override cannot be expanded.
    pub fn settings_path(&self) -> Result<PathBuf> {
        match self.settings_file.as_deref() {
            Some(path) if !path.trim().is_empty() => expand_path(path),
            _ => Ok(paths::settings_file()?),
        }
    }

    /// The settings store these options point at.
    ///
    /// # Errors
    ///
    /// See [`Self::settings_path`].
    pub fn settings_store(&self) -> Result<SettingsStore> {
        Ok(SettingsStore::new(self.settings_path()?))
    }

    /// Logging configuration, with the console raised to debug when `debug`
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file path cannot be expanded.
    pub fn log_config(&self, debug: bool) -> Result<LogConfig> {
        let console_level = if debug {
            self.log_level.max(LogLevel::DEBUG)
        } else {
            self.log_level
        };
        let log_file = match self.log_file.as_deref() {
            Some(path) if !path.trim().is_empty() => Some(expand_path(path)?),
            _ => None,
        };

        Ok(LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(self.file_log_level)
            .maybe_with_log_file(log_file)
            .build())
    }
}

/// `$VAR` then `~` expansion.
fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = paths::expand_env(path.trim())?;
    Ok(paths::resolve(&expanded)?)
}
