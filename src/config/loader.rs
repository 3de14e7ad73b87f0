// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool options loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! OptionsLoader::new()
//!   .add_toml_file_optional(~/.config/cfg/cfg.toml)
//!   .add_toml_str()
//!   .with_env_prefix("CFG")
//!        |
//!        v
//!    build() --> Options
//! ```

use std::path::Path;

use anyhow::Context;
use config::{Environment, File, FileFormat};

use super::Options;
use crate::error::Result;

/// Builder for loading [`Options`] from multiple sources.
pub struct OptionsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
}

impl OptionsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
        }
    }

    /// Adds a TOML options file that may be absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        );
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Read `<PREFIX>_<KEY>` environment variables, e.g. `CFG_SETTINGS_FILE`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the options from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options file has invalid TOML syntax.
    /// - A value has the wrong type (e.g. `CFG_LOG_LEVEL=loud`).
    /// - The merged options fail validation.
    pub fn build(self) -> Result<Options> {
        let builder = match &self.env_prefix {
            // Double underscore separates nesting so `settings_file` stays one key.
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build().context("failed to read tool options")?;
        let options: Options = cfg
            .try_deserialize()
            .context("invalid tool options")?;
        options.validate()?;
        Ok(options)
    }
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}
