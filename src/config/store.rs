// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings file persistence.
//!
//! ```text
//! load()
//!   file missing --> mkdir -p parent, create empty file, zero record
//!   file present --> parse, warn about skipped lines
//!
//! update(partial)
//!   load --> merge_settings --> equal? --> Unchanged (no write)
//!                                  \--> temp file + rename --> Written
//! ```
//!
//! The store is the only code that touches the settings file. Concurrent
//! `cfg` processes are not coordinated.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::merge::merge_settings;
use super::settings::SettingsRecord;
use crate::error::{CfgResult, SettingsError};

/// Outcome of [`SettingsStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    /// The merged record equals what was on disk; the file was left alone.
    Unchanged(SettingsRecord),
    /// The merged record was written.
    Written(SettingsRecord),
}

impl Persisted {
    #[must_use]
    pub fn into_record(self) -> SettingsRecord {
        match self {
            Self::Unchanged(record) | Self::Written(record) => record,
        }
    }
}

/// Reads and writes the settings file at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, creating an empty file on first use.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if the file cannot be read or created.
    pub fn load(&self) -> CfgResult<SettingsRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "settings file missing, creating it");
                self.create_empty()?;
                return Ok(SettingsRecord::default());
            }
            Err(e) => return Err(SettingsError::read_failed(&self.path, e).into()),
        };

        let parsed = SettingsRecord::parse(&content);
        for line in &parsed.skipped {
            warn!(
                path = %self.path.display(),
                line = line.number,
                reason = line.reason.as_str(),
                "ignoring settings line"
            );
        }
        debug!(path = %self.path.display(), "settings loaded");
        Ok(parsed.record)
    }

    /// Load the settings and require them to name a bare repository and work tree.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Uninitialized` if either is blank, or any error
    /// from [`Self::load`].
    pub fn load_initialized(&self) -> CfgResult<SettingsRecord> {
        let record = self.load()?;
        if record.is_initialized() {
            Ok(record)
        } else {
            Err(SettingsError::Uninitialized {
                path: self.path.display().to_string(),
            }
            .into())
        }
    }

    /// Merge `partial` into the stored settings and persist the result if it
    /// changed anything.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if the file cannot be read or written, or if
    /// a merged value contains a line break.
    pub fn update(&self, partial: &SettingsRecord) -> CfgResult<Persisted> {
        let current = self.load()?;
        let merged = merge_settings(&current, partial);

        if merged == current {
            debug!(path = %self.path.display(), "settings unchanged");
            return Ok(Persisted::Unchanged(merged));
        }

        self.store(&merged)?;
        info!(path = %self.path.display(), "settings saved");
        Ok(Persisted::Written(merged))
    }

    /// Replace the file content with `record`.
    ///
    /// The new content is written to a temporary file next to the settings
    /// file and renamed over it.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::LineBreak` if a value spans several lines, or
    /// a `SettingsError` if the file cannot be written.
    pub fn store(&self, record: &SettingsRecord) -> CfgResult<()> {
        if let Some(key) = record.multiline_key() {
            return Err(SettingsError::LineBreak {
                key: key.to_string(),
                path: self.path.display().to_string(),
            }
            .into());
        }

        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| SettingsError::create_failed(dir, e))?;

        let mut temp =
            NamedTempFile::new_in(dir).map_err(|e| SettingsError::write_failed(&self.path, e))?;
        temp.write_all(record.render().as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| SettingsError::write_failed(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| SettingsError::write_failed(&self.path, e.error))?;
        Ok(())
    }

    fn create_empty(&self) -> CfgResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| SettingsError::create_failed(dir, e))?;
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| SettingsError::create_failed(&self.path, e))?;
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}
