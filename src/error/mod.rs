// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                CfgError (~24 bytes)
//!                       |
//!   +---------+---------+---------+--------+-------+
//!   |         |         |         |        |       |
//!   v         v         v         v        v       v
//! Settings Validation  Git     Process    Io     Other
//!   Box       Box      Box       Box      Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Settings   HomeDirUnavailable, Create/Read/WriteFailed, Uninitialized,
//!              LineBreak
//!   Validation MissingFlag, NotAbsolute, LineBreak
//!   Git        AlreadyInitialized, StepFailed
//!   Process    ExecutableNotFound, SpawnFailed, Terminated
//! ```
//!
//! A missing settings file and malformed settings lines are not errors: the
//! store recovers from both and only logs them. A non-zero exit of a
//! forwarded git command is not an error either, its code is returned as-is.
//!
//! The wrapper variants are transparent and the leaf messages leave out their
//! `#[source]`, so `{:#}` prints each cause once.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CfgError`].
pub type CfgResult<T> = std::result::Result<T, CfgError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum CfgError {
    /// Settings file or path resolution failed.
    #[error(transparent)]
    Settings(#[from] Box<SettingsError>),

    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] Box<ValidationError>),

    /// A git operation failed.
    #[error(transparent)]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error(transparent)]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl CfgError {
    /// Whether this error should be followed by the `init` usage text.
    #[must_use]
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CfgError {
                fn from(err: $error) -> Self {
                    CfgError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SettingsError => Settings,
    ValidationError => Validation,
    GitError => Git,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Settings Errors ---

/// Settings file and path resolution errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The current user's home directory could not be determined.
    #[error("cannot determine the home directory of the current user")]
    HomeDirUnavailable,

    /// The settings file or its parent directory could not be created.
    #[error("failed to create '{path}'")]
    CreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be read.
    #[error("failed to read '{path}'")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("failed to write '{path}'")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings do not name a bare repository and work tree yet.
    #[error("not initialized, '{path}' has no git.dir/work.tree")]
    Uninitialized { path: String },

    /// A value would span more than one line and corrupt the file.
    #[error("refusing to write '{path}': the {key} value contains a line break")]
    LineBreak { key: String, path: String },
}

impl SettingsError {
    pub(crate) fn create_failed(path: &Path, source: std::io::Error) -> Self {
        Self::CreateFailed {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn read_failed(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write_failed(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Validation Errors ---

/// Rejected user input for `init`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required flag was not given or was blank.
    #[error("missing required flag '-{flag}'")]
    MissingFlag { flag: String },

    /// A path flag did not resolve to an absolute path.
    #[error("'-{flag}' must be an absolute path, got '{path}'")]
    NotAbsolute { flag: String, path: String },

    /// A flag value contains a line break.
    #[error("'-{flag}' must not contain a line break")]
    LineBreak { flag: String },
}

// --- Git Errors ---

/// Git bootstrap errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The bare repository directory already exists.
    #[error("'{path}' already exists, refusing to overwrite it (use -force to reconfigure)")]
    AlreadyInitialized { path: String },

    /// A bootstrap step exited with a non-zero code.
    #[error("{step} failed: `{command}` exited with code {code}")]
    StepFailed {
        step: String,
        command: String,
        code: i32,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process ended without an exit code.
    #[error("process '{command}' was terminated without an exit code")]
    Terminated { command: String },
}
