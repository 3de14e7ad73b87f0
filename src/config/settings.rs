// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The persisted settings record and its `key = value` format.
//!
//! ```text
//! repository = git@github.com:me/dotfiles.git
//! git.dir = /home/me/.dotfiles
//! work.tree = /home/me
//! ssh.key = /home/me/.ssh/id_rsa
//! ```
//!
//! Keys are written in this fixed order. When reading, blank lines and `#`
//! comments are skipped, and lines that are not `key = value` pairs of a known
//! key are reported back as [`SkippedLine`]s instead of failing the parse.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const REPOSITORY_KEY: &str = "repository";
pub const GIT_DIR_KEY: &str = "git.dir";
pub const WORK_TREE_KEY: &str = "work.tree";
pub const SSH_KEY_KEY: &str = "ssh.key";

/// Where the dotfiles live and how to reach their remote.
///
/// Every field may be empty until `cfg init` has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Remote URL of the dotfiles repository.
    #[serde(rename = "repository")]
    pub repository_url: String,
    /// Bare repository location.
    #[serde(rename = "git.dir")]
    pub bare_dir: String,
    /// Directory the bare repository tracks files in.
    #[serde(rename = "work.tree")]
    pub work_tree: String,
    /// Private key used for the remote.
    #[serde(rename = "ssh.key")]
    pub ssh_key_path: String,
}

/// Why a settings line was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line has no `=`.
    NoSeparator,
    /// The key is not one of the four known keys.
    UnknownKey,
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSeparator => "no '=' separator",
            Self::UnknownKey => "unknown key",
        }
    }
}

/// A line that [`SettingsRecord::parse`] ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub number: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Result of parsing a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSettings {
    pub record: SettingsRecord,
    pub skipped: Vec<SkippedLine>,
}

impl SettingsRecord {
    /// Whether passthrough commands can run: the bare repository and the work
    /// tree must both be set. The remote URL and SSH key are only needed by
    /// `init`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.bare_dir.trim().is_empty() && !self.work_tree.trim().is_empty()
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.trim().is_empty())
    }

    /// The first key whose value contains a line break. Such a record cannot
    /// be written, since the extra line would be read back as another entry.
    #[must_use]
    pub fn multiline_key(&self) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(_, value)| value.contains(['\n', '\r']))
            .map(|(key, _)| key)
    }

    /// `(key, value)` pairs in file order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (REPOSITORY_KEY, &self.repository_url),
            (GIT_DIR_KEY, &self.bare_dir),
            (WORK_TREE_KEY, &self.work_tree),
            (SSH_KEY_KEY, &self.ssh_key_path),
        ]
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            REPOSITORY_KEY => Some(&mut self.repository_url),
            GIT_DIR_KEY => Some(&mut self.bare_dir),
            WORK_TREE_KEY => Some(&mut self.work_tree),
            SSH_KEY_KEY => Some(&mut self.ssh_key_path),
            _ => None,
        }
    }

    /// Serialize to the on-disk format. Equal records render to equal bytes.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Parse the on-disk format. Never fails; see [`SkippedLine`].
    ///
    /// Keys and values are trimmed. When a key repeats, the last value wins.
    #[must_use]
    pub fn parse(content: &str) -> ParsedSettings {
        let mut parsed = ParsedSettings::default();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let skip = |reason| SkippedLine {
                number: index + 1,
                content: line.to_string(),
                reason,
            };

            let Some((key, value)) = trimmed.split_once('=') else {
                parsed.skipped.push(skip(SkipReason::NoSeparator));
                continue;
            };

            match parsed.record.field_mut(key.trim()) {
                Some(field) => *field = value.trim().to_string(),
                None => parsed.skipped.push(skip(SkipReason::UnknownKey)),
            }
        }

        parsed
    }
}

impl fmt::Display for SettingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().trim_end())
    }
}
