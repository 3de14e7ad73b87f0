// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings merging.
//!
//! ```text
//! SettingsRecord (current) + SettingsRecord (partial) --> field-by-field merge
//! ```
//!
//! A blank incoming field never replaces the current value.

use super::settings::SettingsRecord;

/// Merge a partial update over the current settings.
///
/// Incoming values are trimmed; blank ones leave the current value in place.
#[must_use]
pub fn merge_settings(current: &SettingsRecord, partial: &SettingsRecord) -> SettingsRecord {
    SettingsRecord {
        repository_url: pick(&current.repository_url, &partial.repository_url),
        bare_dir: pick(&current.bare_dir, &partial.bare_dir),
        work_tree: pick(&current.work_tree, &partial.work_tree),
        ssh_key_path: pick(&current.ssh_key_path, &partial.ssh_key_path),
    }
}

fn pick(current: &str, incoming: &str) -> String {
    let incoming = incoming.trim();
    if incoming.is_empty() {
        current.to_string()
    } else {
        incoming.to_string()
    }
}
