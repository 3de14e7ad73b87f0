// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings file and options file behavior through the public API.

use cfg_rs::config::Options;
use cfg_rs::config::settings::SettingsRecord;
use cfg_rs::config::store::{Persisted, SettingsStore};
use cfg_rs::error::{CfgError, SettingsError};
use insta::assert_snapshot;
use tempfile::TempDir;

fn record(url: &str, bare: &str, tree: &str, key: &str) -> SettingsRecord {
    SettingsRecord {
        repository_url: url.to_string(),
        bare_dir: bare.to_string(),
        work_tree: tree.to_string(),
        ssh_key_path: key.to_string(),
    }
}

// =============================================================================
// Settings store
// =============================================================================

#[test]
fn settings_lifecycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.properties");
    let store = SettingsStore::new(&path);

    // First use creates an empty file and reports uninitialized.
    assert!(matches!(
        store.load_initialized(),
        Err(CfgError::Settings(e)) if matches!(*e, SettingsError::Uninitialized { .. })
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    let saved = store
        .update(&record("git@host:me/dots.git", "/h/.dotfiles", "/h", "/h/.ssh/id_rsa"))
        .unwrap();
    assert!(matches!(saved, Persisted::Written(_)));
    assert_snapshot!(std::fs::read_to_string(&path).unwrap(), @r"
    repository = git@host:me/dots.git
    git.dir = /h/.dotfiles
    work.tree = /h
    ssh.key = /h/.ssh/id_rsa
    ");

    // A partial update keeps what it does not mention.
    let saved = store.update(&record("", "/h/.cfg", "", "")).unwrap();
    assert!(matches!(saved, Persisted::Written(_)));
    let loaded = store.load_initialized().unwrap();
    assert_eq!(loaded.repository_url, "git@host:me/dots.git");
    assert_eq!(loaded.bare_dir, "/h/.cfg");

    // Writing the same values again is a no-op.
    assert_eq!(store.update(&loaded).unwrap(), Persisted::Unchanged(loaded));
}

#[test]
fn settings_hand_edited_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.properties");
    std::fs::write(
        &path,
        "# my dotfiles\n\n  git.dir=/srv/dots  \nwork.tree = /srv\ncolor = blue\nnonsense\n",
    )
    .unwrap();

    let loaded = SettingsStore::new(&path).load().unwrap();
    assert!(loaded.is_initialized());
    assert_eq!(loaded.bare_dir, "/srv/dots");
    assert_eq!(loaded.work_tree, "/srv");
    assert!(loaded.repository_url.is_empty());
}

// =============================================================================
// Options file
// =============================================================================

#[test]
fn options_from_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cfg.toml");
    std::fs::write(
        &file,
        "git = \"/usr/local/bin/git\"\nsettings_file = \"/tmp/cfg/settings\"\nlog_level = 2\n",
    )
    .unwrap();

    let options = Options::builder()
        .add_toml_file_optional(&file)
        .build()
        .unwrap();

    assert_eq!(options.git, "/usr/local/bin/git");
    assert_eq!(
        options.settings_path().unwrap(),
        std::path::PathBuf::from("/tmp/cfg/settings")
    );
}

#[test]
fn options_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let options = Options::builder()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .build()
        .unwrap();
    assert_eq!(options.git, "git");
    assert!(options.settings_file.is_none());
}
