// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Options;
use super::merge::merge_settings;
use super::paths::{expand_tilde, expand_vars_with};
use super::settings::{SettingsRecord, SkipReason};
use super::store::{Persisted, SettingsStore};
use crate::error::{CfgError, SettingsError};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_record() -> SettingsRecord {
    SettingsRecord {
        repository_url: "git@github.com:me/dotfiles.git".to_string(),
        bare_dir: "/home/me/.dotfiles".to_string(),
        work_tree: "/home/me".to_string(),
        ssh_key_path: "/home/me/.ssh/id_ed25519".to_string(),
    }
}

fn store_in(dir: &TempDir) -> SettingsStore {
    SettingsStore::new(dir.path().join("cfg").join("config.properties"))
}

// =============================================================================
// Path resolution
// =============================================================================

#[test]
fn test_expand_tilde() {
    let home = Path::new("/home/me");
    assert_eq!(expand_tilde("~", home), PathBuf::from("/home/me"));
    assert_eq!(expand_tilde("~/", home), PathBuf::from("/home/me"));
    assert_eq!(
        expand_tilde("~/.dotfiles", home),
        PathBuf::from("/home/me/.dotfiles")
    );
    assert_eq!(expand_tilde("/srv/dots", home), PathBuf::from("/srv/dots"));
    assert_eq!(expand_tilde("~other/x", home), PathBuf::from("~other/x"));
}

#[test]
fn test_expand_vars() {
    let lookup = |name: &str| match name {
        "HOME" => Some("/home/me".to_string()),
        "XDG_DATA" => Some("/data".to_string()),
        _ => None,
    };

    assert_eq!(
        expand_vars_with("$HOME/.dotfiles", lookup).unwrap(),
        "/home/me/.dotfiles"
    );
    assert_eq!(
        expand_vars_with("${XDG_DATA}dots", lookup).unwrap(),
        "/datadots"
    );
    assert_eq!(expand_vars_with("$MISSING/x", lookup).unwrap(), "/x");
    assert_eq!(expand_vars_with("no vars", lookup).unwrap(), "no vars");
}

// =============================================================================
// Record format
// =============================================================================

#[test]
fn test_render_fixed_order() {
    insta::assert_snapshot!(sample_record().render(), @r"
    repository = git@github.com:me/dotfiles.git
    git.dir = /home/me/.dotfiles
    work.tree = /home/me
    ssh.key = /home/me/.ssh/id_ed25519
    ");
}

#[test]
fn test_render_parse_roundtrip() {
    let record = sample_record();
    let parsed = SettingsRecord::parse(&record.render());
    assert_eq!(parsed.record, record);
    assert!(parsed.skipped.is_empty());

    let empty = SettingsRecord::default();
    assert_eq!(SettingsRecord::parse(&empty.render()).record, empty);
}

#[test]
fn test_parse_skips_malformed_lines() {
    let content = "\
# managed by cfg
repository = https://example.com/dots.git

this line has no separator
colour = blue
git.dir=/srv/dots
  work.tree   =   /srv
git.dir = /srv/dots2
";
    let parsed = SettingsRecord::parse(content);

    assert_eq!(parsed.record.repository_url, "https://example.com/dots.git");
    assert_eq!(parsed.record.bare_dir, "/srv/dots2");
    assert_eq!(parsed.record.work_tree, "/srv");
    assert_eq!(parsed.record.ssh_key_path, "");

    let skipped: Vec<_> = parsed
        .skipped
        .iter()
        .map(|line| (line.number, line.reason))
        .collect();
    assert_eq!(
        skipped,
        vec![(4, SkipReason::NoSeparator), (5, SkipReason::UnknownKey)]
    );
}

#[test]
fn test_value_keeps_inner_equals() {
    let parsed = SettingsRecord::parse("repository = https://host/repo?a=b\n");
    assert_eq!(parsed.record.repository_url, "https://host/repo?a=b");
}

#[test]
fn test_is_initialized() {
    assert!(sample_record().is_initialized());
    assert!(!SettingsRecord::default().is_initialized());

    let only_url = SettingsRecord {
        repository_url: "x".to_string(),
        ..SettingsRecord::default()
    };
    assert!(!only_url.is_initialized());

    let blank_tree = SettingsRecord {
        work_tree: "   ".to_string(),
        ..sample_record()
    };
    assert!(!blank_tree.is_initialized());
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn test_merge_does_not_clobber() {
    let current = sample_record();
    let partial = SettingsRecord {
        repository_url: "https://example.com/new.git".to_string(),
        bare_dir: "  ".to_string(),
        ..SettingsRecord::default()
    };

    let merged = merge_settings(&current, &partial);
    assert_eq!(merged.repository_url, "https://example.com/new.git");
    assert_eq!(merged.bare_dir, current.bare_dir);
    assert_eq!(merged.work_tree, current.work_tree);
    assert_eq!(merged.ssh_key_path, current.ssh_key_path);
}

#[test]
fn test_merge_trims_incoming() {
    let partial = SettingsRecord {
        work_tree: "  /srv  ".to_string(),
        ..SettingsRecord::default()
    };
    let merged = merge_settings(&SettingsRecord::default(), &partial);
    assert_eq!(merged.work_tree, "/srv");
}

// =============================================================================
// Store
// =============================================================================

#[test]
fn test_load_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let record = store.load().unwrap();
    assert_eq!(record, SettingsRecord::default());
    assert!(store.path().is_file());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "");
}

#[test]
fn test_update_then_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let persisted = store.update(&sample_record()).unwrap();
    assert_eq!(persisted, Persisted::Written(sample_record()));
    assert_eq!(store.load().unwrap(), sample_record());
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        sample_record().render()
    );
}

#[test]
fn test_update_partial_keeps_existing_fields() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.update(&sample_record()).unwrap();

    let partial = SettingsRecord {
        ssh_key_path: "/home/me/.ssh/work".to_string(),
        ..SettingsRecord::default()
    };
    let record = store.update(&partial).unwrap().into_record();

    assert_eq!(record.ssh_key_path, "/home/me/.ssh/work");
    assert_eq!(record.bare_dir, "/home/me/.dotfiles");
    assert_eq!(store.load().unwrap(), record);
}

#[test]
fn test_update_unchanged_skips_write() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.update(&sample_record()).unwrap();
    let before = std::fs::metadata(store.path()).unwrap().modified().unwrap();

    let persisted = store.update(&sample_record()).unwrap();
    assert_eq!(persisted, Persisted::Unchanged(sample_record()));

    let after = std::fs::metadata(store.path()).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_update_refuses_multiline_value() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.update(&sample_record()).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let partial = SettingsRecord {
        ssh_key_path: "/h/.ssh/id\nrepository = git@evil:x.git".to_string(),
        ..SettingsRecord::default()
    };
    let err = store.update(&partial).unwrap_err();

    assert!(matches!(
        err,
        CfgError::Settings(ref e) if matches!(**e, SettingsError::LineBreak { ref key, .. } if key == "ssh.key")
    ));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    assert_eq!(store.load().unwrap(), sample_record());
}

#[test]
fn test_store_refuses_carriage_return() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let record = SettingsRecord {
        repository_url: "git@host:me/dots.git\r".to_string(),
        ..sample_record()
    };

    assert_eq!(record.multiline_key(), Some("repository"));
    assert!(store.store(&record).is_err());
    assert!(!store.path().exists());
    assert_eq!(sample_record().multiline_key(), None);
}

#[cfg(unix)]
#[test]
fn test_update_unchanged_works_on_readonly_dir() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.update(&sample_record()).unwrap();

    let parent = store.path().parent().unwrap().to_path_buf();
    std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o500)).unwrap();

    let result = store.update(&sample_record());

    std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o700)).unwrap();
    assert!(matches!(result, Ok(Persisted::Unchanged(_))));
}

#[test]
fn test_load_initialized_requires_paths() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let err = store.load_initialized().unwrap_err();
    assert!(matches!(
        err,
        CfgError::Settings(ref e) if matches!(**e, SettingsError::Uninitialized { .. })
    ));

    store.update(&sample_record()).unwrap();
    assert_eq!(store.load_initialized().unwrap(), sample_record());
}

#[test]
fn test_load_reports_unreadable_path() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be.
    let store = SettingsStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(matches!(err, CfgError::Settings(_)));
}

// =============================================================================
// Tool options
// =============================================================================

#[test]
fn test_options_defaults() {
    let options = Options::default();
    assert_eq!(options.git, "git");
    assert_eq!(options.log_level, LogLevel::INFO);
    assert_eq!(options.file_log_level, LogLevel::TRACE);
    assert!(options.settings_file.is_none());
    assert!(options.log_file.is_none());
}

#[test]
fn test_options_parse() {
    let options = Options::parse(
        r#"
git = "/opt/git/bin/git"
settings_file = "/tmp/cfg.properties"
log_level = 2
"#,
    )
    .unwrap();

    assert_eq!(options.git, "/opt/git/bin/git");
    assert_eq!(options.log_level, LogLevel::WARN);
    assert_eq!(options.file_log_level, LogLevel::TRACE);
    assert_eq!(
        options.settings_path().unwrap(),
        PathBuf::from("/tmp/cfg.properties")
    );
}

#[test]
fn test_options_reject_bad_values() {
    assert!(Options::parse("log_level = 9").is_err());
    assert!(Options::parse("git = \"  \"").is_err());
}

#[test]
fn test_options_later_source_wins() {
    let options = Options::builder()
        .add_toml_str("git = \"git\"\nlog_level = 1")
        .add_toml_str("git = \"/usr/local/bin/git\"")
        .build()
        .unwrap();
    assert_eq!(options.log_level, LogLevel::ERROR);
    assert_eq!(options.git, "/usr/local/bin/git");
}

#[test]
fn test_options_missing_file_is_fine() {
    let dir = TempDir::new().unwrap();
    let options = Options::builder()
        .add_toml_file_optional(dir.path().join("cfg.toml"))
        .build()
        .unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn test_log_config_debug_raises_console() {
    let options = Options {
        log_level: LogLevel::WARN,
        ..Options::default()
    };
    assert_eq!(
        options.log_config(true).unwrap().console_level(),
        LogLevel::DEBUG
    );
    assert_eq!(
        options.log_config(false).unwrap().console_level(),
        LogLevel::WARN
    );

    let verbose = Options {
        log_level: LogLevel::TRACE,
        ..Options::default()
    };
    assert_eq!(
        verbose.log_config(true).unwrap().console_level(),
        LogLevel::TRACE
    );
}
