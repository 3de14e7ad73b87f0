// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cfg init` arguments.
//!
//! ```text
//! cfg init -url URL [-git.dir DIR] [-work.tree DIR] [-ssh.key FILE]
//!          [-force] [-no-fetch] [-debug]
//! ```

use clap::Parser;

/// Default bare repository location.
pub const DEFAULT_GIT_DIR: &str = "~/.dotfiles";
/// Default work tree.
pub const DEFAULT_WORK_TREE: &str = "~/";
/// Default private key.
pub const DEFAULT_SSH_KEY: &str = "~/.ssh/id_rsa";

/// Flags that take a value.
pub(crate) const VALUE_FLAGS: &[&str] = &["url", "git.dir", "work.tree", "ssh.key"];

/// Arguments for `cfg init`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "cfg init",
    about = "Create the bare repository and remember where it lives",
    long_about = "Create the bare repository and remember where it lives.\n\n\
                  The settings are saved first, then git is run to create the\n\
                  bare repository, point 'origin' at the URL, hide untracked\n\
                  files and select the SSH key. Paths may use ~ and $VAR and\n\
                  must be absolute once expanded.",
    disable_version_flag = true
)]
pub struct InitArgs {
    /// Remote URL of the dotfiles repository (required).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Bare repository directory.
    #[arg(long = "git.dir", value_name = "DIR", default_value = DEFAULT_GIT_DIR)]
    pub git_dir: String,

    /// Directory the repository tracks files in.
    #[arg(long = "work.tree", value_name = "DIR", default_value = DEFAULT_WORK_TREE)]
    pub work_tree: String,

    /// Private key used to reach the remote.
    #[arg(long = "ssh.key", value_name = "FILE", default_value = DEFAULT_SSH_KEY)]
    pub ssh_key: String,

    /// Reconfigure an existing bare repository instead of refusing.
    #[arg(long)]
    pub force: bool,

    /// Skip the initial fetch from the remote.
    #[arg(long = "no-fetch")]
    pub no_fetch: bool,

    /// Print debug logs.
    #[arg(long)]
    pub debug: bool,
}
