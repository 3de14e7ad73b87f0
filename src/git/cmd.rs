// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git argument vectors.
//!
//! ```text
//! init_bare        init --bare <dir>
//! list_remotes     --git-dir <dir> remote show
//! add_remote       --git-dir <dir> remote add origin <url>
//! set_remote_url   --git-dir <dir> remote set-url origin <url>
//! set_local_config --git-dir <dir> config --local <key> <value>
//! fetch_prune      --git-dir <dir> fetch -p
//! passthrough_args --git-dir <dir> --work-tree <tree> <user args...>
//! ```
//!
//! Only argument construction lives here; nothing is spawned.

/// Name of the remote `cfg init` manages.
pub const ORIGIN: &str = "origin";

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| (*a).to_string()).collect()
}

fn with_git_dir(bare_dir: &str, rest: &[&str]) -> Vec<String> {
    let mut args = owned(&["--git-dir", bare_dir]);
    args.extend(rest.iter().map(|a| (*a).to_string()));
    args
}

#[must_use]
pub fn init_bare(bare_dir: &str) -> Vec<String> {
    owned(&["init", "--bare", bare_dir])
}

#[must_use]
pub fn list_remotes(bare_dir: &str) -> Vec<String> {
    with_git_dir(bare_dir, &["remote", "show"])
}

#[must_use]
pub fn add_remote(bare_dir: &str, url: &str) -> Vec<String> {
    with_git_dir(bare_dir, &["remote", "add", ORIGIN, url])
}

#[must_use]
pub fn set_remote_url(bare_dir: &str, url: &str) -> Vec<String> {
    with_git_dir(bare_dir, &["remote", "set-url", ORIGIN, url])
}

#[must_use]
pub fn set_local_config(bare_dir: &str, key: &str, value: &str) -> Vec<String> {
    with_git_dir(bare_dir, &["config", "--local", key, value])
}

#[must_use]
pub fn fetch_prune(bare_dir: &str) -> Vec<String> {
    with_git_dir(bare_dir, &["fetch", "-p"])
}

/// Prefix the user's arguments with the bare repository and work tree.
///
/// The user's arguments are appended untouched, in order.
#[must_use]
pub fn passthrough_args(bare_dir: &str, work_tree: &str, user_args: &[String]) -> Vec<String> {
    let mut args = owned(&["--git-dir", bare_dir, "--work-tree", work_tree]);
    args.extend_from_slice(user_args);
    args
}

/// Whether `git remote show` output lists [`ORIGIN`].
#[must_use]
pub fn has_origin(remote_show_output: &str) -> bool {
    remote_show_output.lines().any(|line| line.trim() == ORIGIN)
}

/// Value for `core.sshCommand` using the given private key.
///
/// git runs this through a shell, so a key path with whitespace or quotes is
/// single-quoted.
#[must_use]
pub fn ssh_command(ssh_key: &str) -> String {
    let needs_quoting = ssh_key
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'));
    if needs_quoting {
        format!("ssh -i '{}'", ssh_key.replace('\'', r"'\''"))
    } else {
        format!("ssh -i {ssh_key}")
    }
}
