// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Forwarding a command line to git.

use tracing::debug;

use super::cmd;
use crate::config::paths;
use crate::core::process::ProcessRunner;
use crate::error::CfgResult;

/// Run git against the bare repository and work tree and return its exit code.
///
/// Leading `~` in either stored path is expanded first. The child shares the
/// caller's stdin, stdout and stderr.
///
/// # Errors
///
/// Returns a `SettingsError` if `~` cannot be expanded, or a `ProcessError`
/// if git cannot be spawned. A non-zero exit is returned as the code.
pub async fn execute<R: ProcessRunner>(
    runner: &R,
    git: &str,
    bare_dir: &str,
    work_tree: &str,
    args: &[String],
) -> CfgResult<i32> {
    let bare_dir = paths::resolve(bare_dir.trim())?;
    let work_tree = paths::resolve(work_tree.trim())?;

    let argv = cmd::passthrough_args(
        &bare_dir.to_string_lossy(),
        &work_tree.to_string_lossy(),
        args,
    );
    let code = runner.run(git, &argv).await?;
    debug!(code, "git finished");
    Ok(code)
}
