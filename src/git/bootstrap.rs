// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-run setup of the bare repository.
//!
//! ```text
//! bootstrap(plan)
//!   1. init --bare <dir>
//!   2. remote show ----- "origin" listed? --yes--> remote set-url origin <url>
//!                                          \-no--> remote add origin <url>
//!   3. config --local status.showUntrackedFiles no
//!      config --local core.sshCommand "ssh -i <key>"
//!   4. fetch -p          (unless plan.fetch is off)
//! ```
//!
//! Steps run one process each and stop at the first failure. Completed steps
//! are not rolled back; running `init -force` again converges.

use bon::Builder;
use tracing::{debug, info, warn};

use super::cmd;
use crate::core::process::ProcessRunner;
use crate::error::{CfgResult, GitError};

/// What `bootstrap` should set up.
#[derive(Debug, Clone, Builder)]
pub struct BootstrapPlan {
    /// Remote URL for `origin`.
    #[builder(into)]
    url: String,
    /// Bare repository directory, already expanded.
    #[builder(into)]
    bare_dir: String,
    /// Private key for `core.sshCommand`, already expanded.
    #[builder(into)]
    ssh_key: String,
    /// Fetch from `origin` once configured.
    #[builder(default = true)]
    fetch: bool,
}

impl BootstrapPlan {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn bare_dir(&self) -> &str {
        &self.bare_dir
    }

    #[must_use]
    pub fn ssh_key(&self) -> &str {
        &self.ssh_key
    }

    #[must_use]
    pub const fn fetch(&self) -> bool {
        self.fetch
    }
}

/// How `origin` was configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Added,
    Updated,
}

impl RemoteAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Updated => "updated",
        }
    }
}

/// Create and configure the bare repository described by `plan`.
///
/// `git` is the program to run (usually `"git"`).
///
/// # Errors
///
/// Returns `GitError::StepFailed` for the first step that exits non-zero, or
/// a `ProcessError` if git cannot be spawned.
pub async fn bootstrap<R: ProcessRunner>(
    runner: &R,
    git: &str,
    plan: &BootstrapPlan,
) -> CfgResult<RemoteAction> {
    let dir = plan.bare_dir();

    info!(path = %dir, "creating bare repository");
    step(runner, git, "init bare repository", cmd::init_bare(dir)).await?;

    let list = cmd::list_remotes(dir);
    let output = runner.run_capturing(git, &list).await?;
    if !output.success() {
        let stderr = output.stderr().trim();
        if !stderr.is_empty() {
            warn!("{stderr}");
        }
        return Err(step_failed(git, "list remotes", &list, output.exit_code()));
    }

    let action = if cmd::has_origin(output.stdout()) {
        info!(url = %plan.url(), "updating remote '{}'", cmd::ORIGIN);
        step(runner, git, "set remote url", cmd::set_remote_url(dir, plan.url())).await?;
        RemoteAction::Updated
    } else {
        info!(url = %plan.url(), "adding remote '{}'", cmd::ORIGIN);
        step(runner, git, "add remote", cmd::add_remote(dir, plan.url())).await?;
        RemoteAction::Added
    };

    step(
        runner,
        git,
        "hide untracked files",
        cmd::set_local_config(dir, "status.showUntrackedFiles", "no"),
    )
    .await?;
    step(
        runner,
        git,
        "set ssh command",
        cmd::set_local_config(dir, "core.sshCommand", &cmd::ssh_command(plan.ssh_key())),
    )
    .await?;

    if plan.fetch() {
        info!("fetching from '{}'", cmd::ORIGIN);
        step(runner, git, "fetch", cmd::fetch_prune(dir)).await?;
    } else {
        debug!("fetch skipped");
    }

    Ok(action)
}

async fn step<R: ProcessRunner>(
    runner: &R,
    git: &str,
    name: &str,
    args: Vec<String>,
) -> CfgResult<()> {
    let code = runner.run(git, &args).await?;
    if code == 0 {
        debug!(step = name, "done");
        Ok(())
    } else {
        Err(step_failed(git, name, &args, code))
    }
}

fn step_failed(git: &str, name: &str, args: &[String], code: i32) -> crate::error::CfgError {
    GitError::StepFailed {
        step: name.to_string(),
        command: format!("{git} {}", args.join(" ")),
        code,
    }
    .into()
}
