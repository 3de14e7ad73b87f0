// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Every command `cfg` does not handle itself.

use super::Context;
use crate::core::process::ProcessRunner;
use crate::error::Result;
use crate::git::passthrough::execute;

/// Forward `args` to git and return git's exit code.
///
/// Nothing is spawned until the settings name a bare repository and work
/// tree.
///
/// # Errors
///
/// Returns `SettingsError::Uninitialized` before `cfg init` has run, or an
/// error if the settings cannot be read or git cannot be spawned.
pub async fn run_passthrough_command<R: ProcessRunner>(
    ctx: &Context<R>,
    args: &[String],
) -> Result<i32> {
    let record = ctx.options().settings_store()?.load_initialized()?;
    let code = execute(
        ctx.runner(),
        ctx.git(),
        &record.bare_dir,
        &record.work_tree,
        args,
    )
    .await?;
    Ok(code)
}
