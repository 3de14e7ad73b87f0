// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cfg init`.
//!
//! ```text
//! InitArgs
//!   |  prepare: url present, single-line values, $VAR + ~ expansion,
//!   |           absolute paths
//!   v
//! InitRequest
//!   |  bare dir exists and no -force? --> AlreadyInitialized (nothing written)
//!   v
//! SettingsStore::update  (merge, write only if changed)
//!   |
//!   v
//! git::bootstrap
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::info;

use super::Context;
use crate::cli::init::InitArgs;
use crate::config::paths;
use crate::config::settings::{GIT_DIR_KEY, SSH_KEY_KEY, SettingsRecord, WORK_TREE_KEY};
use crate::core::process::ProcessRunner;
use crate::error::{CfgError, CfgResult, GitError, Result, ValidationError};
use crate::git::bootstrap::{BootstrapPlan, bootstrap};

/// Validated `init` input with every path expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    pub url: String,
    pub bare_dir: PathBuf,
    pub work_tree: PathBuf,
    pub ssh_key: PathBuf,
}

impl InitRequest {
    /// The settings record this request stores.
    #[must_use]
    pub fn to_record(&self) -> SettingsRecord {
        SettingsRecord {
            repository_url: self.url.clone(),
            bare_dir: self.bare_dir.display().to_string(),
            work_tree: self.work_tree.display().to_string(),
            ssh_key_path: self.ssh_key.display().to_string(),
        }
    }
}

/// Validate `args` against the process environment and home directory.
///
/// # Errors
///
/// Returns a `ValidationError` if the URL is missing, a value contains a
/// line break or a path is not absolute after expansion, or a `SettingsError` if `~` is used without a
/// known home directory.
pub fn prepare(args: &InitArgs) -> Result<InitRequest> {
    prepare_with(args, |name| std::env::var(name).ok(), paths::resolve)
}

/// [`prepare`] with the variable lookup and `~` resolution supplied.
///
/// # Errors
///
/// See [`prepare`].
pub fn prepare_with<V, T>(args: &InitArgs, vars: V, resolve: T) -> Result<InitRequest>
where
    V: Fn(&str) -> Option<String>,
    T: Fn(&str) -> CfgResult<PathBuf>,
{
    let url = args
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ValidationError::MissingFlag {
            flag: "url".to_string(),
        })
        .map_err(CfgError::from)?;
    single_line("url", url)?;

    let expand = |flag: &str, value: &str| -> Result<PathBuf> {
        let expanded = paths::expand_vars_with(value.trim(), &vars)?;
        single_line(flag, &expanded)?;
        let path = resolve(&expanded)?;
        if path.is_absolute() {
            Ok(path)
        } else {
            Err(CfgError::from(ValidationError::NotAbsolute {
                flag: flag.to_string(),
                path: value.to_string(),
            })
            .into())
        }
    };

    Ok(InitRequest {
        url: url.to_string(),
        bare_dir: expand(GIT_DIR_KEY, &args.git_dir)?,
        work_tree: expand(WORK_TREE_KEY, &args.work_tree)?,
        ssh_key: expand(SSH_KEY_KEY, &args.ssh_key)?,
    })
}

fn single_line(flag: &str, value: &str) -> CfgResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreak {
            flag: flag.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Refuse to touch an existing bare repository unless `force` is set.
///
/// # Errors
///
/// Returns `GitError::AlreadyInitialized` if `bare_dir` exists and `force`
/// is off.
pub fn check_not_initialized(bare_dir: &Path, force: bool) -> CfgResult<()> {
    if bare_dir.exists() {
        if force {
            info!(path = %bare_dir.display(), "reconfiguring existing bare repository");
        } else {
            return Err(GitError::AlreadyInitialized {
                path: bare_dir.display().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Run `cfg init`.
///
/// # Errors
///
/// Returns an error if validation fails, the bare repository already exists
/// without `-force`, the settings cannot be saved, or a git step fails.
pub async fn run_init_command<R: ProcessRunner>(ctx: &Context<R>, args: &InitArgs) -> Result<()> {
    let request = prepare(args)?;
    check_not_initialized(&request.bare_dir, args.force)?;

    let store = ctx.options().settings_store()?;
    let record = store
        .update(&request.to_record())
        .context("failed to save settings")?
        .into_record();

    let plan = BootstrapPlan::builder()
        .url(record.repository_url)
        .bare_dir(record.bare_dir)
        .ssh_key(record.ssh_key_path)
        .fetch(!args.no_fetch)
        .build();

    let action = bootstrap(ctx.runner(), ctx.git(), &plan).await?;
    info!(
        path = %plan.bare_dir(),
        remote = action.as_str(),
        "dotfiles repository ready"
    );
    Ok(())
}
