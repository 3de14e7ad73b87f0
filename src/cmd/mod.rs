// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Invocation --> dispatch(&Context)
//!   Help        --> help::run_help_command
//!   Version     --> help::run_version_command
//!   Init        --> init::run_init_command
//!   Display     --> display::run_display_command
//!   Passthrough --> passthrough::run_passthrough_command
//!        |
//!        v
//!   exit code (handler result, 1 on error, git's own code for passthrough)
//! ```

pub mod display;
pub mod help;
pub mod init;
pub mod passthrough;


use crate::cli::{self, Invocation};
use crate::config::Options;
use crate::core::process::ProcessRunner;
use crate::error::{CfgError, SettingsError};

/// Everything a command handler may use.
///
/// Built once in `main`; there is no other shared state.
#[derive(Debug)]
pub struct Context<R> {
    options: Options,
    runner: R,
}

impl<R: ProcessRunner> Context<R> {
    pub const fn new(options: Options, runner: R) -> Self {
        Self { options, runner }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Git program to launch.
    #[must_use]
    pub fn git(&self) -> &str {
        &self.options.git
    }
}

/// Run the requested command and return the process exit code.
///
/// Errors are printed to stderr here and turn into exit code 1.
pub async fn dispatch<R: ProcessRunner>(ctx: &Context<R>, invocation: &Invocation) -> i32 {
    let result = match invocation {
        Invocation::Help => {
            help::run_help_command(ctx).await;
            Ok(0)
        }
        Invocation::Version => {
            help::run_version_command();
            Ok(0)
        }
        Invocation::Init(args) => init::run_init_command(ctx, args).await.map(|()| 0),
        Invocation::Display(args) => display::run_display_command(ctx, args).map(|()| 0),
        Invocation::Passthrough(args) => passthrough::run_passthrough_command(ctx, args).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(err) = e.downcast_ref::<CfgError>() {
                report_hint(err);
            }
            1
        }
    }
}

fn report_hint(err: &CfgError) {
    if err.wants_usage() {
        eprintln!();
        eprintln!("{}", cli::init_usage());
    } else if let CfgError::Settings(settings) = err
        && matches!(**settings, SettingsError::Uninitialized { .. })
    {
        eprintln!("Run `{} init -url <repository>` first.", cli::BIN_NAME);
    }
}
