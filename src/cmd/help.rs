// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cfg help` and `cfg version`.

use tracing::debug;

use super::Context;
use crate::cli;
use crate::core::process::ProcessRunner;

const USAGE: &str = "\
usage: cfg <command> [<args>]

Keep dotfiles in a bare git repository without typing --git-dir and
--work-tree every time.

commands:
  init       create the bare repository and save its location
  display    show the saved settings (--json for JSON)
  version    show version and build information
  help       show this message

Anything else is passed to git with --git-dir and --work-tree set, e.g.
  cfg status
  cfg add ~/.bashrc
  cfg commit -m 'add bashrc'
";

/// Static part of the help text.
#[must_use]
pub const fn usage() -> &'static str {
    USAGE
}

/// Build the full help text: usage, `init` flags and git's own summary when
/// git can be run.
pub async fn render_help<R: ProcessRunner>(ctx: &Context<R>) -> String {
    let mut help = String::from(USAGE);
    help.push('\n');
    help.push_str(&cli::init_usage());

    if let Some(git_help) = git_help(ctx).await {
        help.push_str("\ngit commands (run through cfg):\n\n");
        help.push_str(&git_help);
    }
    help
}

async fn git_help<R: ProcessRunner>(ctx: &Context<R>) -> Option<String> {
    let args = ["-h".to_string()];
    match ctx.runner().run_capturing(ctx.git(), &args).await {
        // `git -h` exits 129 after printing its summary.
        Ok(output) if !output.stdout().trim().is_empty() => Some(output.stdout().to_string()),
        Ok(output) => {
            debug!(code = output.exit_code(), "git -h printed nothing");
            None
        }
        Err(e) => {
            debug!(error = %e, "git help unavailable");
            None
        }
    }
}

/// Print the help text.
pub async fn run_help_command<R: ProcessRunner>(ctx: &Context<R>) {
    print!("{}", render_help(ctx).await);
}

/// Version line with the build metadata baked in at compile time.
#[must_use]
pub fn version_line() -> String {
    format!(
        "cfg version: {}, build time: {}, git hash: {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("CFG_BUILD_TIME").unwrap_or("unknown"),
        option_env!("CFG_GIT_HASH").unwrap_or("unknown"),
    )
}

pub fn run_version_command() {
    println!("{}", version_line());
}
