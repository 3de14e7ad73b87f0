// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for cfg-rs.
//!
//! # Command Structure
//!
//! ```text
//! cfg                          → help
//! cfg help | -h | --help       → help
//! cfg version | v              → version
//! cfg init [flags]             → InitArgs (clap)
//! cfg display [--json]         → DisplayArgs (clap)
//! cfg <anything else...>       → forwarded to git untouched
//! ```
//!
//! Only the first argument is classified by hand: a clap parser for the whole
//! command line would reject the git flags that must pass through. `init` and
//! `display` then get a normal clap parser each.
//!
//! Single-dash long flags (`-url x`, `-git.dir=/d`) are accepted for `init`
//! and rewritten to their `--` form before clap sees them.

pub mod display;
pub mod init;


use clap::{CommandFactory, Parser};

use display::DisplayArgs;
use init::InitArgs;

/// Program name used in usage output.
pub const BIN_NAME: &str = "cfg";

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Usage text.
    Help,
    /// Version and build metadata.
    Version,
    /// Configure the bare repository.
    Init(InitArgs),
    /// Show the stored settings.
    Display(DisplayArgs),
    /// Forward these arguments to git.
    Passthrough(Vec<String>),
}

/// Classify a full command line (program name first).
///
/// # Errors
///
/// Returns a `clap::Error` if `init` or `display` flags are invalid, or if
/// their `--help` was requested.
pub fn parse_from<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args = argv.into_iter().map(Into::<String>::into).skip(1);
    let Some(first) = args.next() else {
        return Ok(Invocation::Help);
    };
    let rest: Vec<String> = args.collect();

    match first.as_str() {
        "help" | "-h" | "--help" => Ok(Invocation::Help),
        "version" | "v" => Ok(Invocation::Version),
        "init" => {
            let argv = subcommand_argv("init", normalize_long_flags(rest, init::VALUE_FLAGS));
            InitArgs::try_parse_from(argv).map(Invocation::Init)
        }
        "display" => {
            let argv = subcommand_argv("display", normalize_long_flags(rest, &[]));
            DisplayArgs::try_parse_from(argv).map(Invocation::Display)
        }
        _ => {
            let mut forwarded = Vec::with_capacity(rest.len() + 1);
            forwarded.push(first);
            forwarded.extend(rest);
            Ok(Invocation::Passthrough(forwarded))
        }
    }
}

fn subcommand_argv(name: &str, rest: Vec<String>) -> Vec<String> {
    let mut argv = Vec::with_capacity(rest.len() + 1);
    argv.push(format!("{BIN_NAME} {name}"));
    argv.extend(rest);
    argv
}

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value`.
///
/// Single-letter flags (`-h`) stay as they are. The token after a flag listed
/// in `value_flags` is a value and is never rewritten, and nothing after `--`
/// is touched.
#[must_use]
pub fn normalize_long_flags(args: Vec<String>, value_flags: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut expect_value = false;
    let mut literal = false;

    for arg in args {
        if literal || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            literal = true;
            out.push(arg);
            continue;
        }

        let single_dash_long = arg
            .strip_prefix('-')
            .is_some_and(|body| !body.starts_with('-') && body.chars().count() > 1);
        let normalized = if single_dash_long {
            format!("-{arg}")
        } else {
            arg
        };

        if let Some(name) = normalized.strip_prefix("--")
            && !name.contains('=')
            && value_flags.contains(&name)
        {
            expect_value = true;
        }
        out.push(normalized);
    }

    out
}

/// Rendered `cfg init` usage.
#[must_use]
pub fn init_usage() -> String {
    InitArgs::command().render_help().to_string()
}
