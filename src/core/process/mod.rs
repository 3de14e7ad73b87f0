// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessRunner (trait)
//!   run(program, args)            inherited stdio  --> exit code
//!   run_capturing(program, args)  piped stdio      --> ProcessOutput
//!
//! SystemRunner
//!   which(program) --> ProcessBuilder --> tokio::process::Command
//! ```
//!
//! Everything that launches git goes through [`ProcessRunner`], so command
//! handlers can be tested against a recording fake.

pub mod builder;
mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use builder::{ProcessBuilder, ProcessOutput, StreamFlags};
pub use runner::{SystemRunner, exit_code_of};

use crate::error::CfgResult;

/// Launches external programs.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `program` with the caller's stdin, stdout and stderr and return
    /// its exit code.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be found or spawned.
    /// A non-zero exit is not an error.
    async fn run(&self, program: &str, args: &[String]) -> CfgResult<i32>;

    /// Run `program` with captured output.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be found or spawned.
    /// A non-zero exit is not an error.
    async fn run_capturing(&self, program: &str, args: &[String]) -> CfgResult<ProcessOutput>;
}
