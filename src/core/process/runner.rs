// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, stdio
//!   |
//!   v
//! spawn() --NotFound--> ExecutableNotFound
//!   |     --other-----> SpawnFailed
//!   v
//! wait / wait_with_output
//!   |
//!   v
//! exit_code_of(status)
//!   code          --> code
//!   unix signal   --> 128 + signal
//!   neither       --> Terminated
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! A non-zero exit is never an error here; callers decide what it means.

use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, trace};

use super::ProcessRunner;
use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{CfgResult, ProcessError};

impl ProcessBuilder {
    /// Returns the full command line as a string (for logging and errors).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program().display().to_string();
        for arg in self.args_slice() {
            cmd.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                cmd.push('"');
                cmd.push_str(arg);
                cmd.push('"');
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to finish.
    ///
    /// Stdin is inherited unless output is captured, in which case it is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process cannot be spawned or ends
    /// without an exit code.
    pub async fn run(self) -> CfgResult<ProcessOutput> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let child = command
            .spawn()
            .map_err(|e| self.spawn_error(&cmd_line, e))?;
        trace!(pid = ?child.id(), "spawned");

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source: e,
            })?;

        let exit_code = exit_code_of(output.status, &cmd_line)?;
        trace!(exit_code, "completed");

        Ok(ProcessOutput::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if self.captures() {
            command.stdin(Stdio::null());
        } else {
            command.stdin(Stdio::inherit());
        }
        command.stdout(Self::stdio_from_flags(self.stdout_stream()));
        command.stderr(Self::stdio_from_flags(self.stderr_stream()));

        command.kill_on_drop(true);
        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            Stdio::piped()
        } else {
            Stdio::inherit()
        }
    }

    fn spawn_error(&self, cmd_line: &str, source: std::io::Error) -> ProcessError {
        if source.kind() == ErrorKind::NotFound {
            ProcessError::ExecutableNotFound {
                name: self.program().display().to_string(),
            }
        } else {
            ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            }
        }
    }
}

/// Map a child's exit status to the code `cfg` should report.
///
/// # Errors
///
/// Returns `ProcessError::Terminated` when the status carries neither an exit
/// code nor (on Unix) a signal.
pub fn exit_code_of(status: ExitStatus, command: &str) -> CfgResult<i32> {
    if let Some(code) = status.code() {
        return Ok(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            debug!(signal, "child killed by signal");
            return Ok(128 + signal);
        }
    }

    Err(ProcessError::Terminated {
        command: command.to_string(),
    }
    .into())
}

/// Runs real processes through tokio.
///
/// Programs are resolved on PATH before spawning so a missing git is reported
/// as `ExecutableNotFound` rather than a generic spawn failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> CfgResult<i32> {
        let output = ProcessBuilder::which(program)?
            .args(args)
            .inherit_stdio()
            .run()
            .await?;
        Ok(output.exit_code())
    }

    async fn run_capturing(&self, program: &str, args: &[String]) -> CfgResult<ProcessOutput> {
        ProcessBuilder::which(program)?
            .args(args)
            .capture_output()
            .run()
            .await
    }
}
