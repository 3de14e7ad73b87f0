// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording fake for [`ProcessRunner`].

use std::cell::RefCell;

use super::{ProcessOutput, ProcessRunner};
use crate::error::{CfgResult, ProcessError};

/// One recorded launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) captured: bool,
}

impl Call {
    /// Arguments joined with single spaces.
    pub(crate) fn line(&self) -> String {
        self.args.join(" ")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Output(ProcessOutput),
    NotFound,
}

/// Records every call and answers from a script.
///
/// A rule matches when its pattern occurs in the space-joined arguments; the
/// first matching rule wins. Unmatched calls exit 0 with no output.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<Call>>,
    rules: Vec<(String, Reply)>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Exit with `code` when the arguments contain `pattern`.
    pub(crate) fn exit_with(self, pattern: &str, code: i32) -> Self {
        self.reply(pattern, ProcessOutput::new(code, String::new(), String::new()))
    }

    /// Print `stdout` and exit 0 when the arguments contain `pattern`.
    pub(crate) fn stdout(self, pattern: &str, stdout: &str) -> Self {
        self.reply(pattern, ProcessOutput::new(0, stdout.to_string(), String::new()))
    }

    /// Full control over the reply.
    pub(crate) fn reply(mut self, pattern: &str, output: ProcessOutput) -> Self {
        self.rules.push((pattern.to_string(), Reply::Output(output)));
        self
    }

    /// Behave as if the program were missing from PATH.
    pub(crate) fn not_found(mut self, pattern: &str) -> Self {
        self.rules.push((pattern.to_string(), Reply::NotFound));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Space-joined arguments of every call, in order.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Call::line).collect()
    }

    fn answer(&self, program: &str, args: &[String], captured: bool) -> CfgResult<ProcessOutput> {
        let call = Call {
            program: program.to_string(),
            args: args.to_vec(),
            captured,
        };
        let line = call.line();
        self.calls.borrow_mut().push(call);

        let reply = self
            .rules
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::NotFound) => Err(ProcessError::ExecutableNotFound {
                name: program.to_string(),
            }
            .into()),
            None => Ok(ProcessOutput::default()),
        }
    }
}

impl ProcessRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[String]) -> CfgResult<i32> {
        self.answer(program, args, false)
            .map(|output| output.exit_code())
    }

    async fn run_capturing(&self, program: &str, args: &[String]) -> CfgResult<ProcessOutput> {
        self.answer(program, args, true)
    }
}
