// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules.
//!
//! ```text
//!      core
//!       |
//!       v
//!    process
//!       |
//!   ProcessRunner, SystemRunner
//!   ProcessBuilder, ProcessOutput
//! ```

pub mod process;
