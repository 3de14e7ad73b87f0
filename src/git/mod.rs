// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   bootstrap.rs     passthrough.rs
//!   (cfg init)       (every other command)
//!         \              /
//!          v            v
//!         cmd.rs  (argument vectors)
//!              |
//!              v
//!    core::process::ProcessRunner
//!              |
//!              v
//!          git binary
//! ```
//!
//! No git logic runs in-process: every operation is a git subprocess.

pub mod bootstrap;
pub mod cmd;
pub mod passthrough;
