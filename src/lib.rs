// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!         cli (argv, clap)       cmd (handlers)
//!                            init / display / help / passthrough
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  settings file + options  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                           git
//!                 bootstrap / passthrough
//!
//!   +-----------------------------------------+
//!   |  core          process (ProcessRunner)  |
//!   +-----------------------------------------+
//!   |  foundation    error, logging           |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
