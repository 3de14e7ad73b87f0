// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cfg display` arguments.

use clap::Parser;

/// Arguments for `cfg display`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "cfg display",
    about = "Show the stored settings",
    disable_version_flag = true
)]
pub struct DisplayArgs {
    /// Print the settings as a JSON object.
    #[arg(long)]
    pub json: bool,
}
