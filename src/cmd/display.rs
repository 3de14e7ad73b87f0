// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cfg display`.

use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use super::Context;
use crate::cli::display::DisplayArgs;
use crate::config::settings::SettingsRecord;
use crate::core::process::ProcessRunner;
use crate::error::Result;

#[derive(Serialize)]
struct DisplayView<'a> {
    settings_file: String,
    initialized: bool,
    #[serde(flatten)]
    settings: &'a SettingsRecord,
}

/// Render the settings stored at `path`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_display(path: &Path, record: &SettingsRecord, json: bool) -> Result<String> {
    if json {
        let view = DisplayView {
            settings_file: path.display().to_string(),
            initialized: record.is_initialized(),
            settings: record,
        };
        let mut out = serde_json::to_string_pretty(&view).context("failed to encode settings")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = format!("# {}\n", path.display());
    out.push_str(&record.render());
    if !record.is_initialized() {
        out.push_str("# not initialized, run `cfg init -url <repository>`\n");
    }
    Ok(out)
}

/// Print the stored settings.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded.
pub fn run_display_command<R: ProcessRunner>(ctx: &Context<R>, args: &DisplayArgs) -> Result<()> {
    let store = ctx.options().settings_store()?;
    let record = store.load()?;
    print!("{}", render_display(store.path(), &record, args.json)?);
    Ok(())
}
