// cfg-rs: dotfiles through a git bare repository
//
// SPDX-FileCopyrightText: 2026 cfg-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse_from() --> Options::load() --> Logging --> Context --> cmd::dispatch
//!   Help | Version | Init | Display | Passthrough
//! ```

use std::process::ExitCode;

use cfg_rs::cli::{self, Invocation};
use cfg_rs::cmd::{self, Context};
use cfg_rs::config::Options;
use cfg_rs::core::process::SystemRunner;
use cfg_rs::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let invocation = match cli::parse_from(argv) {
        Ok(invocation) => invocation,
        Err(e) => {
            // Help output requested through clap is not a failure.
            let code = u8::from(e.use_stderr());
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let options = match Options::load() {
        Ok(options) => options,
        // Help and version fall back to the defaults.
        Err(e) if matches!(invocation, Invocation::Help | Invocation::Version) => {
            eprintln!("Warning: ignoring tool options: {e:#}");
            Options::default()
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let debug = matches!(&invocation, Invocation::Init(args) if args.debug);
    let _log_guard = match options
        .log_config(debug)
        .and_then(|config| init_logging(&config))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context::new(options, SystemRunner::new());
    let code = cmd::dispatch(&ctx, &invocation).await;
    exit_code(code)
}

/// Exit codes outside 0-255 cannot be passed on and become a plain failure.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
