// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_styled_text::{CommonResult,
                       cli::{CLIArg, run},
                       enable_ansi_rendering,
                       log::{DisplayPreference, try_initialize_logging_global},
                       ok};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(DisplayPreference::Stderr).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    // Must happen before anything styled is written to the terminal.
    let ansi_rendering = enable_ansi_rendering();
    if !ansi_rendering.is_enabled() {
        tracing::warn!(
            message = "Terminal does not support ANSI escape sequences",
            ansi_rendering = ?ansi_rendering
        );
    }

    let line = run(&cli_arg)?;
    println!("{line}");

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
