// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Todo list binary entry point.

use std::process::ExitCode;

use clap::Parser;

use todos::cli::Cli;
use todos::commands::run;
use todos::output_diagnostic::Diagnostics;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut diag = Diagnostics::stderr();

    match run(&cli, std::io::stdout().lock(), &mut diag) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diag.command_failed(&e);
            ExitCode::FAILURE
        }
    }
}
