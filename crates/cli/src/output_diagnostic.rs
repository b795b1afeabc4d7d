// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics for the `todos` binary.
//!
//! Warnings and errors go to their own sink, separate from command output, so
//! `--output-format json` stays parseable. Colour is applied only when the sink
//! is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::commands::CommandError;
use crate::store::StoreError;
use crate::todos::TodoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
        }
    }
}

/// Writer for warnings and errors
pub struct Diagnostics<W: Write> {
    writer: W,
    color: bool,
}

impl Diagnostics<io::Stderr> {
    /// Diagnostics on stderr, coloured when stderr is a terminal.
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let color = stderr.is_terminal();
        Self::new(stderr, color)
    }
}

impl<W: Write> Diagnostics<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Warn that `description` is already on the list before another copy is added.
    pub fn duplicate_task(&mut self, description: &str) -> io::Result<()> {
        self.emit(
            Severity::Warning,
            format_args!("a task named {:?} already exists; adding another", description),
        )
    }

    /// Report a failed command, with a hint for the failures a user can act on.
    ///
    /// Write failures are ignored: there is nowhere left to report them.
    pub fn command_failed(&mut self, err: &CommandError) {
        let _ = self.emit(Severity::Error, err);
        if let Some(hint) = hint_for(err) {
            let _ = writeln!(self.writer, "  hint: {}", hint);
        }
    }

    fn emit(&mut self, severity: Severity, msg: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(
                self.writer,
                "{}{}: {}\x1b[0m",
                severity.ansi(),
                severity.label(),
                msg
            )
        } else {
            writeln!(self.writer, "{}: {}", severity.label(), msg)
        }
    }
}

fn hint_for(err: &CommandError) -> Option<&'static str> {
    match err {
        CommandError::Todo(TodoError::Empty) => {
            Some("add one first with `todos add <DESCRIPTION>`")
        }
        CommandError::Todo(TodoError::NotFound(_)) | CommandError::NoSuchTask(_) => {
            Some("run `todos list --filter all` to see every task")
        }
        CommandError::Store(StoreError::Parse { .. }) => {
            Some("fix the file by hand or pass --file to use another one")
        }
        CommandError::Store(_) | CommandError::Output(_) => None,
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
