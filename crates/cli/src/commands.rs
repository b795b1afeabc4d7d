// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution: load the list, apply one command, save, report.

use std::io::Write;

use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::output::{Action, OutputWriter};
use crate::output_diagnostic::Diagnostics;
use crate::store::{StoreError, TodoStore};
use crate::todos::TodoError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error("no task with description {0:?}")]
    NoSuchTask(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Run a parsed command line against the resolved store.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    out: W,
    diag: &mut Diagnostics<E>,
) -> Result<(), CommandError> {
    let store = TodoStore::resolve(cli.file.clone())?;
    let mut out = OutputWriter::new(out, cli.output_format);
    execute(&store, &cli.command, &mut out, diag)
}

/// Apply `command` to the list held by `store`.
///
/// The file is only rewritten when the command changed the list.
pub fn execute<W: Write, E: Write>(
    store: &TodoStore,
    command: &Command,
    out: &mut OutputWriter<W>,
    diag: &mut Diagnostics<E>,
) -> Result<(), CommandError> {
    let mut todos = store.load()?;

    match command {
        Command::Add { description } => {
            if todos.contains(description) {
                diag.duplicate_task(description)?;
            }
            todos.add(description.as_str());
            store.save(&todos)?;
            out.write_action(Action::Added, description)?;
        }
        Command::List { filter } => {
            out.write_tasks(&todos.list_by((*filter).into()))?;
        }
        Command::Complete { description } => {
            todos.complete(description)?;
            store.save(&todos)?;
            out.write_action(Action::Completed, description)?;
        }
        Command::Remove { description } => {
            let removed = todos
                .remove(description)
                .ok_or_else(|| CommandError::NoSuchTask(description.clone()))?;
            store.save(&todos)?;
            out.write_action(Action::Removed, removed.description())?;
        }
        Command::Clear => {
            let count = todos.len();
            todos.clear();
            store.save(&todos)?;
            out.write_cleared(count)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
