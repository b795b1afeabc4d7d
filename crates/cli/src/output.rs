// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for text and JSON modes.

use crate::cli::OutputFormat;
use crate::todos::Task;
use serde::Serialize;
use std::io::Write;

/// A mutation performed by a command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Added,
    Completed,
    Removed,
    Cleared,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Completed => "Completed",
            Self::Removed => "Removed",
            Self::Cleared => "Cleared",
        }
    }
}

/// JSON body printed after a mutation
#[derive(Clone, Debug, Serialize)]
pub struct ActionOutput<'a> {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Output writer that renders command results in the configured format
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write a task listing
    pub fn write_tasks(&mut self, tasks: &[&Task]) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                if tasks.is_empty() {
                    return writeln!(self.writer, "No tasks.");
                }
                for task in tasks {
                    let mark = if task.is_completed() { 'x' } else { ' ' };
                    writeln!(self.writer, "[{}] {}", mark, task.description())?;
                }
                Ok(())
            }
            OutputFormat::Json => self.write_json(&tasks),
        }
    }

    /// Write the result of a mutation on a single task
    pub fn write_action(&mut self, action: Action, description: &str) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}: {}", action.label(), description),
            OutputFormat::Json => self.write_json(&ActionOutput {
                action,
                description: Some(description),
                count: None,
            }),
        }
    }

    /// Write the result of clearing the list
    pub fn write_cleared(&mut self, count: usize) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "Cleared {} task(s).", count),
            OutputFormat::Json => self.write_json(&ActionOutput {
                action: Action::Cleared,
                description: None,
                count: Some(count),
            }),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
