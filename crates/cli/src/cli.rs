// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::todos::Filter;

/// Todo list manager
#[derive(Parser, Debug)]
#[command(name = "todos", version, about = "Keep a todo list in a JSON file")]
pub struct Cli {
    /// Todo file (default: $HOME/.todos.json)
    #[arg(long, global = true, value_name = "PATH", env = "TODOS_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Add a pending task
    Add {
        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },
    /// List tasks (completed ones unless --filter says otherwise)
    List {
        #[arg(long, value_enum, default_value = "completed")]
        filter: ListFilter,
    },
    /// Mark the first pending task with this description as completed
    Complete {
        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },
    /// Remove the first task with this description
    Remove {
        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },
    /// Remove every task
    Clear,
}

/// CLI-friendly list filter enum
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    /// Every task
    All,
    /// Tasks not yet completed
    Pending,
    /// Completed tasks
    #[default]
    Completed,
}

impl From<ListFilter> for Filter {
    fn from(filter: ListFilter) -> Self {
        match filter {
            ListFilter::All => Filter::All,
            ListFilter::Pending => Filter::Pending,
            ListFilter::Completed => Filter::Completed,
        }
    }
}

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
