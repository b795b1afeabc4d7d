// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file persistence for [`TodoList`].

use crate::io::{ensure_parent_exists, parse_json5_or_json, write_atomic};
use crate::todos::TodoList;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used under the home directory when no path is configured.
pub const DEFAULT_FILE_NAME: &str = ".todos.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid todo file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No todo file configured: pass --file, set TODOS_FILE, or set HOME")]
    NoHome,
}

/// A todo list stored as a JSON file.
#[derive(Clone, Debug)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store location.
    ///
    /// # Priority
    ///
    /// 1. `explicit` path (from `--file`)
    /// 2. `TODOS_FILE`
    /// 3. `$HOME/.todos.json`
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, StoreError> {
        let path = explicit
            .or_else(crate::env::todos_file)
            .or_else(|| crate::env::home().map(|home| home.join(DEFAULT_FILE_NAME)))
            .ok_or(StoreError::NoHome)?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list. A file that does not exist yet is an empty list.
    pub fn load(&self) -> Result<TodoList, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TodoList::new()),
            Err(e) => return Err(e.into()),
        };
        parse_json5_or_json(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the list, replacing the file atomically.
    pub fn save(&self, todos: &TodoList) -> Result<(), StoreError> {
        ensure_parent_exists(&self.path)?;
        let json = serde_json::to_string_pretty(todos).map_err(std::io::Error::from)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
