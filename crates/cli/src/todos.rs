// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory todo list.
//!
//! A [`TodoList`] keeps its tasks in insertion order. Tasks start pending and
//! move to completed through [`TodoList::complete`]; nothing else mutates them.
//! [`TodoList::list`] is the list of finished work: it yields completed tasks
//! only, so a list that has just been filled with new tasks lists nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("no tasks have been added yet")]
    Empty,

    #[error("no pending task with description {0:?}")]
    NotFound(String),
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,

    #[serde(default)]
    completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a pending task
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            completed_at: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task was completed, if it has been
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }
}

/// Selection rule for [`TodoList::list_by`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    All,
    Pending,
    #[default]
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Ordered collection of tasks
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TodoList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending task.
    ///
    /// Empty and duplicate descriptions are accepted.
    pub fn add(&mut self, description: impl Into<String>) {
        self.tasks.push(Task::new(description));
    }

    /// Completed tasks, in the order they were added.
    pub fn list(&self) -> Vec<&Task> {
        self.list_by(Filter::default())
    }

    /// Tasks selected by `filter`, in the order they were added.
    pub fn list_by(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// All tasks
    pub fn all(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Get pending tasks
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// Get completed tasks
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    /// Complete the first pending task with this description, stamped now.
    ///
    /// See [`complete_at`](Self::complete_at) for how matches are chosen.
    pub fn complete(&mut self, description: &str) -> Result<(), TodoError> {
        self.complete_at(description, Utc::now())
    }

    /// Complete the first pending task with this description.
    ///
    /// Tasks that are already completed are skipped, even when their
    /// description matches. If every match is already completed the result is
    /// [`TodoError::NotFound`], and no timestamp is overwritten.
    pub fn complete_at(&mut self, description: &str, at: DateTime<Utc>) -> Result<(), TodoError> {
        if self.tasks.is_empty() {
            return Err(TodoError::Empty);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| !t.completed && t.description == description)
            .ok_or_else(|| TodoError::NotFound(description.to_string()))?;
        task.mark_completed(at);
        Ok(())
    }

    /// Remove the first task with this description, pending or not.
    pub fn remove(&mut self, description: &str) -> Option<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.description == description)?;
        Some(self.tasks.remove(pos))
    }

    /// Whether any task carries this description
    pub fn contains(&self, description: &str) -> bool {
        self.tasks.iter().any(|t| t.description == description)
    }

    /// Clear all tasks
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
