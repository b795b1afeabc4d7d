// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Todo list
//!
//! An in-memory [`TodoList`](todos::TodoList) of tasks kept in insertion order,
//! plus the pieces the `todos` binary needs around it: a JSON file store,
//! argument parsing and output rendering.
//!
//! ```
//! use todos::TodoList;
//!
//! let mut todos = TodoList::new();
//! todos.add("get up from bed");
//! todos.add("make up bed");
//! assert_eq!(todos.list().len(), 0);
//!
//! todos.complete("make up bed").unwrap();
//! assert_eq!(todos.list().len(), 1);
//! ```

pub mod todos;

pub mod store;

pub use crate::store::{StoreError, TodoStore};
pub use crate::todos::{Filter, Task, TodoError, TodoList};

// Binary support modules, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod io;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
