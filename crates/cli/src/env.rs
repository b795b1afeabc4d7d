// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `TODOS_FILE` — Path of the JSON file holding the todo list.
pub fn todos_file() -> Option<PathBuf> {
    var_path(names::TODOS_FILE)
}

/// `HOME` — User's home directory.
pub fn home() -> Option<PathBuf> {
    var_path(names::HOME)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
