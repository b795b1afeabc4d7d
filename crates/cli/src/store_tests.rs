// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::env::{HOME, TODOS_FILE};
use chrono::DateTime;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::new(temp.path().join("todos.json"));

    let todos = store.load().unwrap();
    assert!(todos.is_empty());
}

#[test]
fn test_save_load() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::new(temp.path().join("todos.json"));

    let mut todos = TodoList::new();
    todos.add("Task 1");
    todos.add("Task 2");
    todos
        .complete_at("Task 2", DateTime::from_timestamp(60, 0).unwrap())
        .unwrap();
    store.save(&todos).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, todos);
    assert_eq!(loaded.list().len(), 1);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::new(temp.path().join("nested").join("dir").join("todos.json"));

    store.save(&TodoList::new()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_load_hand_edited_json5() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    std::fs::write(
        &path,
        r#"{
            // chores
            "tasks": [
                { "description": "make up bed", "completed": true, },
            ],
        }"#,
    )
    .unwrap();

    let loaded = TodoStore::new(&path).load().unwrap();
    assert_eq!(loaded.list().len(), 1);
    assert_eq!(loaded.list()[0].description(), "make up bed");
}

#[test]
fn test_load_garbage_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    std::fs::write(&path, "not a todo list").unwrap();

    let err = TodoStore::new(&path).load().unwrap_err();
    match err {
        StoreError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_resolve_prefers_explicit_path() {
    std::env::set_var(TODOS_FILE, "/tmp/from-env.json");
    let store = TodoStore::resolve(Some(PathBuf::from("/tmp/explicit.json")));
    std::env::remove_var(TODOS_FILE);

    assert_eq!(store.unwrap().path(), Path::new("/tmp/explicit.json"));
}

#[test]
#[serial]
fn test_resolve_uses_env_file() {
    std::env::set_var(TODOS_FILE, "/tmp/from-env.json");
    let store = TodoStore::resolve(None);
    std::env::remove_var(TODOS_FILE);

    assert_eq!(store.unwrap().path(), Path::new("/tmp/from-env.json"));
}

#[test]
#[serial]
fn test_resolve_falls_back_to_home() {
    let saved_home = std::env::var_os(HOME);
    std::env::remove_var(TODOS_FILE);
    std::env::set_var(HOME, "/tmp/home");
    let store = TodoStore::resolve(None);
    std::env::remove_var(HOME);
    let missing = TodoStore::resolve(None);
    if let Some(home) = saved_home {
        std::env::set_var(HOME, home);
    }

    assert_eq!(
        store.unwrap().path(),
        Path::new("/tmp/home").join(DEFAULT_FILE_NAME)
    );
    assert!(matches!(missing, Err(StoreError::NoHome)));
}
