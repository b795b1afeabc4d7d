// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::collections::BTreeMap;
use tempfile::TempDir;

#[test]
fn test_parse_strict_json() {
    let parsed: BTreeMap<String, u32> = parse_json5_or_json(r#"{"a": 1}"#).unwrap();
    assert_eq!(parsed["a"], 1);
}

#[test]
fn test_parse_json5_comments_and_trailing_commas() {
    let content = r#"{
        // hand-edited
        "a": 1,
    }"#;
    let parsed: BTreeMap<String, u32> = parse_json5_or_json(content).unwrap();
    assert_eq!(parsed["a"], 1);
}

#[test]
fn test_parse_garbage_fails() {
    let parsed: Result<BTreeMap<String, u32>, _> = parse_json5_or_json("not json");
    assert!(parsed.is_err());
}

#[test]
fn test_ensure_parent_exists_creates_ancestors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("todos.json");

    ensure_parent_exists(&path).unwrap();
    assert!(temp.path().join("a").join("b").is_dir());
}

#[test]
fn test_ensure_parent_exists_bare_file_name() {
    ensure_parent_exists(Path::new("todos.json")).unwrap();
}

#[test]
fn test_write_atomic_replaces_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");

    write_atomic(&path, b"first").unwrap();
    write_atomic(&path, b"second").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
