// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File helpers for JSON persistence.

use std::io::Write;
use std::path::Path;

/// Parse content as JSON5, falling back to strict JSON on parse failure.
///
/// JSON5 accepts comments and trailing commas, so hand-edited files still load.
/// The strict JSON error is the one reported when both parsers fail.
pub fn parse_json5_or_json<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<T, serde_json::Error> {
    json5::from_str(content).or_else(|_| serde_json::from_str(content))
}

/// Ensure a file's parent directory exists, creating it and ancestors if needed.
pub fn ensure_parent_exists(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Replace `path` with `contents` in one rename.
///
/// The data goes to a temporary file next to the target first, so readers see
/// either the old file or the new one, never a partial write.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path)?;
    Ok(())
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
