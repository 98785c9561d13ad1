//! Solution root discovery.
//!
//! A directory is a solution root when it directly contains a file ending in
//! `.slnx` or `.sln`. Discovery walks from a start path up to the filesystem
//! root and stops at the first directory that qualifies.

use std::path::{Component, Path, PathBuf};

use crate::config::SOLUTION_EXTENSIONS;
use crate::error::Result;

/// Find the nearest ancestor of `start` that holds a solution file.
///
/// If `start` is an existing file the search begins at its parent directory,
/// otherwise at `start` itself. Relative paths are resolved against the
/// current directory.
///
/// Returns `Ok(None)` when the whole ancestor chain has been checked without a
/// match. Errors are reserved for I/O failures such as an unreadable or
/// nonexistent directory along the way.
pub fn find_solution_directory(start: &Path) -> Result<Option<PathBuf>> {
    let start = normalize(&std::path::absolute(start)?);
    let first = match start.parent() {
        Some(parent) if start.is_file() => parent,
        _ => start.as_path(),
    };

    for dir in first.ancestors() {
        if has_solution_file(dir)? {
            tracing::debug!("solution root found: {}", dir.display());
            return Ok(Some(dir.to_path_buf()));
        }
    }

    tracing::debug!("no solution file above {}", first.display());
    Ok(None)
}

/// Non-recursive check for a `.slnx` / `.sln` file directly inside `dir`.
fn has_solution_file(dir: &Path) -> Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_marker = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOLUTION_EXTENSIONS.contains(&ext));
        if is_marker && path.is_file() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Lexically drop `.` and resolve `..` so ancestors are visited in the
/// order a user would expect.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
