//! Path and type validation helpers
//!
//! Centralizes how paths are checked before any content I/O happens, so the
//! scanner and walker report the same errors for the same misuses.

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Fail unless `path` exists and is a regular file.
pub fn assert_is_file(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::NotFound(absolute(path)));
    }
    if !path.is_file() {
        return Err(ScanError::NotAFile(absolute(path)));
    }
    Ok(())
}

/// Fail unless `path` exists and is a directory.
pub fn assert_is_dir(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::NotFound(absolute(path)));
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(absolute(path)));
    }
    Ok(())
}

/// Best-effort absolute form of `path` for diagnostics.
///
/// Falls back to the path as given when canonicalization fails (e.g. the path
/// no longer exists), so error messages never panic over a vanished file.
pub fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
