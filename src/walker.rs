//! Directory traversal
//!
//! Thin orchestration over the match engine: apply [`scan_file`] to every
//! regular file under a directory and OR the outcomes together. Traversal is
//! depth-first via an explicit walk (no recursion on pathological trees) and
//! never short-circuits, so the stderr diagnostics stay exhaustive even after
//! the first hit.

use crate::encoding::TextEncoding;
use crate::error::ScanError;
use crate::scanner::{scan_file, ScanOutcome};
use crate::validate::assert_is_dir;
use crate::words::MatchSet;

use std::path::Path;
use walkdir::WalkDir;

/// Scan every regular file in `path` for dirty words.
///
/// With `recursive` set, descends into subdirectories; otherwise only direct
/// children are scanned. Symlinks, devices and other non-regular entries are
/// silently skipped (links are not followed). The outcome is
/// [`ScanOutcome::Found`] if any scanned file reported a hit. A fatal error
/// from any individual file scan aborts the whole directory scan.
pub fn scan_dir(
    path: &Path,
    words: &MatchSet,
    encoding: TextEncoding,
    case_sensitive: bool,
    recursive: bool,
) -> Result<ScanOutcome, ScanError> {
    assert_is_dir(path)?;

    let walker = if recursive {
        WalkDir::new(path).min_depth(1)
    } else {
        WalkDir::new(path).min_depth(1).max_depth(1)
    };

    let mut outcome = ScanOutcome::Clean;
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if scan_file(entry.path(), words, encoding, case_sensitive)? == ScanOutcome::Found {
            outcome = ScanOutcome::Found;
        }
    }

    Ok(outcome)
}
