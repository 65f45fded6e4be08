//! Error types for the scanner library
//!
//! Validation and filesystem errors are distinct so the binary can map them to
//! different exit codes: bad input (missing paths, wrong path kinds, empty word
//! lists, unknown encodings) versus runtime I/O failure mid-scan.

use std::path::PathBuf;
use thiserror::Error;

/// All errors the scanning library can surface to a caller.
///
/// Decode failures inside the match cascade are deliberately absent: a byte
/// stream that will not decode under the requested encoding is treated as
/// "this strategy found nothing" and the cascade moves on.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The path does not exist at all.
    #[error("unable to locate {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a regular file.
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// The path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The word list contained no usable entries.
    #[error("word list can not be empty")]
    EmptyMatchSet,

    /// A word list entry was an empty string.
    #[error("word list entries can not be empty")]
    EmptyWord,

    /// The requested encoding name is not in the supported set.
    #[error("unsupported encoding \"{0}\"")]
    UnsupportedEncoding(String),

    /// Fatal I/O failure (file vanished mid-scan, permission denied, ...).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// True for errors caused by bad caller input rather than runtime failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ScanError::Io(_))
    }
}
