//! # dwscan
//!
//! Dirty word scanner: search files for forbidden strings before they ship.
//!
//! ## Features
//!
//! - **Multi-strategy matching**: text lines, whole decoded streams, raw
//!   bytes, and null-stripped bytes, tried in a fixed fallback order
//! - **Encoding aware**: interpret content as utf-8 or utf-16 on request,
//!   with strict decoding (a failed decode is never a crash, just a fallback)
//! - **Binary tolerant**: finds encoded words inside executables and archives
//!   without parsing their structure
//! - **Directory scanning**: flat or recursive, skipping non-regular entries
//!
//! ## Usage
//!
//! ```bash
//! # Scan one file
//! dwscan file -f release.bin -w dirty_words.txt
//!
//! # Scan a tree recursively as utf-16, ignoring case
//! dwscan dir -d ./dist -w dirty_words.txt -e utf-16 -r -i
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use dwscan::{scan_file, MatchSet, ScanOutcome, TextEncoding};
//! use std::path::Path;
//!
//! let words = MatchSet::from_words(["secret", "codename"]).unwrap();
//! let outcome = scan_file(
//!     Path::new("release.bin"),
//!     &words,
//!     TextEncoding::Utf8,
//!     true,
//! ).unwrap();
//! assert_eq!(outcome, ScanOutcome::Clean);
//! ```

pub mod cli;
pub mod encoding;
pub mod error;
pub mod report;
pub mod scanner;
pub mod validate;
pub mod walker;
pub mod words;

pub use encoding::TextEncoding;
pub use error::ScanError;
pub use scanner::{scan_file, ScanOutcome};
pub use walker::scan_dir;
pub use words::MatchSet;
