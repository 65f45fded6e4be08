//! Command-line interface definition for dwscan
//!
//! Provides argument parsing for the two use cases: scanning a single file and
//! scanning a directory tree.

use crate::encoding::TextEncoding;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Dirty word scanner
///
/// Search files for forbidden strings across multiple content
/// interpretations: decoded text, raw bytes, and null-stripped bytes.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dwscan",
    version,
    about = "Scan files for dirty words, in text and binary content alike",
    long_about = r#"
Scan files for occurrences of a list of forbidden strings ("dirty words").

Content matching falls back through four interpretations of each file, so
words are found in plain text, in text without line terminators, embedded in
otherwise-binary content, and behind null-byte padding.

EXAMPLES:
    # Scan one file with the default utf-8 interpretation
    dwscan file -f release.tgz -w dirty_words.txt

    # Scan a build tree recursively, reading content as utf-16
    dwscan dir -d ./dist -w dirty_words.txt -e utf-16 -r

    # Case-insensitive scan
    dwscan file -f app.exe -w dirty_words.txt --ignore-case

Findings are written to stderr, one line per hit. Exit status: 0 when clean,
3 when dirty words were found, 1 for bad input, 2 for runtime failures.
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose mode - log every inconclusive decode and winning strategy
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Quiet mode - suppress the banner and summary (findings still print)
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Scan options shared by both use cases
#[derive(ClapArgs, Debug, Clone)]
pub struct ScanOpts {
    /// Dirty word list, one entry per line
    #[arg(short, long, value_name = "PATH")]
    pub words: PathBuf,

    /// Encoding used to interpret file content
    #[arg(short, long, value_enum, value_name = "NAME", default_value_t = TextEncoding::Utf8)]
    pub encoding: TextEncoding,

    /// Match without regard to case
    #[arg(short = 'i', long, default_value_t = false)]
    pub ignore_case: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a file for dirty words
    File {
        /// Target file to search
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,

        #[command(flatten)]
        scan: ScanOpts,
    },
    /// Search a directory for files with dirty words
    Dir {
        /// Search for dirty words in all files found in this directory
        #[arg(short, long, value_name = "PATH")]
        dir: PathBuf,

        /// Search all child directories too
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        #[command(flatten)]
        scan: ScanOpts,
    },
}
