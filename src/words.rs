//! Dirty word list loading
//!
//! Turns a plain-text word list (one entry per line) into a [`MatchSet`] the
//! scanner can borrow for the duration of a run.

use crate::error::ScanError;
use crate::validate::assert_is_file;
use std::fs;
use std::path::Path;

/// An immutable, non-empty collection of distinct, non-empty search strings.
///
/// Both invariants are enforced at construction, so every function taking a
/// `&MatchSet` can assume there is at least one word and no word is blank.
#[derive(Debug, Clone)]
pub struct MatchSet {
    words: Vec<String>,
}

impl MatchSet {
    /// Load a word list from a text file.
    ///
    /// Blank lines are discarded, trailing carriage returns are trimmed, and
    /// duplicates are dropped while preserving first-seen order.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        assert_is_file(path)?;
        let text = fs::read_to_string(path)?;
        let entries = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(String::from);
        Self::from_words(entries)
    }

    /// Build a match set from an iterator of words.
    ///
    /// Fails with [`ScanError::EmptyWord`] if any entry is blank and
    /// [`ScanError::EmptyMatchSet`] if nothing remains.
    pub fn from_words<I, S>(entries: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.into();
            if entry.is_empty() {
                return Err(ScanError::EmptyWord);
            }
            if !words.contains(&entry) {
                words.push(entry);
            }
        }

        if words.is_empty() {
            return Err(ScanError::EmptyMatchSet);
        }

        Ok(Self { words })
    }

    /// The words to search for, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept so `len`/`is_empty` come as the usual pair.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
