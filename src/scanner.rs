//! Dirty word match engine
//!
//! The heart of the tool: given one file, a set of words, a requested encoding
//! and a case flag, decide whether any word occurs in the file's content. A
//! file's bytes can hide a word in several ways (mixed encodings inside binary
//! formats, missing line terminators, null-padded character data), so matching
//! runs as a fixed cascade of four strategies, each compensating for a
//! different failure mode of the previous one:
//!
//! 1. [`Strategy::TextLines`] - decode, split into lines, match per line
//! 2. [`Strategy::DecodedStream`] - decode, match against the whole blob
//! 3. [`Strategy::RawBytes`] - encode each word, match against raw bytes
//! 4. [`Strategy::NullStripped`] - drop `0x00` bytes, repeat the raw search
//!
//! A strategy that cannot decode the content is inconclusive and simply yields
//! to the next one; only fatal I/O aborts the scan. The first strategy to land
//! any hit settles the outcome as [`ScanOutcome::Found`] after reporting every
//! hit it saw.

use crate::encoding::TextEncoding;
use crate::error::ScanError;
use crate::validate::{absolute, assert_is_file};
use crate::words::MatchSet;

use memchr::memmem;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary result of a scan: either nothing was found or something was.
///
/// Decode trouble never shows up here; it is absorbed by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No dirty words detected by any strategy.
    Clean,
    /// At least one dirty word detected (details went to stderr).
    Found,
}

/// One decode-and-compare algorithm in the fallback cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Decode as text, split on newlines, substring-match each line.
    TextLines,
    /// Decode the whole stream as one blob and substring-match it. Recovers
    /// matches that straddle line boundaries or files with odd terminators.
    DecodedStream,
    /// Encode each word under the requested encoding and search the raw
    /// bytes. Works even when the surrounding bytes are not valid text.
    RawBytes,
    /// Strip every zero byte, then repeat the raw search. Collapses the
    /// null padding some formats interleave with single-byte character data.
    NullStripped,
}

/// Cascade order is fixed; later strategies run only when earlier ones found
/// nothing or could not decode the content.
pub(crate) const CASCADE: [Strategy; 4] = [
    Strategy::TextLines,
    Strategy::DecodedStream,
    Strategy::RawBytes,
    Strategy::NullStripped,
];

/// One reported occurrence of a dirty word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Hit {
    /// Found on a specific line of decoded text.
    Line {
        number: usize,
        word: String,
        text: String,
    },
    /// Found somewhere in non-line-oriented or raw content.
    Binary { word: String },
}

impl Hit {
    /// Emit the diagnostic line for this hit to stderr.
    ///
    /// Diagnostics go to stderr only; stdout stays free for summary output.
    fn report(&self, path: &Path, encoding: TextEncoding) {
        match self {
            Hit::Line { number, word, text } => {
                eprintln!(
                    "{} : line {} : \"{}\" found in \"{}\"",
                    path.display(),
                    number,
                    word,
                    text
                );
            }
            Hit::Binary { word } => {
                eprintln!(
                    "{} : {} found in binary file using {}",
                    path.display(),
                    word,
                    encoding
                );
            }
        }
    }
}

impl Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::TextLines => "text",
            Strategy::DecodedStream => "decoded stream",
            Strategy::RawBytes => "raw bytes",
            Strategy::NullStripped => "null-stripped",
        }
    }

    /// Run this strategy over `content`.
    ///
    /// `None` means the content could not be interpreted under `encoding` for
    /// this strategy (inconclusive, try the next one); `Some(hits)` is a
    /// conclusive pass, possibly with zero hits.
    pub(crate) fn attempt(
        &self,
        content: &[u8],
        words: &MatchSet,
        encoding: TextEncoding,
        case_sensitive: bool,
    ) -> Option<Vec<Hit>> {
        match self {
            Strategy::TextLines => attempt_text_lines(content, words, encoding, case_sensitive),
            Strategy::DecodedStream => {
                attempt_decoded_stream(content, words, encoding, case_sensitive)
            }
            Strategy::RawBytes => Some(search_raw(content, words, encoding, case_sensitive)),
            Strategy::NullStripped => {
                let stripped: Vec<u8> = content.iter().copied().filter(|&b| b != 0).collect();
                Some(search_raw(&stripped, words, encoding, case_sensitive))
            }
        }
    }
}

/// Strategy 1: decoded text, line by line.
fn attempt_text_lines(
    content: &[u8],
    words: &MatchSet,
    encoding: TextEncoding,
    case_sensitive: bool,
) -> Option<Vec<Hit>> {
    let text = encoding.decode(content)?;
    let text = fold_text(&text, case_sensitive);
    let needles = fold_words(words, case_sensitive);

    let mut hits = Vec::new();
    for (idx, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        for needle in &needles {
            if line.contains(needle.as_str()) {
                hits.push(Hit::Line {
                    number: idx + 1,
                    word: needle.clone(),
                    text: line.to_string(),
                });
            }
        }
    }
    Some(hits)
}

/// Strategy 2: decoded text as one undivided blob.
fn attempt_decoded_stream(
    content: &[u8],
    words: &MatchSet,
    encoding: TextEncoding,
    case_sensitive: bool,
) -> Option<Vec<Hit>> {
    let text = encoding.decode(content)?;
    let text = fold_text(&text, case_sensitive);

    let hits = fold_words(words, case_sensitive)
        .into_iter()
        .filter(|needle| text.contains(needle.as_str()))
        .map(|word| Hit::Binary { word })
        .collect();
    Some(hits)
}

/// Strategies 3 and 4: words encoded to bytes, searched in `haystack`.
///
/// Needles are never null-stripped, so a 16-bit encoded word (whose bytes
/// contain null padding) can not match a stripped haystack. That asymmetry is
/// intentional and matches the tool's documented cascade behavior.
fn search_raw(
    haystack: &[u8],
    words: &MatchSet,
    encoding: TextEncoding,
    case_sensitive: bool,
) -> Vec<Hit> {
    let haystack = if case_sensitive {
        std::borrow::Cow::Borrowed(haystack)
    } else {
        std::borrow::Cow::Owned(haystack.to_ascii_lowercase())
    };

    let mut hits = Vec::new();
    for word in fold_words(words, case_sensitive) {
        let mut needle = encoding.encode_word(&word);
        if !case_sensitive {
            needle.make_ascii_lowercase();
        }
        if memmem::find(&haystack, &needle).is_some() {
            hits.push(Hit::Binary { word });
        }
    }
    hits
}

/// Codepoint-wise case folding for the text strategies.
fn fold_text(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// Fold the whole word list once per strategy pass.
fn fold_words(words: &MatchSet, case_sensitive: bool) -> Vec<String> {
    words
        .words()
        .iter()
        .map(|w| {
            if case_sensitive {
                w.clone()
            } else {
                w.to_lowercase()
            }
        })
        .collect()
}

/// Search one file for any word in `words`, interpreted under `encoding`.
///
/// Runs the four-strategy cascade in order, re-reading the file for each pass
/// so the strategies never share partially decoded state. Every hit of the
/// winning strategy is reported to stderr before this returns
/// [`ScanOutcome::Found`]; a fully exhausted cascade returns
/// [`ScanOutcome::Clean`]. Validation failures and fatal I/O errors propagate
/// as [`ScanError`].
pub fn scan_file(
    path: &Path,
    words: &MatchSet,
    encoding: TextEncoding,
    case_sensitive: bool,
) -> Result<ScanOutcome, ScanError> {
    assert_is_file(path)?;
    let abs: PathBuf = absolute(path);

    for strategy in CASCADE {
        // Fresh read per pass; a vanished file or revoked permission is fatal.
        let content = fs::read(path)?;
        match strategy.attempt(&content, words, encoding, case_sensitive) {
            None => {
                log::debug!(
                    "unable to decode {} using {} ({} strategy)",
                    abs.display(),
                    encoding,
                    strategy.name()
                );
            }
            Some(hits) if hits.is_empty() => {}
            Some(hits) => {
                log::debug!("dirty word detected using the {} strategy", strategy.name());
                for hit in &hits {
                    hit.report(&abs, encoding);
                }
                return Ok(ScanOutcome::Found);
            }
        }
    }

    Ok(ScanOutcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn set(words: &[&str]) -> MatchSet {
        MatchSet::from_words(words.iter().copied()).unwrap()
    }

    fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_text_lines_finds_word_with_line_number() {
        let words = set(&["secret"]);
        let content = b"line one\nthis has secret inside\n";

        let hits = Strategy::TextLines
            .attempt(content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert_eq!(
            hits,
            vec![Hit::Line {
                number: 2,
                word: "secret".to_string(),
                text: "this has secret inside".to_string(),
            }]
        );
    }

    #[test]
    fn test_text_lines_inconclusive_on_bad_bytes() {
        let words = set(&["secret"]);
        let content = [0xFF, 0xFE, 0xFD, b's', b'e', b'c', b'r', b'e', b't'];

        assert!(Strategy::TextLines
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .is_none());
    }

    #[test]
    fn test_decoded_stream_finds_word_without_terminators() {
        let words = set(&["target"]);
        let content = b"no line breaks here target end";

        let hits = Strategy::DecodedStream
            .attempt(content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert_eq!(
            hits,
            vec![Hit::Binary {
                word: "target".to_string()
            }]
        );
    }

    #[test]
    fn test_raw_bytes_finds_word_in_invalid_text() {
        // Invalid UTF-8 around a literal ASCII occurrence: only the byte
        // strategies can see this.
        let words = set(&["target"]);
        let mut content = vec![0xFF, 0xFE, 0x01];
        content.extend_from_slice(b"target");
        content.push(0xFF);

        assert!(Strategy::TextLines
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .is_none());
        assert!(Strategy::DecodedStream
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .is_none());

        let hits = Strategy::RawBytes
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_null_stripped_recovers_padded_word() {
        let words = set(&["Target"]);
        let content = [
            0xFF, b'T', 0, b'a', 0, b'r', 0, b'g', 0, b'e', 0, b't', 0, 0xFF,
        ];

        let raw_hits = Strategy::RawBytes
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert!(raw_hits.is_empty());

        let stripped_hits = Strategy::NullStripped
            .attempt(&content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert_eq!(stripped_hits.len(), 1);
    }

    #[test]
    fn test_raw_bytes_case_insensitive() {
        let words = set(&["Error"]);
        let content = b"kernel panic: ERROR code 7";

        let sensitive = Strategy::RawBytes
            .attempt(content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert!(sensitive.is_empty());

        let insensitive = Strategy::RawBytes
            .attempt(content, &words, TextEncoding::Utf8, false)
            .unwrap();
        assert_eq!(insensitive.len(), 1);
    }

    #[test]
    fn test_scan_file_found_via_text() {
        let file = temp_file_with(b"line one\nthis has secret inside\n");
        let words = set(&["secret"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Found);
    }

    #[test]
    fn test_scan_file_clean() {
        let file = temp_file_with(b"nothing interesting\nat all\n");
        let words = set(&["secret", "classified"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Clean);
    }

    #[test]
    fn test_scan_file_idempotent() {
        let file = temp_file_with(b"this has secret inside\n");
        let words = set(&["secret"]);

        let first = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        let second = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, ScanOutcome::Found);
    }

    #[test]
    fn test_scan_file_case_sensitivity() {
        let file = temp_file_with(b"the ERROR log\n");
        let words = set(&["Error"]);

        let sensitive = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(sensitive, ScanOutcome::Clean);

        let insensitive = scan_file(file.path(), &words, TextEncoding::Utf8, false).unwrap();
        assert_eq!(insensitive, ScanOutcome::Found);
    }

    #[test]
    fn test_scan_file_falls_through_to_raw_bytes() {
        let mut content = vec![0x00, 0xFF, 0xFE];
        content.extend_from_slice(b"classified");
        content.extend_from_slice(&[0xFF, 0x01]);
        let file = temp_file_with(&content);
        let words = set(&["classified"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Found);
    }

    #[test]
    fn test_scan_file_null_padded_utf16le_content_with_utf8_request() {
        // UTF-16LE payload inside an otherwise invalid stream, searched as
        // utf-8: only the null-stripped pass can line the bytes up.
        let mut content = vec![0xFF];
        content.extend("Dragon Feet".encode_utf16().flat_map(|u| u.to_le_bytes()));
        content.push(0xFF);
        let file = temp_file_with(&content);
        let words = set(&["Dragon Feet"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf8, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Found);
    }

    #[test]
    fn test_scan_file_utf16_text_found_by_text_strategy() {
        let mut content = vec![0xFF, 0xFE]; // LE BOM
        content.extend(
            "first line\nsecond has secret\n"
                .encode_utf16()
                .flat_map(|u| u.to_le_bytes()),
        );
        let file = temp_file_with(&content);
        let words = set(&["secret"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf16, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Found);
    }

    #[test]
    fn test_utf16_request_misses_plain_ascii_content() {
        // Documented cascade quirk: a utf-16 needle carries null padding, so
        // neither the raw nor the null-stripped pass can match plain ASCII
        // bytes, and six ASCII bytes decode as unrelated UTF-16 code units.
        let file = temp_file_with(b"Target");
        let words = set(&["Target"]);

        let outcome = scan_file(file.path(), &words, TextEncoding::Utf16, true).unwrap();
        assert_eq!(outcome, ScanOutcome::Clean);
    }

    #[test]
    fn test_scan_file_missing_path() {
        let words = set(&["secret"]);
        let err =
            scan_file(Path::new("/no/such/file"), &words, TextEncoding::Utf8, true).unwrap_err();
        assert!(err.to_string().contains("locate"));
    }

    #[test]
    fn test_scan_file_rejects_directory() {
        let dir = tempdir().unwrap();
        let words = set(&["secret"]);
        let err = scan_file(dir.path(), &words, TextEncoding::Utf8, true).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_multiple_words_all_reported_from_one_strategy() {
        let words = set(&["alpha", "bravo"]);
        let content = b"alpha then bravo\n";

        let hits = Strategy::TextLines
            .attempt(content, &words, TextEncoding::Utf8, true)
            .unwrap();
        assert_eq!(hits.len(), 2);
    }
}
