//! Supported text encodings
//!
//! The scanner never guesses an encoding: the caller requests one from a closed
//! set, and every decode is strict. A byte stream that does not decode cleanly
//! under the requested encoding yields `None`, which the match cascade treats
//! as "this strategy is inconclusive" rather than an error.

use crate::error::ScanError;
use clap::ValueEnum;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fmt;
use std::str::FromStr;

/// The closed set of encodings files may be interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextEncoding {
    /// 8-bit variable width (the default)
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// 16-bit, little-endian unless a byte order mark says otherwise
    #[value(name = "utf-16", alias = "utf16")]
    Utf16,
}

impl TextEncoding {
    /// Canonical names of every supported encoding, for help text.
    pub const SUPPORTED: &'static [&'static str] = &["utf-8", "utf-16"];

    /// Resolve an encoding name, failing with [`ScanError::UnsupportedEncoding`]
    /// before any file I/O can happen.
    pub fn from_name(name: &str) -> Result<Self, ScanError> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16" | "utf16" => Ok(TextEncoding::Utf16),
            _ => Err(ScanError::UnsupportedEncoding(name.to_string())),
        }
    }

    /// Canonical name, as printed in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16",
        }
    }

    /// Strictly decode `content`, honoring a leading byte order mark.
    ///
    /// Returns `None` if any byte sequence is malformed for this encoding
    /// (including an odd-length UTF-16 stream). A BOM matching the chosen
    /// variant is stripped, not treated as content.
    pub fn decode(&self, content: &[u8]) -> Option<String> {
        let (text, had_errors) = self.for_content(content).decode_with_bom_removal(content);
        if had_errors {
            None
        } else {
            Some(text.into_owned())
        }
    }

    /// Encode a single word into the byte sequence it would occupy in a file
    /// of this encoding.
    ///
    /// UTF-16 words are emitted as little-endian code units without a BOM, so
    /// they can be found mid-file in binaries that embed UTF-16LE string
    /// literals (PE resources being the classic case).
    pub fn encode_word(&self, word: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => word.as_bytes().to_vec(),
            TextEncoding::Utf16 => word.encode_utf16().flat_map(|u| u.to_le_bytes()).collect(),
        }
    }

    /// Pick the concrete encoding_rs decoder, sniffing UTF-16 endianness from
    /// a BOM when present.
    fn for_content(&self, content: &[u8]) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::Utf16 => {
                if content.starts_with(&[0xFE, 0xFF]) {
                    UTF_16BE
                } else {
                    UTF_16LE
                }
            }
        }
    }
}

impl FromStr for TextEncoding {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextEncoding::from_name(s)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
