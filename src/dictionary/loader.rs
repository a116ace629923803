//! Word list loading utilities
//!
//! Provides the [`WordSource`] seam the dictionary is built from, with
//! implementations for the embedded lists and for files on disk.

use super::embedded::{COMMON, WORDS};
use crate::core::PuzzleError;
use std::fs;
use std::path::{Path, PathBuf};

/// A feed of raw dictionary words
pub trait WordSource {
    /// Load every word from the source
    ///
    /// # Errors
    /// Returns `PuzzleError::Load` if the resource is missing or malformed.
    fn load_words(&self) -> Result<Vec<String>, PuzzleError>;

    /// Human-readable name for logs and error messages
    fn describe(&self) -> String;
}

/// Which compiled-in list to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedWords {
    /// The playable dictionary
    Dictionary,
    /// The common-word reference table
    Common,
}

impl WordSource for EmbeddedWords {
    fn load_words(&self) -> Result<Vec<String>, PuzzleError> {
        let slice = match self {
            Self::Dictionary => WORDS,
            Self::Common => COMMON,
        };
        Ok(words_from_slice(slice))
    }

    fn describe(&self) -> String {
        match self {
            Self::Dictionary => "embedded dictionary".to_string(),
            Self::Common => "embedded common words".to_string(),
        }
    }
}

/// A word list file
///
/// The format follows the extension:
/// - `.json`: an array of strings
/// - `.bin`: repeated `[length: u8][utf-8 bytes]` records
/// - anything else: one word per line, `#` comments allowed
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWords {
    fn load_words(&self) -> Result<Vec<String>, PuzzleError> {
        let name = self.describe();
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => {
                let text = fs::read_to_string(&self.path).map_err(|e| PuzzleError::load(&name, e))?;
                let words: Vec<String> =
                    serde_json::from_str(&text).map_err(|e| PuzzleError::load(&name, e))?;
                Ok(words)
            }
            Some("bin") => {
                let bytes = fs::read(&self.path).map_err(|e| PuzzleError::load(&name, e))?;
                parse_length_prefixed(&bytes).map_err(|reason| PuzzleError::load(&name, reason))
            }
            _ => {
                let text = fs::read_to_string(&self.path).map_err(|e| PuzzleError::load(&name, e))?;
                Ok(parse_lines(&text))
            }
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::loader::words_from_slice;
/// use boggle_solver::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Plain text: one word per line, blank lines and `#` comments skipped
fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Binary: a one-byte length followed by that many UTF-8 bytes, repeated
fn parse_length_prefixed(bytes: &[u8]) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let len = usize::from(bytes[offset]);
        let start = offset + 1;
        let end = start + len;
        let record = bytes
            .get(start..end)
            .ok_or_else(|| format!("truncated record at byte {offset}"))?;
        let word = std::str::from_utf8(record)
            .map_err(|e| format!("invalid utf-8 at byte {start}: {e}"))?;
        words.push(word.to_string());
        offset = end;
    }
    Ok(words)
}

/// Encode words in the length-prefixed binary format
///
/// Words longer than 255 bytes are skipped.
#[must_use]
pub fn to_length_prefixed<S: AsRef<str>>(words: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for word in words {
        let bytes = word.as_ref().as_bytes();
        if let Ok(len) = u8::try_from(bytes.len()) {
            out.push(len);
            out.extend_from_slice(bytes);
        }
    }
    out
}
