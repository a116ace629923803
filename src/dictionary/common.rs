//! Common-word reference table for rarity scoring

use super::loader::WordSource;
use crate::core::PuzzleError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Common words grouped by length
#[derive(Debug, Default, Clone)]
pub struct CommonWords {
    by_length: FxHashMap<usize, Vec<String>>,
    all: FxHashSet<String>,
}

impl CommonWords {
    /// Build the table from a word list (lower-cased, duplicates dropped)
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || !table.all.insert(word.clone()) {
                continue;
            }
            table
                .by_length
                .entry(word.chars().count())
                .or_default()
                .push(word);
        }
        table
    }

    /// Load the table from a word source
    ///
    /// # Errors
    /// Propagates the source's `PuzzleError::Load`.
    pub fn from_source(source: &dyn WordSource) -> Result<Self, PuzzleError> {
        Ok(Self::new(source.load_words()?))
    }

    /// Common words with exactly `length` characters
    #[must_use]
    pub fn for_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.all.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
