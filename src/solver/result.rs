//! Found-word sets

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The distinct words found in a grid, kept in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordResult {
    words: BTreeSet<String>,
}

impl WordResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; returns false if it was already present
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words grouped by character count, shortest first
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.chars().count()).or_default().push(word);
        }
        groups
    }

    /// Character count of the longest word, 0 when empty
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).max().unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<S> for WordResult {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordResult {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
