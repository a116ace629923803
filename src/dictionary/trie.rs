//! Prefix tree for pruned dictionary lookup
//!
//! The trie is built once and never mutated afterwards, so a shared reference
//! can be handed to any number of concurrent readers.

use super::loader::WordSource;
use crate::core::PuzzleError;
use rustc_hash::FxHashMap;

/// Words shorter than this never score and are not indexed
pub const MIN_WORD_LEN: usize = 3;

/// A trie node: children keyed by character plus an end-of-word marker
#[derive(Debug, Default)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    /// Single-step traversal
    #[inline]
    #[must_use]
    pub fn child(&self, symbol: char) -> Option<&Self> {
        self.children.get(&symbol)
    }

    /// Whether the path to this node spells a dictionary word
    #[inline]
    #[must_use]
    pub const fn is_word_end(&self) -> bool {
        self.end_of_word
    }

    /// Descend one edge per character of `text`
    ///
    /// Multi-letter grid symbols (`qu`) consume several edges at once; any
    /// missing edge aborts the whole step.
    #[inline]
    #[must_use]
    pub fn descend(&self, text: &str) -> Option<&Self> {
        text.chars().try_fold(self, |node, ch| node.child(ch))
    }

    fn insert(&mut self, word: &str) -> bool {
        let node = word
            .chars()
            .fold(self, |node, ch| node.children.entry(ch).or_default());
        let fresh = !node.end_of_word;
        node.end_of_word = true;
        fresh
    }
}

/// Immutable dictionary index over a word list
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    root: TrieNode,
    len: usize,
}

impl DictionaryIndex {
    /// Build the index from a word list
    ///
    /// Words are trimmed and lower-cased; words shorter than [`MIN_WORD_LEN`]
    /// characters are skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::DictionaryIndex;
    ///
    /// let dict = DictionaryIndex::build(["abe", "bf", "Cat"]);
    /// assert!(dict.contains("cat"));
    /// assert!(!dict.contains("bf"));
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.chars().count() >= MIN_WORD_LEN && index.root.insert(&word) {
                index.len += 1;
            }
        }
        index
    }

    /// Load words from a source and build the index
    ///
    /// # Errors
    /// Returns `PuzzleError::Load` if the source is unreadable, malformed, or
    /// yields no indexable words.
    pub fn from_source(source: &dyn WordSource) -> Result<Self, PuzzleError> {
        let started = std::time::Instant::now();
        let words = source.load_words()?;
        let index = Self::build(&words);
        if index.is_empty() {
            return Err(PuzzleError::load(
                source.describe(),
                "no words of three or more letters",
            ));
        }
        log::info!(
            "built trie with {} words from {} in {:.1?}",
            index.len,
            source.describe(),
            started.elapsed()
        );
        Ok(index)
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Single-step traversal from `node`
    #[inline]
    #[must_use]
    pub fn child_after<'a>(&self, node: &'a TrieNode, symbol: char) -> Option<&'a TrieNode> {
        node.child(symbol)
    }

    /// Number of distinct indexed words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .descend(&word.to_lowercase())
            .is_some_and(TrieNode::is_word_end)
    }

    /// Whether any indexed word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.descend(&prefix.to_lowercase()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_skips_short_words() {
        let dict = DictionaryIndex::build(["a", "an", "ant"]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains("an"));
        assert!(dict.contains("ant"));
    }

    #[test]
    fn build_counts_duplicates_once() {
        let dict = DictionaryIndex::build(["cat", "CAT", " cat "]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn prefix_is_not_a_word() {
        let dict = DictionaryIndex::build(["quit"]);
        assert!(dict.has_prefix("qu"));
        assert!(!dict.contains("qui"));
        assert!(dict.contains("QUIT"));
    }

    #[test]
    fn child_after_walks_single_edges() {
        let dict = DictionaryIndex::build(["abe"]);
        let a = dict.child_after(dict.root(), 'a').unwrap();
        let b = dict.child_after(a, 'b').unwrap();
        assert!(!b.is_word_end());
        let e = dict.child_after(b, 'e').unwrap();
        assert!(e.is_word_end());
        assert!(dict.child_after(e, 'x').is_none());
    }

    #[test]
    fn descend_consumes_multi_letter_symbols() {
        let dict = DictionaryIndex::build(["quit"]);
        let node = dict.root().descend("qu").unwrap();
        assert!(node.descend("it").unwrap().is_word_end());
        assert!(dict.root().descend("qa").is_none());
    }

    #[test]
    fn empty_dictionary() {
        let dict = DictionaryIndex::build(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.has_prefix("a"));
    }
}
