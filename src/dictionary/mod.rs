//! Dictionary index and word lists
//!
//! Provides the trie used for prefix-pruned lookup, the common-word table used
//! for rarity scoring, and the embedded lists compiled into the binary.

mod common;
mod embedded;
pub mod loader;
mod trie;

pub use common::CommonWords;
pub use embedded::{COMMON, COMMON_COUNT, WORDS, WORDS_COUNT};
pub use loader::{EmbeddedWords, FileWords, WordSource};
pub use trie::{DictionaryIndex, MIN_WORD_LEN, TrieNode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn common_count_matches_const() {
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(word.len() >= MIN_WORD_LEN, "Word '{word}' is too short");
        }
    }

    #[test]
    fn common_subset_of_dictionary() {
        let dict = DictionaryIndex::build(WORDS);
        for &word in &COMMON[..20] {
            // Check first 20 for speed
            assert!(dict.contains(word), "Common word '{word}' not in dictionary");
        }
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dict = DictionaryIndex::from_source(&EmbeddedWords::Dictionary).unwrap();
        assert_eq!(dict.len(), WORDS_COUNT);
        assert!(dict.contains("quit"));
    }
}
