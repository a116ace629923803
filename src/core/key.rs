//! Letter keys: mapping between single-character grid symbols and their display form
//!
//! Generated grids store one character per cell (`q`), while players see the
//! expanded unit (`qu`). A [`LetterKey`] holds the mapping in one direction;
//! [`decode`] applies it to symbols and [`encode`] applies an inverted key to
//! display text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a source unit to its replacement, e.g. `q -> qu`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterKey {
    entries: BTreeMap<String, String>,
}

impl LetterKey {
    /// Build a key from `(from, to)` pairs. Entries are lower-cased.
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(from, to)| (from.as_ref().to_lowercase(), to.as_ref().to_lowercase()))
            .collect();
        Self { entries }
    }

    /// The `q -> qu` key used by every cube set
    #[must_use]
    pub fn qu() -> Self {
        Self::new([("q", "qu")])
    }

    /// The same mapping in the opposite direction
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(from, to)| (to.clone(), from.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replacement for a unit, if the key maps it
    #[must_use]
    pub fn get(&self, unit: &str) -> Option<&str> {
        self.entries.get(unit).map(String::as_str)
    }

    /// Apply the key to a single unit, passing unknown units through
    #[must_use]
    pub fn apply<'a>(&'a self, unit: &'a str) -> &'a str {
        self.get(unit).unwrap_or(unit)
    }
}

/// Expand every symbol present in `key` to its display form
///
/// Unrecognised symbols pass through unchanged.
///
/// # Examples
/// ```
/// use boggle_solver::core::{LetterKey, decode};
///
/// let decoded = decode(&["a", "q", "b"], &LetterKey::qu());
/// assert_eq!(decoded, vec!["a", "qu", "b"]);
/// ```
#[must_use]
pub fn decode<S: AsRef<str>>(symbols: &[S], key: &LetterKey) -> Vec<String> {
    symbols
        .iter()
        .map(|symbol| {
            let symbol = symbol.as_ref();
            key.apply(symbol).to_string()
        })
        .collect()
}

/// Collapse display units back into single-character symbols
///
/// `key` maps display text to symbols (e.g. `qu -> q`). The display strings are
/// joined, every key match is replaced (longest match first), and the result is
/// split into one symbol per character. The output may be shorter than the input
/// when a unit was spread over several entries (`["q", "u"]` becomes `["q"]`).
///
/// # Examples
/// ```
/// use boggle_solver::core::{LetterKey, decode, encode};
///
/// let key = LetterKey::qu();
/// let symbols = vec!["a".to_string(), "q".to_string(), "b".to_string()];
/// assert_eq!(encode(&decode(&symbols, &key), &key.inverse()), symbols);
/// ```
#[must_use]
pub fn encode<S: AsRef<str>>(display: &[S], key: &LetterKey) -> Vec<String> {
    let joined: String = display.iter().map(AsRef::as_ref).collect::<String>().to_lowercase();

    // Longest patterns first so overlapping keys resolve deterministically
    let mut patterns: Vec<(&str, &str)> = key
        .entries
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str()))
        .filter(|(from, _)| !from.is_empty())
        .collect();
    patterns.sort_by_key(|(from, _)| std::cmp::Reverse(from.chars().count()));

    let mut replaced = String::with_capacity(joined.len());
    let mut rest = joined.as_str();
    'scan: while !rest.is_empty() {
        for (from, to) in &patterns {
            if let Some(tail) = rest.strip_prefix(from) {
                replaced.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            replaced.push(ch);
        }
        rest = chars.as_str();
    }

    replaced.chars().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_expands_known_symbols() {
        let key = LetterKey::qu();
        assert_eq!(decode(&["q", "a"], &key), vec!["qu", "a"]);
    }

    #[test]
    fn decode_passes_unknown_through() {
        let key = LetterKey::qu();
        assert_eq!(decode(&["x", "th"], &key), vec!["x", "th"]);
    }

    #[test]
    fn decode_with_empty_key_is_identity() {
        let key = LetterKey::default();
        assert_eq!(decode(&["q", "z"], &key), vec!["q", "z"]);
    }

    #[test]
    fn encode_collapses_split_units() {
        let key = LetterKey::qu().inverse();
        assert_eq!(encode(&["q", "u", "i", "t"], &key), vec!["q", "i", "t"]);
    }

    #[test]
    fn encode_normalizes_case() {
        let key = LetterKey::qu().inverse();
        assert_eq!(encode(&["QU", "E", "E", "N"], &key), vec!["q", "e", "e", "n"]);
    }

    #[test]
    fn round_trip_restores_symbols() {
        let key = LetterKey::qu();
        let symbols: Vec<String> = ["q", "a", "t", "q", "e"].iter().map(|s| (*s).to_string()).collect();
        let display = decode(&symbols, &key);
        assert_eq!(display, vec!["qu", "a", "t", "qu", "e"]);
        assert_eq!(encode(&display, &key.inverse()), symbols);
    }

    #[test]
    fn inverse_swaps_direction() {
        let key = LetterKey::qu();
        assert_eq!(key.inverse().get("qu"), Some("q"));
        assert_eq!(key.inverse().inverse(), key);
    }

    #[test]
    fn key_deserializes_from_json_object() {
        let key: LetterKey = serde_json::from_str(r#"{"Q": "QU"}"#).unwrap();
        // serde bypasses `new`, so the raw entry is kept as written
        assert_eq!(key.get("Q"), Some("QU"));
        assert!(!key.is_empty());
    }
}
