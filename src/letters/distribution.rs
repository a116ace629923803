//! Letter distribution strategies
//!
//! A [`LetterDistribution`] pairs a sampling strategy with the letter key used
//! to expand its symbols for display.

use crate::core::LetterKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How symbols are drawn for a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LetterStrategy {
    /// Independent draws from a weighted frequency table
    Weighted { weights: FrequencyTable },
    /// One face per cube, cycling the set if more cells than cubes
    Cubes { cubes: Vec<String> },
    /// Onset, nucleus or coda units weighted 3:4:2
    Syllables(SyllableUnits),
    /// A fixed user-supplied list
    Explicit { letters: Vec<String> },
}

/// A strategy plus its decode key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterDistribution {
    #[serde(flatten)]
    pub strategy: LetterStrategy,
    #[serde(default)]
    pub key: LetterKey,
}

impl LetterDistribution {
    #[must_use]
    pub const fn new(strategy: LetterStrategy, key: LetterKey) -> Self {
        Self { strategy, key }
    }

    /// A weighted distribution from `(symbol, weight)` pairs
    ///
    /// # Errors
    /// Returns a message if the weights are empty, negative, or sum to zero.
    pub fn weighted<S: AsRef<str>>(pairs: &[(S, f64)], key: LetterKey) -> Result<Self, String> {
        let weights = pairs
            .iter()
            .map(|(symbol, weight)| (symbol.as_ref().to_string(), *weight))
            .collect::<BTreeMap<_, _>>();
        Ok(Self::new(
            LetterStrategy::Weighted {
                weights: FrequencyTable::try_from(weights)?,
            },
            key,
        ))
    }

    /// A cube-set distribution; each string lists one cube's faces
    #[must_use]
    pub fn cubes<S: AsRef<str>>(cubes: &[S], key: LetterKey) -> Self {
        Self::new(
            LetterStrategy::Cubes {
                cubes: cubes.iter().map(|c| c.as_ref().to_lowercase()).collect(),
            },
            key,
        )
    }

    /// An explicit list with no decode key
    #[must_use]
    pub fn explicit<S: AsRef<str>>(letters: &[S]) -> Self {
        Self::new(
            LetterStrategy::Explicit {
                letters: letters.iter().map(|l| l.as_ref().to_lowercase()).collect(),
            },
            LetterKey::default(),
        )
    }

    /// Structural problems that would make sampling impossible
    ///
    /// # Errors
    /// Returns a message naming the empty component.
    pub fn check(&self) -> Result<(), String> {
        match &self.strategy {
            LetterStrategy::Weighted { .. } => Ok(()),
            LetterStrategy::Cubes { cubes } => {
                if cubes.is_empty() || cubes.iter().any(String::is_empty) {
                    Err("cube set has no cubes or an empty cube".into())
                } else {
                    Ok(())
                }
            }
            LetterStrategy::Syllables(units) => {
                let categories = [&units.onsets, &units.nuclei, &units.codas];
                if categories.iter().any(|list| list.is_empty()) {
                    Err("syllable units need onsets, nuclei and codas".into())
                } else if categories.iter().flat_map(|list| list.iter()).any(String::is_empty) {
                    Err("syllable units contain an empty entry".into())
                } else {
                    Ok(())
                }
            }
            LetterStrategy::Explicit { letters } => {
                if letters.iter().any(String::is_empty) {
                    Err("explicit letter list contains an empty entry".into())
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Symbols with a cumulative frequency table normalized to end at 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FrequencyTable {
    symbols: Vec<String>,
    cumulative: Vec<f64>,
}

impl FrequencyTable {
    /// Symbol whose cumulative band contains `draw` (`0.0 <= draw < 1.0`)
    ///
    /// Binary search over the cumulative weights; draws past the last band
    /// (floating-point slack) map to the final symbol.
    #[must_use]
    pub fn lookup(&self, draw: f64) -> &str {
        let index = self
            .cumulative
            .partition_point(|&c| c <= draw)
            .min(self.symbols.len() - 1);
        &self.symbols[index]
    }

    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl TryFrom<BTreeMap<String, f64>> for FrequencyTable {
    type Error = String;

    fn try_from(weights: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        if weights.is_empty() {
            return Err("frequency table is empty".into());
        }
        if let Some((symbol, _)) = weights.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(format!("invalid weight for symbol '{symbol}'"));
        }
        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            return Err("frequency weights sum to zero".into());
        }

        let mut running = 0.0;
        let mut symbols = Vec::with_capacity(weights.len());
        let mut cumulative = Vec::with_capacity(weights.len());
        for (symbol, weight) in weights {
            if weight == 0.0 {
                continue;
            }
            running += weight / total;
            symbols.push(symbol.to_lowercase());
            cumulative.push(running);
        }
        Ok(Self {
            symbols,
            cumulative,
        })
    }
}

impl From<FrequencyTable> for BTreeMap<String, f64> {
    fn from(table: FrequencyTable) -> Self {
        let mut previous = 0.0;
        table
            .symbols
            .into_iter()
            .zip(table.cumulative)
            .map(|(symbol, c)| {
                let weight = c - previous;
                previous = c;
                (symbol, weight)
            })
            .collect()
    }
}

/// Unit inventories for the syllable generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableUnits {
    pub onsets: Vec<String>,
    pub nuclei: Vec<String>,
    pub codas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_ends_at_one() {
        let dist = LetterDistribution::weighted(&[("a", 1.0), ("b", 3.0)], LetterKey::default()).unwrap();
        let LetterStrategy::Weighted { weights } = dist.strategy else {
            panic!("expected weighted strategy");
        };
        assert!((weights.cumulative.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lookup_respects_bands() {
        let table =
            FrequencyTable::try_from(BTreeMap::from([("a".to_string(), 1.0), ("b".to_string(), 3.0)]))
                .unwrap();
        assert_eq!(table.lookup(0.0), "a");
        assert_eq!(table.lookup(0.24), "a");
        assert_eq!(table.lookup(0.25), "b");
        assert_eq!(table.lookup(0.999), "b");
        assert_eq!(table.lookup(1.0), "b");
    }

    #[test]
    fn zero_weights_are_dropped() {
        let table =
            FrequencyTable::try_from(BTreeMap::from([("a".to_string(), 0.0), ("b".to_string(), 2.0)]))
                .unwrap();
        assert_eq!(table.symbols(), &["b".to_string()]);
    }

    #[test]
    fn rejects_bad_weights() {
        assert!(FrequencyTable::try_from(BTreeMap::new()).is_err());
        assert!(FrequencyTable::try_from(BTreeMap::from([("a".to_string(), -1.0)])).is_err());
        assert!(FrequencyTable::try_from(BTreeMap::from([("a".to_string(), 0.0)])).is_err());
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{"kind": "cubes", "cubes": ["abc", "def"], "key": {"q": "qu"}}"#;
        let dist: LetterDistribution = serde_json::from_str(json).unwrap();
        assert_eq!(dist.strategy, LetterStrategy::Cubes { cubes: vec!["abc".into(), "def".into()] });
        assert_eq!(dist.key, LetterKey::qu());
    }

    #[test]
    fn weighted_json_round_trips() {
        let dist = LetterDistribution::weighted(&[("a", 1.0), ("b", 1.0)], LetterKey::default()).unwrap();
        let json = serde_json::to_string(&dist).unwrap();
        let back: LetterDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back.strategy, dist.strategy);
    }

    #[test]
    fn check_flags_empty_components() {
        let empty_cubes = LetterDistribution::cubes::<&str>(&[], LetterKey::default());
        assert!(empty_cubes.check().is_err());

        let syllables = LetterDistribution::new(
            LetterStrategy::Syllables(SyllableUnits {
                onsets: vec!["b".into()],
                nuclei: vec![],
                codas: vec!["t".into()],
            }),
            LetterKey::default(),
        );
        assert!(syllables.check().is_err());

        let blank_unit = LetterDistribution::new(
            LetterStrategy::Syllables(SyllableUnits {
                onsets: vec!["b".into()],
                nuclei: vec![String::new()],
                codas: vec!["t".into()],
            }),
            LetterKey::default(),
        );
        assert!(blank_unit.check().is_err());

        let blank_cube = LetterDistribution::cubes(&["abc", ""], LetterKey::default());
        assert!(blank_cube.check().is_err());
    }
}
