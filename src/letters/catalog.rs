//! Named letter distributions
//!
//! The built-in catalogue covers Scrabble tiles, English letter frequencies,
//! the classic and big cube sets, and syllable units. A JSON file can replace it:
//!
//! ```json
//! {
//!   "default": "scrabble",
//!   "distributions": {
//!     "scrabble": { "kind": "weighted", "weights": { "a": 9, "b": 2 }, "key": { "q": "qu" } },
//!     "tiny": { "kind": "cubes", "cubes": ["aeiou", "rstln"] }
//!   }
//! }
//! ```

use super::distribution::{LetterDistribution, LetterStrategy, SyllableUnits};
use crate::core::{LetterKey, PuzzleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Catalogue default, used to top up short explicit lists
pub const DEFAULT_DISTRIBUTION: &str = "scrabble";

const SCRABBLE_TILES: [(&str, f64); 26] = [
    ("a", 9.0),
    ("b", 2.0),
    ("c", 2.0),
    ("d", 4.0),
    ("e", 12.0),
    ("f", 2.0),
    ("g", 3.0),
    ("h", 2.0),
    ("i", 9.0),
    ("j", 1.0),
    ("k", 1.0),
    ("l", 4.0),
    ("m", 2.0),
    ("n", 6.0),
    ("o", 8.0),
    ("p", 2.0),
    ("q", 1.0),
    ("r", 6.0),
    ("s", 4.0),
    ("t", 6.0),
    ("u", 4.0),
    ("v", 2.0),
    ("w", 2.0),
    ("x", 1.0),
    ("y", 2.0),
    ("z", 1.0),
];

// Percent frequency in running English text
const ENGLISH_FREQUENCIES: [(&str, f64); 26] = [
    ("a", 8.17),
    ("b", 1.49),
    ("c", 2.78),
    ("d", 4.25),
    ("e", 12.70),
    ("f", 2.23),
    ("g", 2.02),
    ("h", 6.09),
    ("i", 6.97),
    ("j", 0.15),
    ("k", 0.77),
    ("l", 4.03),
    ("m", 2.41),
    ("n", 6.75),
    ("o", 7.51),
    ("p", 1.93),
    ("q", 0.10),
    ("r", 5.99),
    ("s", 6.33),
    ("t", 9.06),
    ("u", 2.76),
    ("v", 0.98),
    ("w", 2.36),
    ("x", 0.15),
    ("y", 1.97),
    ("z", 0.07),
];

const BOGGLE_CUBES: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNUQ", "HLNNRZ",
];

const BIG_BOGGLE_CUBES: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCENST", "CEIILT", "CEILPT", "CEIPST", "DDHNOT", "DHHLOR", "DHLNOR", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
];

const ONSETS: [&str; 20] = [
    "b", "c", "d", "f", "g", "h", "l", "m", "n", "p", "r", "s", "t", "w", "st", "tr", "pl", "br",
    "ch", "sh",
];
const NUCLEI: [&str; 10] = ["a", "e", "i", "o", "u", "ea", "ee", "oo", "ai", "ou"];
const CODAS: [&str; 12] = ["n", "r", "s", "t", "d", "l", "ng", "st", "nd", "ck", "th", "m"];

/// A set of named distributions plus the name of the default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCatalog {
    default: String,
    distributions: BTreeMap<String, LetterDistribution>,
}

impl Default for DistributionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DistributionCatalog {
    /// The compiled-in catalogue
    #[must_use]
    pub fn builtin() -> Self {
        let mut distributions = BTreeMap::new();
        for (name, table) in [("scrabble", &SCRABBLE_TILES), ("english", &ENGLISH_FREQUENCIES)] {
            if let Ok(dist) = LetterDistribution::weighted(&table[..], LetterKey::qu()) {
                distributions.insert(name.to_string(), dist);
            }
        }
        distributions.insert(
            "boggle".to_string(),
            LetterDistribution::cubes(&BOGGLE_CUBES[..], LetterKey::qu()),
        );
        distributions.insert(
            "bigBoggle".to_string(),
            LetterDistribution::cubes(&BIG_BOGGLE_CUBES[..], LetterKey::qu()),
        );
        distributions.insert(
            "syllableUnits".to_string(),
            LetterDistribution::new(
                LetterStrategy::Syllables(SyllableUnits {
                    onsets: owned_units(&ONSETS),
                    nuclei: owned_units(&NUCLEI),
                    codas: owned_units(&CODAS),
                }),
                LetterKey::default(),
            ),
        );
        Self {
            default: DEFAULT_DISTRIBUTION.to_string(),
            distributions,
        }
    }

    /// Load a replacement catalogue from JSON
    ///
    /// # Errors
    /// Returns `PuzzleError::Load` if the file is unreadable or malformed, a
    /// distribution cannot be sampled from, or the default is missing or is an
    /// explicit list (explicit lists top up from the default).
    pub fn from_json_file(path: &Path) -> Result<Self, PuzzleError> {
        let resource = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| PuzzleError::load(&resource, e))?;
        let catalog: Self =
            serde_json::from_str(&text).map_err(|e| PuzzleError::load(&resource, e))?;

        for (name, dist) in &catalog.distributions {
            dist.check()
                .map_err(|reason| PuzzleError::load(&resource, format!("{name}: {reason}")))?;
        }
        match catalog.distributions.get(&catalog.default) {
            None => Err(PuzzleError::load(
                &resource,
                format!("default distribution '{}' is not defined", catalog.default),
            )),
            Some(dist) if matches!(dist.strategy, LetterStrategy::Explicit { .. }) => Err(
                PuzzleError::load(&resource, "default distribution cannot be an explicit list"),
            ),
            Some(_) => {
                log::info!(
                    "loaded {} letter distributions from {resource}",
                    catalog.distributions.len()
                );
                Ok(catalog)
            }
        }
    }

    /// Look up a distribution by name
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` for an unknown name.
    pub fn get(&self, name: &str) -> Result<&LetterDistribution, PuzzleError> {
        self.distributions.get(name).ok_or_else(|| {
            PuzzleError::Configuration(format!(
                "unknown letter distribution '{name}' (known: {})",
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// The distribution used for top-ups and unnamed requests
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` if the catalogue has no entry for its
    /// default name, which only a hand-built catalogue can produce.
    pub fn default_distribution(&self) -> Result<&LetterDistribution, PuzzleError> {
        self.get(&self.default)
    }

    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.distributions.keys().map(String::as_str)
    }
}

fn owned_units(units: &[&str]) -> Vec<String> {
    units.iter().map(|&u| u.to_string()).collect()
}
