//! Generation request options
//!
//! Options deserialize from the camelCase JSON the puzzle service accepts:
//!
//! ```json
//! {
//!   "dimensions": { "width": 5, "height": 5 },
//!   "letterDistribution": "bigBoggle",
//!   "customizations": { "requiredWords": { "wordList": ["queen"], "convertQ": true } },
//!   "filters": [
//!     { "type": "totalWords", "min": 100, "max": 300 },
//!     { "type": "averageLength", "comparison": "lessThan", "value": 5.5 }
//!   ],
//!   "maxAttempts": 500,
//!   "returnBest": true
//! }
//! ```

use crate::core::{LetterKey, MIN_SIDE, PuzzleError, decode, encode};
use crate::dictionary::MIN_WORD_LEN;
use crate::solver::DEFAULT_MAX_PATH_LEN;
use serde::{Deserialize, Serialize};

/// Side length used when neither dimension is given
pub const DEFAULT_SIDE: usize = 4;

/// Distribution used when none is named
pub const DEFAULT_LETTER_DISTRIBUTION: &str = "boggle";

/// Requested grid size; a missing side copies the other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Concrete `(width, height)`
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::generator::Dimensions;
    ///
    /// assert_eq!(Dimensions::default().resolve(), (4, 4));
    /// assert_eq!(Dimensions { width: Some(6), height: None }.resolve(), (6, 6));
    /// ```
    #[must_use]
    pub const fn resolve(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(side), None) | (None, Some(side)) => (side, side),
            (None, None) => (DEFAULT_SIDE, DEFAULT_SIDE),
        }
    }
}

/// Direction of a threshold comparison
///
/// `LessThan` passes at the threshold, `MoreThan` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    LessThan,
    MoreThan,
}

impl Comparison {
    #[must_use]
    pub fn passes(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::LessThan => value <= threshold,
            Self::MoreThan => value > threshold,
        }
    }

    /// Gap between `value` and the passing side of `threshold`
    #[must_use]
    pub fn gap(self, value: f64, threshold: f64) -> f64 {
        match self {
            Self::LessThan => (value - threshold).max(0.0),
            Self::MoreThan => (threshold - value).max(0.0),
        }
    }
}

/// Count bounds for words of one length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthLimit {
    #[serde(alias = "wordLength")]
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

/// One quality filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Criterion {
    /// Total number of words found, inclusive bounds
    TotalWords {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    /// Per-length word counts
    WordLengths { limits: Vec<LengthLimit> },
    /// Mean word length against a threshold
    AverageLength { comparison: Comparison, value: f64 },
    /// Percentage of found words missing from the common-word table
    Rarity { comparison: Comparison, value: f64 },
}

impl Criterion {
    /// Short label for logs and comparison reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TotalWords { .. } => "total words",
            Self::WordLengths { .. } => "word lengths",
            Self::AverageLength { .. } => "average length",
            Self::Rarity { .. } => "rarity",
        }
    }

    fn validate(&self) -> Result<(), PuzzleError> {
        let inverted = |min: Option<usize>, max: Option<usize>| min.zip(max).is_some_and(|(lo, hi)| lo > hi);
        match self {
            Self::TotalWords { min, max } if inverted(*min, *max) => Err(PuzzleError::Configuration(
                "total word limit has min above max".into(),
            )),
            Self::WordLengths { limits } => match limits.iter().find(|l| inverted(l.min, l.max)) {
                Some(limit) => Err(PuzzleError::Configuration(format!(
                    "{}-letter word limit has min above max",
                    limit.length
                ))),
                None => Ok(()),
            },
            Self::AverageLength { value, .. } | Self::Rarity { value, .. } if !value.is_finite() => Err(
                PuzzleError::Configuration(format!("{} threshold must be a number", self.label())),
            ),
            _ => Ok(()),
        }
    }
}

/// A user-supplied letter list used instead of sampling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomLetters {
    #[serde(alias = "letterList")]
    pub letters: Vec<String>,
    /// Join `q` + `u` into a single `qu` cell
    pub convert_q: bool,
    pub shuffle: bool,
}

impl CustomLetters {
    /// Cell contents in display form
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::generator::CustomLetters;
    ///
    /// let custom = CustomLetters { letters: vec!["Q".into(), "u".into(), "a".into()], convert_q: true, shuffle: false };
    /// assert_eq!(custom.units(), vec!["qu", "a"]);
    /// ```
    #[must_use]
    pub fn units(&self) -> Vec<String> {
        let letters: Vec<String> = self.letters.iter().map(|l| l.trim().to_lowercase()).collect();
        if self.convert_q {
            convert_q(&letters)
        } else {
            letters
        }
    }
}

/// Words the generated grid must contain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredWords {
    #[serde(alias = "wordList")]
    pub words: Vec<String>,
    /// Treat `qu` as one cell
    pub convert_q: bool,
}

impl RequiredWords {
    /// Each word split into cell units, longest word first
    #[must_use]
    pub fn unit_lists(&self) -> Vec<Vec<String>> {
        let mut words: Vec<String> = self.words.iter().map(|w| w.trim().to_lowercase()).collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        words
            .iter()
            .map(|word| {
                let letters: Vec<String> = word.chars().map(String::from).collect();
                if self.convert_q {
                    convert_q(&letters)
                } else {
                    letters
                }
            })
            .collect()
    }
}

/// The two mutually exclusive ways to steer grid contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Customization {
    CustomLetters(CustomLetters),
    RequiredWords(RequiredWords),
}

/// A full generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub dimensions: Dimensions,
    pub letter_distribution: String,
    #[serde(rename = "customizations", skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
    pub filters: Vec<Criterion>,
    pub max_attempts: usize,
    pub return_best: bool,
    pub workers: usize,
    pub max_path_length: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            letter_distribution: DEFAULT_LETTER_DISTRIBUTION.to_string(),
            customization: None,
            filters: Vec::new(),
            max_attempts: 1,
            return_best: false,
            workers: 1,
            max_path_length: DEFAULT_MAX_PATH_LEN,
        }
    }
}

impl GenerationOptions {
    /// Number of cells in the resolved grid
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        let (width, height) = self.dimensions.resolve();
        width * height
    }

    /// Reject requests that cannot be attempted
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` naming the first problem found.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let (width, height) = self.dimensions.resolve();
        let config = |msg: String| Err(PuzzleError::Configuration(msg));

        if width < MIN_SIDE || height < MIN_SIDE {
            return config(format!(
                "grid must be at least {MIN_SIDE}x{MIN_SIDE}, got {width}x{height}"
            ));
        }
        if self.max_attempts == 0 {
            return config("maxAttempts must be at least 1".into());
        }
        if self.workers == 0 {
            return config("workers must be at least 1".into());
        }
        if self.max_path_length < MIN_WORD_LEN {
            return config(format!("maxPathLength must be at least {MIN_WORD_LEN}"));
        }

        let cells = width * height;
        match &self.customization {
            Some(Customization::CustomLetters(custom)) => {
                let units = custom.units();
                if units.len() > cells {
                    return config(format!(
                        "{} custom letters do not fit a {width}x{height} grid",
                        units.len()
                    ));
                }
                if units.iter().any(String::is_empty) {
                    return config("custom letter list contains an empty entry".into());
                }
                if units.len() < cells {
                    log::warn!(
                        "custom letter list is {} short; topping up from the default distribution",
                        cells - units.len()
                    );
                }
            }
            Some(Customization::RequiredWords(required)) => {
                let lists = required.unit_lists();
                if lists.is_empty() {
                    return config("required word list is empty".into());
                }
                if lists.iter().any(Vec::is_empty) {
                    return config("required word list contains an empty word".into());
                }
                if let Some(long) = lists.iter().find(|units| units.len() > cells) {
                    return config(format!(
                        "required word \"{}\" needs more cells than a {width}x{height} grid has",
                        long.concat()
                    ));
                }
            }
            None => {}
        }

        self.filters.iter().try_for_each(Criterion::validate)
    }
}

/// `qu` entries become one `qu` cell; a lone `q` also becomes `qu`
fn convert_q(letters: &[String]) -> Vec<String> {
    let q_key = LetterKey::qu();
    decode(&encode(letters, &q_key.inverse()), &q_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service() {
        let options = GenerationOptions::default();
        assert_eq!(options.dimensions.resolve(), (4, 4));
        assert_eq!(options.letter_distribution, "boggle");
        assert_eq!(options.max_attempts, 1);
        assert!(!options.return_best);
        assert_eq!(options.workers, 1);
        assert_eq!(options.max_path_length, 20);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn missing_side_copies_the_other() {
        assert_eq!(Dimensions { width: None, height: Some(5) }.resolve(), (5, 5));
        assert_eq!(Dimensions::new(5, 3).resolve(), (5, 3));
    }

    #[test]
    fn comparison_boundary_is_asymmetric() {
        assert!(Comparison::LessThan.passes(4.0, 4.0));
        assert!(!Comparison::MoreThan.passes(4.0, 4.0));
        assert!(Comparison::MoreThan.passes(4.1, 4.0));
        assert!(!Comparison::LessThan.passes(4.1, 4.0));
    }

    #[test]
    fn comparison_gap_is_zero_on_passing_side() {
        assert!(Comparison::LessThan.gap(3.0, 4.0).abs() < f64::EPSILON);
        assert!((Comparison::LessThan.gap(6.0, 4.0) - 2.0).abs() < f64::EPSILON);
        assert!((Comparison::MoreThan.gap(1.5, 4.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_service_json() {
        let json = r#"{
            "dimensions": { "width": 5 },
            "letterDistribution": "bigBoggle",
            "customizations": { "requiredWords": { "wordList": ["Cat", "queen"], "convertQ": true } },
            "filters": [
                { "type": "totalWords", "min": 50 },
                { "type": "wordLengths", "limits": [{ "wordLength": 8, "min": 1 }] },
                { "type": "rarity", "comparison": "moreThan", "value": 20 }
            ],
            "maxAttempts": 10,
            "returnBest": true
        }"#;
        let options: GenerationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.dimensions.resolve(), (5, 5));
        assert_eq!(options.workers, 1);
        assert_eq!(options.filters.len(), 3);
        let Some(Customization::RequiredWords(required)) = &options.customization else {
            panic!("expected required words");
        };
        assert_eq!(required.unit_lists(), vec![vec!["qu", "e", "e", "n"], vec!["c", "a", "t"]]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn convert_q_joins_split_units() {
        let custom = CustomLetters {
            letters: vec!["q".into(), "u".into(), "i".into(), "qu".into()],
            convert_q: true,
            shuffle: false,
        };
        assert_eq!(custom.units(), vec!["qu", "i", "qu"]);

        let plain = CustomLetters {
            convert_q: false,
            ..custom
        };
        assert_eq!(plain.units().len(), 4);
    }

    #[test]
    fn rejects_small_grid() {
        let options = GenerationOptions {
            dimensions: Dimensions::new(2, 4),
            ..GenerationOptions::default()
        };
        assert_eq!(options.validate().unwrap_err().code(), "E-CONFIG");
    }

    #[test]
    fn rejects_zero_budget_and_workers() {
        let zero_attempts = GenerationOptions {
            max_attempts: 0,
            ..GenerationOptions::default()
        };
        assert!(zero_attempts.validate().is_err());
        let zero_workers = GenerationOptions {
            workers: 0,
            ..GenerationOptions::default()
        };
        assert!(zero_workers.validate().is_err());
    }

    #[test]
    fn rejects_oversized_custom_list() {
        let options = GenerationOptions {
            dimensions: Dimensions::new(3, 3),
            customization: Some(Customization::CustomLetters(CustomLetters {
                letters: vec!["a".into(); 10],
                ..CustomLetters::default()
            })),
            ..GenerationOptions::default()
        };
        assert!(matches!(options.validate(), Err(PuzzleError::Configuration(_))));
    }

    #[test]
    fn short_custom_list_is_allowed() {
        let options = GenerationOptions {
            customization: Some(Customization::CustomLetters(CustomLetters {
                letters: vec!["a".into(); 3],
                ..CustomLetters::default()
            })),
            ..GenerationOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_bad_required_words() {
        let empty = GenerationOptions {
            customization: Some(Customization::RequiredWords(RequiredWords::default())),
            ..GenerationOptions::default()
        };
        assert!(empty.validate().is_err());

        let too_long = GenerationOptions {
            dimensions: Dimensions::new(3, 3),
            customization: Some(Customization::RequiredWords(RequiredWords {
                words: vec!["extraordinary".into()],
                convert_q: false,
            })),
            ..GenerationOptions::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn rejects_inverted_limits() {
        let options = GenerationOptions {
            filters: vec![Criterion::TotalWords {
                min: Some(10),
                max: Some(5),
            }],
            ..GenerationOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
