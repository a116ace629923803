//! Puzzle generation command
//!
//! Loads a request from JSON, applies command-line overrides and runs the
//! generator behind a progress bar. An optional timeout cancels the job.

use crate::core::PuzzleError;
use crate::generator::{
    CancelRegistry, Criterion, CustomLetters, Customization, Dimensions, GeneratedPuzzle,
    GenerationOptions, Generator, RequiredWords,
};
use crossbeam_channel::{after, bounded, select};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Command-line values layered over a loaded request
#[derive(Debug, Clone, Default)]
pub struct GenerateOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub distribution: Option<String>,
    pub max_attempts: Option<usize>,
    pub workers: Option<usize>,
    pub return_best: bool,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    /// Words the grid must contain
    pub require: Vec<String>,
    /// Letters to use instead of sampling
    pub letters: Option<String>,
    pub convert_q: bool,
    /// Shuffle `letters` before placing them; otherwise they fill the grid in order
    pub shuffle: bool,
}

impl GenerateOverrides {
    /// Layer these values over `options`
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` if both letters and required
    /// words are given.
    pub fn apply(self, mut options: GenerationOptions) -> Result<GenerationOptions, PuzzleError> {
        if self.width.is_some() || self.height.is_some() {
            options.dimensions = Dimensions {
                width: self.width.or(options.dimensions.width),
                height: self.height.or(options.dimensions.height),
            };
        }
        if let Some(distribution) = self.distribution {
            options.letter_distribution = distribution;
        }
        if let Some(max_attempts) = self.max_attempts {
            options.max_attempts = max_attempts;
        }
        if let Some(workers) = self.workers {
            options.workers = workers;
        }
        options.return_best |= self.return_best;

        if self.min_words.is_some() || self.max_words.is_some() {
            options
                .filters
                .retain(|criterion| !matches!(criterion, Criterion::TotalWords { .. }));
            options.filters.push(Criterion::TotalWords {
                min: self.min_words,
                max: self.max_words,
            });
        }

        match (self.letters, self.require.is_empty()) {
            (Some(_), false) => {
                return Err(PuzzleError::Configuration(
                    "custom letters and required words cannot be combined".into(),
                ));
            }
            (Some(letters), true) => {
                options.customization = Some(Customization::CustomLetters(CustomLetters {
                    letters: letters
                        .chars()
                        .filter(|c| !c.is_whitespace())
                        .map(String::from)
                        .collect(),
                    convert_q: self.convert_q,
                    shuffle: self.shuffle,
                }));
            }
            (None, false) => {
                options.customization = Some(Customization::RequiredWords(RequiredWords {
                    words: self.require,
                    convert_q: self.convert_q,
                }));
            }
            (None, true) => {}
        }
        Ok(options)
    }
}

/// Read a request file, or the defaults when no file is given
///
/// # Errors
/// Returns `PuzzleError::Configuration` if the file cannot be read or parsed.
pub fn load_options(path: Option<&Path>) -> Result<GenerationOptions, PuzzleError> {
    let Some(path) = path else {
        return Ok(GenerationOptions::default());
    };
    let invalid = |e: &dyn std::fmt::Display| PuzzleError::Configuration(format!("{}: {e}", path.display()));
    let text = fs::read_to_string(path).map_err(|e| invalid(&e))?;
    serde_json::from_str(&text).map_err(|e| invalid(&e))
}

/// A progress bar over `len` attempts
#[must_use]
pub fn attempt_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Run one generation job
///
/// When `timeout` elapses first, the job is cancelled and returns its best
/// attempt if `returnBest` is set.
///
/// # Errors
/// Any error from [`Generator::generate_with`].
pub fn run_generate(
    generator: &Generator<'_>,
    options: &GenerationOptions,
    timeout: Option<Duration>,
    show_progress: bool,
) -> Result<GeneratedPuzzle, PuzzleError> {
    let registry = CancelRegistry::new();
    let (job, token) = registry.register();
    let bar = if show_progress {
        attempt_bar(options.max_attempts)
    } else {
        ProgressBar::hidden()
    };
    bar.set_message(format!("{job}"));

    let (done_tx, done_rx) = bounded::<()>(0);
    let outcome = thread::scope(|scope| {
        if let Some(limit) = timeout {
            let registry = &registry;
            scope.spawn(move || {
                select! {
                    recv(done_rx) -> _ => {},
                    recv(after(limit)) -> _ => {
                        log::warn!("{job} timed out after {}s; cancelling", limit.as_secs_f64());
                        registry.cancel(job);
                    },
                }
            });
        }
        let outcome = generator.generate_with(options, &bar, Some(&token));
        drop(done_tx);
        outcome
    });

    registry.release(job);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{CommonWords, DictionaryIndex, EmbeddedWords};
    use crate::generator::Termination;
    use crate::letters::DistributionCatalog;
    use std::io::Write;

    #[test]
    fn overrides_replace_fields() {
        let overrides = GenerateOverrides {
            width: Some(5),
            max_attempts: Some(7),
            min_words: Some(10),
            return_best: true,
            ..GenerateOverrides::default()
        };
        let options = overrides.apply(GenerationOptions::default()).unwrap();
        assert_eq!(options.dimensions.resolve(), (5, 5));
        assert_eq!(options.max_attempts, 7);
        assert!(options.return_best);
        assert_eq!(
            options.filters,
            vec![Criterion::TotalWords {
                min: Some(10),
                max: None
            }]
        );
    }

    #[test]
    fn word_limits_replace_existing_total_filter() {
        let base = GenerationOptions {
            filters: vec![Criterion::TotalWords {
                min: Some(1),
                max: Some(2),
            }],
            ..GenerationOptions::default()
        };
        let overrides = GenerateOverrides {
            max_words: Some(50),
            ..GenerateOverrides::default()
        };
        let options = overrides.apply(base).unwrap();
        assert_eq!(options.filters.len(), 1);
    }

    #[test]
    fn custom_letters_keep_order_unless_shuffled() {
        let ordered = GenerateOverrides {
            letters: Some("abc def ghi".into()),
            ..GenerateOverrides::default()
        };
        let Some(Customization::CustomLetters(custom)) =
            ordered.apply(GenerationOptions::default()).unwrap().customization
        else {
            panic!("expected custom letters");
        };
        assert!(!custom.shuffle);
        assert_eq!(custom.letters.concat(), "abcdefghi");

        let shuffled = GenerateOverrides {
            letters: Some("abcdefghi".into()),
            shuffle: true,
            ..GenerateOverrides::default()
        };
        let Some(Customization::CustomLetters(custom)) =
            shuffled.apply(GenerationOptions::default()).unwrap().customization
        else {
            panic!("expected custom letters");
        };
        assert!(custom.shuffle);
    }

    #[test]
    fn letters_and_required_words_conflict() {
        let overrides = GenerateOverrides {
            letters: Some("abcdefghi".into()),
            require: vec!["cat".into()],
            ..GenerateOverrides::default()
        };
        let err = overrides.apply(GenerationOptions::default()).unwrap_err();
        assert_eq!(err.code(), "E-CONFIG");
    }

    #[test]
    fn load_options_reads_camel_case_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dimensions": {{"width": 5}}, "maxAttempts": 3, "returnBest": true,
                "filters": [{{"type": "totalWords", "min": 20}}]}}"#
        )
        .unwrap();
        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.dimensions.resolve(), (5, 5));
        assert_eq!(options.max_attempts, 3);
        assert!(options.return_best);
        assert_eq!(options.letter_distribution, "boggle");
    }

    #[test]
    fn missing_options_file_is_configuration_error() {
        let err = load_options(Some(Path::new("/nonexistent/options.json"))).unwrap_err();
        assert_eq!(err.code(), "E-CONFIG");
    }

    #[test]
    fn run_generate_returns_qualifying_puzzle() {
        let dict = DictionaryIndex::from_source(&EmbeddedWords::Dictionary).unwrap();
        let common = CommonWords::from_source(&EmbeddedWords::Common).unwrap();
        let catalog = DistributionCatalog::builtin();
        let generator = Generator::new(&dict, &common, &catalog);
        let puzzle = run_generate(
            &generator,
            &GenerationOptions::default(),
            Some(Duration::from_secs(60)),
            false,
        )
        .unwrap();
        assert_eq!(puzzle.termination, Termination::Qualified);
    }

    #[test]
    fn timeout_cancels_unreachable_job() {
        let dict = DictionaryIndex::from_source(&EmbeddedWords::Dictionary).unwrap();
        let common = CommonWords::from_source(&EmbeddedWords::Common).unwrap();
        let catalog = DistributionCatalog::builtin();
        let generator = Generator::new(&dict, &common, &catalog);
        let options = GenerationOptions {
            filters: vec![Criterion::TotalWords {
                min: Some(9999),
                max: None,
            }],
            max_attempts: 2_000_000,
            ..GenerationOptions::default()
        };

        let err = run_generate(&generator, &options, Some(Duration::from_millis(150)), false)
            .unwrap_err();
        match err {
            PuzzleError::Cancelled { attempts } => {
                assert!(attempts > 0 && attempts < options.max_attempts);
            }
            other => panic!("expected cancellation, got {other:?}"),
        }
    }
}
