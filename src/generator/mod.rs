//! Puzzle generation
//!
//! Builds grids from a letter distribution or caller-supplied letters, solves
//! them, scores the result against quality filters and retries until a grid
//! qualifies or the attempt budget runs out.
//!
//! # Examples
//!
//! ```
//! use boggle_solver::dictionary::{CommonWords, DictionaryIndex};
//! use boggle_solver::generator::{
//!     CustomLetters, Customization, Dimensions, GenerationOptions, Generator, minimum_units,
//! };
//! use boggle_solver::letters::DistributionCatalog;
//!
//! let words = vec![vec!["c".to_string(), "a".into(), "t".into()]];
//! assert_eq!(minimum_units(&words), ["c", "a", "t"]);
//!
//! let dict = DictionaryIndex::build(["cab", "abc"]);
//! let common = CommonWords::new(["cab"]);
//! let catalog = DistributionCatalog::builtin();
//! let options = GenerationOptions {
//!     dimensions: Dimensions::new(3, 3),
//!     customization: Some(Customization::CustomLetters(CustomLetters {
//!         letters: "abcdefghi".chars().map(String::from).collect(),
//!         convert_q: false,
//!         shuffle: false,
//!     })),
//!     ..GenerationOptions::default()
//! };
//! let puzzle = Generator::new(&dict, &common, &catalog).generate(&options).unwrap();
//! assert!(puzzle.words.contains("abc"));
//! ```

mod builder;
mod cancel;
mod comparator;
mod evaluator;
mod options;
mod orchestrator;
mod pool;
mod progress;

pub use builder::{GridBuilder, PLACEMENT_RETRIES, minimum_units};
pub use cancel::{CancelRegistry, CancelToken, JobId};
pub use comparator::{AttemptRecord, preferred, supersedes};
pub use evaluator::{QualityEvaluator, QualitySnapshot};
pub use options::{
    Comparison, Criterion, CustomLetters, Customization, DEFAULT_LETTER_DISTRIBUTION, DEFAULT_SIDE,
    Dimensions, GenerationOptions, LengthLimit, RequiredWords,
};
pub use orchestrator::{GeneratedPuzzle, Generator, Termination};
pub use pool::BATCH_ATTEMPTS;
pub use progress::{CountingProgress, ProgressSink, SilentProgress};
