//! The generation loop
//!
//! A request moves from attempting to one of three ends: a qualifying grid,
//! an exhausted budget, or cancellation. With `returnBest` set the loop keeps
//! the best non-qualifying attempt seen so far and counts a revision each time
//! a newer attempt replaces it.

use super::builder::GridBuilder;
use super::cancel::CancelToken;
use super::comparator::{AttemptRecord, supersedes};
use super::evaluator::{QualityEvaluator, QualitySnapshot};
use super::options::GenerationOptions;
use super::pool;
use super::progress::{ProgressSink, SilentProgress};
use crate::core::{Grid, LetterKey, PuzzleError, plural};
use crate::dictionary::{CommonWords, DictionaryIndex};
use crate::letters::DistributionCatalog;
use crate::solver::{WordFinder, WordResult};
use rand::Rng;
use serde::Serialize;

/// How a successful request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// A grid passed every filter
    Qualified,
    /// The budget ran out; the best attempt is returned
    BestAttempt,
    /// Cancelled; the best attempt so far is returned
    Cancelled,
}

/// A generated grid with its words and search statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPuzzle {
    pub grid: Grid,
    /// Key that maps the flat encoding back to display cells
    pub key: LetterKey,
    pub words: WordResult,
    pub snapshot: QualitySnapshot,
    pub attempts: usize,
    pub revisions: usize,
    pub termination: Termination,
}

impl GeneratedPuzzle {
    /// Status line for the caller
    #[must_use]
    pub fn message(&self) -> String {
        let attempts = format!("{} attempt{}", self.attempts, plural(&self.attempts));
        let revisions = format!("{} revision{}", self.revisions, plural(&self.revisions));
        match self.termination {
            Termination::Qualified => format!("Found valid puzzle after {attempts} and {revisions}"),
            Termination::BestAttempt => {
                format!("Returning best puzzle after max {attempts} and {revisions}.")
            }
            Termination::Cancelled => {
                format!("Cancelled; returning best puzzle after {attempts} and {revisions}.")
            }
        }
    }

    /// Flat single-symbol encoding with the dimension prefix
    #[must_use]
    pub fn code(&self) -> String {
        self.grid.code(&self.key)
    }
}

/// Everything one attempt needs, shared read-only by all workers
#[derive(Debug, Clone)]
pub(crate) struct Session<'a> {
    builder: GridBuilder<'a>,
    finder: WordFinder<'a>,
    evaluator: QualityEvaluator<'a>,
    return_best: bool,
}

impl Session<'_> {
    fn attempt<R: Rng + ?Sized>(&self, attempt: usize, rng: &mut R) -> Option<AttemptRecord> {
        match self.builder.build(rng) {
            Ok(grid) => {
                let words = self.finder.find_words(&grid);
                let snapshot = self.evaluator.evaluate(&words);
                Some(AttemptRecord {
                    attempt,
                    grid,
                    words,
                    snapshot,
                })
            }
            Err(err) if err.is_attempt_level() => {
                log::debug!("attempt {attempt}: {err}");
                None
            }
            Err(err) => {
                log::warn!("attempt {attempt} could not build a grid: {err}");
                None
            }
        }
    }
}

/// Progress of one search loop
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    pub attempts: usize,
    pub revisions: usize,
    pub best: Option<AttemptRecord>,
    pub qualified: Option<AttemptRecord>,
}

impl SearchState {
    /// Run one attempt; true once a qualifying grid is held
    pub fn step<R: Rng + ?Sized>(&mut self, session: &Session<'_>, rng: &mut R) -> bool {
        self.attempts += 1;
        let Some(record) = session.attempt(self.attempts, rng) else {
            return false;
        };

        if record.snapshot.qualifies {
            log::debug!("attempt {} qualified with {} words", self.attempts, record.words.len());
            self.qualified = Some(record);
            return true;
        }
        if session.return_best {
            let criteria = session.evaluator.criteria();
            let replace = self
                .best
                .as_ref()
                .is_none_or(|best| supersedes(&best.snapshot, &record.snapshot, criteria));
            if replace {
                if self.best.is_some() {
                    self.revisions += 1;
                    log::debug!("attempt {} is revision {}", self.attempts, self.revisions);
                }
                self.best = Some(record);
            }
        }
        false
    }
}

/// Produces puzzles from a shared dictionary, common-word table and catalogue
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    dictionary: &'a DictionaryIndex,
    common: &'a CommonWords,
    catalog: &'a DistributionCatalog,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(
        dictionary: &'a DictionaryIndex,
        common: &'a CommonWords,
        catalog: &'a DistributionCatalog,
    ) -> Self {
        Self {
            dictionary,
            common,
            catalog,
        }
    }

    /// Generate with no progress reporting and no cancellation
    ///
    /// # Errors
    /// See [`Generator::generate_with`].
    pub fn generate(&self, options: &GenerationOptions) -> Result<GeneratedPuzzle, PuzzleError> {
        self.generate_with(options, &SilentProgress, None)
    }

    /// Generate, spreading attempts over `options.workers` threads
    ///
    /// # Errors
    /// - `PuzzleError::Configuration` for invalid options, before any attempt
    /// - `PuzzleError::BudgetExhausted` when nothing qualified and `returnBest` is off
    /// - `PuzzleError::Cancelled` when cancelled with no attempt to return
    /// - `PuzzleError::WorkerFailure` when every worker thread died
    pub fn generate_with(
        &self,
        options: &GenerationOptions,
        progress: &dyn ProgressSink,
        cancel: Option<&CancelToken>,
    ) -> Result<GeneratedPuzzle, PuzzleError> {
        if options.workers > 1 {
            let session = self.session(options)?;
            let outcome = pool::run(&session, options, progress, cancel);
            progress.finish();
            let (state, cancelled) = outcome?;
            Self::finish(state, options, &session, cancelled)
        } else {
            self.generate_with_rng(options, &mut rand::rng(), progress, cancel)
        }
    }

    /// Single-threaded generation driven by the supplied random source
    ///
    /// `options.workers` is ignored.
    ///
    /// # Errors
    /// As [`Generator::generate_with`], except `WorkerFailure`.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::{CommonWords, DictionaryIndex};
    /// use boggle_solver::generator::{GenerationOptions, Generator, SilentProgress};
    /// use boggle_solver::letters::DistributionCatalog;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let dict = DictionaryIndex::build(["cat", "dog", "rat"]);
    /// let common = CommonWords::new(["cat"]);
    /// let catalog = DistributionCatalog::builtin();
    /// let generator = Generator::new(&dict, &common, &catalog);
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let puzzle = generator
    ///     .generate_with_rng(&GenerationOptions::default(), &mut rng, &SilentProgress, None)
    ///     .unwrap();
    /// assert_eq!(puzzle.grid.len(), 16);
    /// assert_eq!(puzzle.attempts, 1);
    /// ```
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &GenerationOptions,
        rng: &mut R,
        progress: &dyn ProgressSink,
        cancel: Option<&CancelToken>,
    ) -> Result<GeneratedPuzzle, PuzzleError> {
        let session = self.session(options)?;
        let mut state = SearchState::default();
        let mut cancelled = false;

        while state.attempts < options.max_attempts {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                cancelled = true;
                break;
            }
            let done = state.step(&session, rng);
            progress.advance(1);
            if done {
                break;
            }
        }
        progress.finish();
        Self::finish(state, options, &session, cancelled)
    }

    pub(crate) fn session<'s>(&self, options: &'s GenerationOptions) -> Result<Session<'s>, PuzzleError>
    where
        'a: 's,
    {
        Ok(Session {
            builder: GridBuilder::new(options, self.catalog)?,
            finder: WordFinder::new(self.dictionary, options.max_path_length),
            evaluator: QualityEvaluator::new(self.common, &options.filters),
            return_best: options.return_best,
        })
    }

    fn finish(
        state: SearchState,
        options: &GenerationOptions,
        session: &Session<'_>,
        cancelled: bool,
    ) -> Result<GeneratedPuzzle, PuzzleError> {
        let SearchState {
            attempts,
            revisions,
            best,
            qualified,
        } = state;

        let (record, termination) = match (qualified, best) {
            (Some(record), _) => (record, Termination::Qualified),
            (None, Some(record)) if options.return_best && cancelled => (record, Termination::Cancelled),
            (None, Some(record)) if options.return_best => (record, Termination::BestAttempt),
            (None, _) if cancelled => {
                log::info!("generation cancelled after {attempts} attempts");
                return Err(PuzzleError::Cancelled { attempts });
            }
            (None, _) => {
                log::info!("no acceptable puzzle after {attempts} attempts");
                return Err(PuzzleError::BudgetExhausted { attempts });
            }
        };

        let puzzle = GeneratedPuzzle {
            grid: record.grid,
            key: session.builder.distribution().key.clone(),
            words: record.words,
            snapshot: record.snapshot,
            attempts,
            revisions,
            termination,
        };
        log::info!("{}", puzzle.message());
        Ok(puzzle)
    }
}
