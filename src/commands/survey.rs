//! Leaderboard survey
//!
//! Rolls the cube set for a board size many times in parallel, keeps the
//! rolls whose word counts fall inside the limits, and merges the ones that
//! beat the stored leaderboard's average.

use super::generate::attempt_bar;
use crate::core::{LetterKey, PuzzleError, decode};
use crate::generator::{
    Criterion, CustomLetters, Customization, Dimensions, GenerationOptions, Generator,
    SilentProgress,
};
use crate::letters::{DistributionCatalog, LetterStrategy, random_cube_roll};
use crate::store::{BestPuzzleStore, board_average, merge_above_average};
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Configuration for a survey run
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Board side; 4 uses the classic cubes, 5 the big set
    pub size: usize,
    pub repetitions: usize,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub show_progress: bool,
}

impl SurveyConfig {
    #[must_use]
    pub const fn new(size: usize, repetitions: usize) -> Self {
        Self {
            size,
            repetitions,
            min_words: None,
            max_words: None,
            show_progress: false,
        }
    }

    /// Leaderboard key for this board size
    #[must_use]
    pub fn board_key(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Outcome of a survey run
#[derive(Debug, Clone)]
pub struct SurveyResult {
    pub repetitions: usize,
    /// Puzzle codes and word counts that fell inside the limits, best first
    pub qualifying: Vec<(String, u64)>,
    /// How many of those entered the leaderboard
    pub added: usize,
    pub board_size: usize,
    pub board_average: f64,
}

fn cube_set(catalog: &DistributionCatalog, size: usize) -> Result<(&[String], &LetterKey), PuzzleError> {
    let name = match size {
        4 => "boggle",
        5 => "bigBoggle",
        _ => {
            return Err(PuzzleError::Configuration(format!(
                "no cube set for a {size}x{size} board"
            )));
        }
    };
    let dist = catalog.get(name)?;
    match &dist.strategy {
        LetterStrategy::Cubes { cubes } if cubes.len() == size * size => Ok((cubes, &dist.key)),
        _ => Err(PuzzleError::Configuration(format!(
            "distribution {name} is not a {} cube set",
            size * size
        ))),
    }
}

/// Run the survey and update the store
///
/// The leaderboard is read before the rolls start and written once after
/// they finish, and only when something was added.
///
/// # Errors
/// Returns an error if the board size has no cube set or the store fails.
pub fn run_survey(
    generator: &Generator<'_>,
    catalog: &DistributionCatalog,
    store: &dyn BestPuzzleStore,
    config: &SurveyConfig,
) -> Result<SurveyResult, PuzzleError> {
    let (cubes, key) = cube_set(catalog, config.size)?;
    let key_name = config.board_key();
    let mut board = store.read(&key_name)?;

    let bar = if config.show_progress {
        attempt_bar(config.repetitions)
    } else {
        ProgressBar::hidden()
    };
    bar.set_message(key_name.clone());

    let filter = Criterion::TotalWords {
        min: config.min_words,
        max: config.max_words,
    };
    let mut qualifying: Vec<(String, u64)> = (0..config.repetitions)
        .into_par_iter()
        .filter_map(|_| {
            let mut rng = rand::rng();
            let letters = decode(&random_cube_roll(cubes, &mut rng), key);
            let options = GenerationOptions {
                dimensions: Dimensions::new(config.size, config.size),
                customization: Some(Customization::CustomLetters(CustomLetters {
                    letters,
                    convert_q: false,
                    shuffle: true,
                })),
                filters: vec![filter.clone()],
                ..GenerationOptions::default()
            };
            let outcome = generator.generate_with_rng(&options, &mut rng, &SilentProgress, None);
            bar.inc(1);
            match outcome {
                Ok(puzzle) => Some((puzzle.code(), puzzle.words.len() as u64)),
                Err(PuzzleError::BudgetExhausted { .. }) => None,
                Err(err) => {
                    log::warn!("survey roll failed: {err}");
                    None
                }
            }
        })
        .collect();
    bar.finish_and_clear();

    qualifying.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    qualifying.dedup_by(|a, b| a.0 == b.0);

    let added = merge_above_average(&mut board, qualifying.iter().cloned());
    if added > 0 {
        store.write(&key_name, &board)?;
    }

    let average = board_average(&board);
    log::info!(
        "survey of {} rolls: {} in range, {added} added",
        config.repetitions,
        qualifying.len()
    );

    Ok(SurveyResult {
        repetitions: config.repetitions,
        qualifying,
        added,
        board_size: board.len(),
        board_average: average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{CommonWords, DictionaryIndex, EmbeddedWords};
    use crate::store::JsonFileStore;
    use tempfile::TempDir;

    struct Fixture {
        dict: DictionaryIndex,
        common: CommonWords,
        catalog: DistributionCatalog,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dict: DictionaryIndex::from_source(&EmbeddedWords::Dictionary).unwrap(),
                common: CommonWords::from_source(&EmbeddedWords::Common).unwrap(),
                catalog: DistributionCatalog::builtin(),
            }
        }
    }

    #[test]
    fn unsupported_size_is_configuration_error() {
        let fixture = Fixture::new();
        let generator = Generator::new(&fixture.dict, &fixture.common, &fixture.catalog);
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let err = run_survey(&generator, &fixture.catalog, &store, &SurveyConfig::new(6, 1)).unwrap_err();
        assert_eq!(err.code(), "E-CONFIG");
    }

    #[test]
    fn unfiltered_survey_fills_empty_board() {
        let fixture = Fixture::new();
        let generator = Generator::new(&fixture.dict, &fixture.common, &fixture.catalog);
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let result = run_survey(&generator, &fixture.catalog, &store, &SurveyConfig::new(4, 8)).unwrap();
        assert_eq!(result.repetitions, 8);
        assert!(!result.qualifying.is_empty());
        assert!(result.added >= 1);
        let board = store.read("4x4").unwrap();
        assert_eq!(board.len(), result.board_size);
        assert!(board.keys().all(|code| code.starts_with("44")));
    }

    #[test]
    fn unreachable_limits_leave_store_untouched() {
        let fixture = Fixture::new();
        let generator = Generator::new(&fixture.dict, &fixture.common, &fixture.catalog);
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let config = SurveyConfig {
            min_words: Some(100_000),
            ..SurveyConfig::new(5, 4)
        };
        let result = run_survey(&generator, &fixture.catalog, &store, &config).unwrap();
        assert!(result.qualifying.is_empty());
        assert_eq!(result.added, 0);
        assert!(!store.path_for("5x5").exists());
    }
}
