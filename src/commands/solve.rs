//! Grid solving command
//!
//! Parses a flat letter string into a grid and lists every word it contains.

use crate::core::{Grid, LetterKey, PuzzleError, decode};
use crate::dictionary::DictionaryIndex;
use crate::generator::Dimensions;
use crate::solver::{DEFAULT_MAX_PATH_LEN, WordFinder, WordResult};

/// Configuration for solving a grid
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Flat letters, optionally prefixed with one or two dimension digits
    pub letters: String,
    /// Explicit dimensions; when either is set, digits in `letters` are ignored
    pub width: Option<usize>,
    pub height: Option<usize>,
    /// Expand `q` cells to `qu` before searching
    pub decode_q: bool,
    pub max_path_length: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            width: None,
            height: None,
            decode_q: false,
            max_path_length: DEFAULT_MAX_PATH_LEN,
        }
    }
}

/// Result of solving a grid
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub grid: Grid,
    pub words: WordResult,
}

/// Solve a letter string against a dictionary
///
/// # Errors
///
/// Returns `PuzzleError::Configuration` if:
/// - The string has too few letters for the grid
/// - A side is shorter than three cells
pub fn solve_letters(config: &SolveConfig, dictionary: &DictionaryIndex) -> Result<SolveResult, PuzzleError> {
    let grid = parse_grid(config)?;
    let grid = if config.decode_q {
        Grid::new(grid.width(), grid.height(), &decode(grid.cells(), &LetterKey::qu()))?
    } else {
        grid
    };

    let words = WordFinder::new(dictionary, config.max_path_length).find_words(&grid);
    log::debug!(
        "{}x{} grid holds {} words",
        grid.width(),
        grid.height(),
        words.len()
    );
    Ok(SolveResult { grid, words })
}

fn parse_grid(config: &SolveConfig) -> Result<Grid, PuzzleError> {
    if config.width.is_none() && config.height.is_none() {
        return Grid::parse_letters(&config.letters);
    }

    let (width, height) = Dimensions {
        width: config.width,
        height: config.height,
    }
    .resolve();
    let needed = width * height;
    let letters: Vec<String> = config
        .letters
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(needed)
        .map(|c| c.to_ascii_lowercase().to_string())
        .collect();
    if letters.len() < needed {
        return Err(PuzzleError::Configuration(format!(
            "{width}x{height} grid needs {needed} letters, got {}",
            letters.len()
        )));
    }
    Grid::new(width, height, &letters)
}
