//! Letter grid representation
//!
//! A [`Grid`] stores `height` rows of `width` cells in row-major order. Each cell
//! holds one symbol in display form, which may span several letters (`qu`).

use super::error::PuzzleError;
use super::key::LetterKey;
use serde::Serialize;
use std::fmt;

/// Smallest supported side length
pub const MIN_SIDE: usize = 3;

/// The eight neighbour offsets as `(row, column)` deltas
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// A fully populated `width` x `height` letter grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Create a grid from row-major cells
    ///
    /// Cells are lower-cased. Multi-letter cells are kept as a single symbol.
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` if either side is below [`MIN_SIDE`],
    /// the cell count does not equal `width * height`, or a cell is empty.
    pub fn new<S: AsRef<str>>(width: usize, height: usize, cells: &[S]) -> Result<Self, PuzzleError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(PuzzleError::Configuration(format!(
                "grid must be at least {MIN_SIDE}x{MIN_SIDE}, got {width}x{height}"
            )));
        }
        if cells.len() != width * height {
            return Err(PuzzleError::Configuration(format!(
                "{width}x{height} grid needs {} cells, got {}",
                width * height,
                cells.len()
            )));
        }
        let cells: Vec<String> = cells.iter().map(|c| c.as_ref().trim().to_lowercase()).collect();
        if cells.iter().any(String::is_empty) {
            return Err(PuzzleError::Configuration("grid contains an empty cell".into()));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a flat letter string, optionally prefixed with dimension digits
    ///
    /// - two leading digits: width then height (`"43abcdefghijkl"`)
    /// - one leading digit: used for both sides (`"4abcdefghijklmnop"`)
    /// - none: both sides are the integer square root of the letter count
    ///
    /// A zero digit counts as absent. Whitespace is ignored and letters beyond
    /// `width * height` are dropped.
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` when fewer letters than cells are given
    /// or the resulting dimensions are invalid.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    ///
    /// let grid = Grid::parse_letters("4abcdefghijklmnop").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (4, 4));
    /// assert_eq!(grid.cell(1, 1), "f");
    /// ```
    pub fn parse_letters(input: &str) -> Result<Self, PuzzleError> {
        let mut chars: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace())
            // One input char is one cell even when its lowercase form is longer
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect();

        let leading = |c: Option<&char>| c.and_then(|c| c.to_digit(10)).filter(|&d| d > 0);
        let (width, height) = match (leading(chars.first()), leading(chars.get(1))) {
            (Some(w), Some(h)) => {
                chars.drain(..2);
                (w as usize, h as usize)
            }
            (Some(side), None) => {
                chars.remove(0);
                (side as usize, side as usize)
            }
            _ => {
                let side = chars.len().isqrt();
                (side, side)
            }
        };

        let needed = width * height;
        if chars.len() < needed {
            return Err(PuzzleError::Configuration(format!(
                "{width}x{height} grid needs {needed} letters, got {}",
                chars.len()
            )));
        }
        if chars.len() > needed {
            log::warn!(
                "ignoring {} letters beyond the {width}x{height} grid",
                chars.len() - needed
            );
        }

        let cells: Vec<String> = chars[..needed].iter().map(char::to_string).collect();
        Self::new(width, height, &cells)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell contents at `row`, `col`
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.width + col]
    }

    /// Cell contents by row-major index
    #[inline]
    #[must_use]
    pub fn cell_at(&self, index: usize) -> &str {
        &self.cells[index]
    }

    /// All cells in row-major order
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.width)
    }

    /// Row-major indices of the cells adjacent to `index` (up to eight)
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        neighbors_of(self.width, self.height, index)
    }

    /// Flat single-symbol serialization (`qu` cells become `q` under the `q -> qu` key)
    #[must_use]
    pub fn encoded(&self, key: &LetterKey) -> String {
        let inverse = key.inverse();
        self.cells.iter().map(|cell| inverse.apply(cell)).collect()
    }

    /// Serialization prefixed with the dimension digits, accepted by [`Grid::parse_letters`]
    ///
    /// Grids with a side of ten or more cannot carry a one-digit prefix and are
    /// returned without one.
    #[must_use]
    pub fn code(&self, key: &LetterKey) -> String {
        let body = self.encoded(key);
        if self.width < 10 && self.height < 10 {
            format!("{}{}{body}", self.width, self.height)
        } else {
            body
        }
    }
}

/// Neighbour indices for a row-major `width` x `height` layout
pub(crate) fn neighbors_of(width: usize, height: usize, index: usize) -> impl Iterator<Item = usize> {
    let row = index / width;
    let col = index % width;
    DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < height && c < width).then_some(r * width + c)
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row.iter().map(String::as_str).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
