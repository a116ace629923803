//! Grid word search
//!
//! Enumerates every dictionary word that can be traced through a grid.

mod finder;
mod result;

pub use finder::{DEFAULT_MAX_PATH_LEN, WordFinder, find_words};
pub use result::WordResult;
