//! Core domain types for word grids
//!
//! This module contains the grid, the letter-key codec and the error taxonomy.
//! Everything here is pure and cheap to test in isolation.

mod error;
mod grid;
mod key;

pub use error::PuzzleError;
pub(crate) use error::plural;
pub use grid::{DIRECTIONS, Grid, MIN_SIDE};
pub(crate) use grid::neighbors_of;
pub use key::{LetterKey, decode, encode};
