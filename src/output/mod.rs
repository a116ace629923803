//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_generated_puzzle, print_letters, print_solve_result, print_survey_result};
