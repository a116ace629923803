//! Command implementations

pub mod generate;
pub mod letters;
pub mod solve;
pub mod survey;

pub use generate::{GenerateOverrides, attempt_bar, load_options, run_generate};
pub use letters::{LettersResult, sample_letters};
pub use solve::{SolveConfig, SolveResult, solve_letters};
pub use survey::{SurveyConfig, SurveyResult, run_survey};
