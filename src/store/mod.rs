//! Leaderboard persistence
//!
//! Boards map a puzzle code to its score (word count). They are read and
//! written between generation requests only.

mod file;

pub use file::JsonFileStore;

use crate::core::PuzzleError;
use std::collections::BTreeMap;

/// Puzzle code to score
pub type Leaderboard = BTreeMap<String, u64>;

/// Storage for named leaderboards
pub trait BestPuzzleStore {
    /// Load a board; a board that was never written is empty
    ///
    /// # Errors
    /// Returns an error if stored data exists but cannot be read or parsed.
    fn read(&self, key: &str) -> Result<Leaderboard, PuzzleError>;

    /// Replace a board
    ///
    /// # Errors
    /// Returns an error if the board cannot be written.
    fn write(&self, key: &str, board: &Leaderboard) -> Result<(), PuzzleError>;
}

/// Mean score; zero for an empty board
#[must_use]
pub fn board_average(board: &Leaderboard) -> f64 {
    if board.is_empty() {
        return 0.0;
    }
    board.values().sum::<u64>() as f64 / board.len() as f64
}

/// Merge candidates that beat the board's running average
///
/// Candidates are taken best first; each is added only while its score is
/// above the average of the board as merged so far. Returns how many were
/// added.
///
/// # Examples
/// ```
/// use boggle_solver::store::{Leaderboard, merge_above_average};
///
/// let mut board = Leaderboard::from([("a".to_string(), 10), ("b".to_string(), 20)]);
/// let added = merge_above_average(&mut board, [("c".to_string(), 30), ("d".to_string(), 12)]);
/// assert_eq!(added, 1);
/// assert!(board.contains_key("c"));
/// ```
pub fn merge_above_average<I>(board: &mut Leaderboard, candidates: I) -> usize
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut candidates: Vec<(String, u64)> = candidates.into_iter().collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut added = 0;
    for (code, score) in candidates {
        let beats = board.is_empty() || score as f64 > board_average(board);
        if !beats {
            break;
        }
        if board.insert(code, score).is_none() {
            added += 1;
        }
    }
    log::debug!("merged {added} puzzles; board average now {:.1}", board_average(board));
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(entries: &[(&str, u64)]) -> Leaderboard {
        entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn empty_board_accepts_first_candidate() {
        let mut b = Leaderboard::new();
        let added = merge_above_average(&mut b, vec![("x".into(), 5), ("y".into(), 4)]);
        // After "x" the average is 5, so 4 no longer qualifies
        assert_eq!(added, 1);
        assert_eq!(b, board(&[("x", 5)]));
    }

    #[test]
    fn average_rises_as_candidates_merge() {
        let mut b = board(&[("a", 10)]);
        let added = merge_above_average(&mut b, vec![("b".into(), 30), ("c".into(), 15), ("d".into(), 25)]);
        // 30 > 10 (avg 20), 25 > 20 (avg 21.7), 15 < 21.7
        assert_eq!(added, 2);
        assert!(!b.contains_key("c"));
    }

    #[test]
    fn nothing_below_average_is_added() {
        let mut b = board(&[("a", 50), ("b", 60)]);
        assert_eq!(merge_above_average(&mut b, vec![("c".into(), 55)]), 0);
        assert_eq!(b.len(), 2);
    }
}
