//! Ranking non-qualifying attempts
//!
//! Each configured filter is its own category. A newer attempt only replaces
//! the retained one when it is strictly closer to passing in every category,
//! so the retained attempt never gets worse on any tracked filter.

use super::evaluator::QualitySnapshot;
use super::options::Criterion;
use crate::core::Grid;
use crate::solver::WordResult;

/// One evaluated attempt
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    /// 1-based attempt number within its search loop
    pub attempt: usize,
    pub grid: Grid,
    pub words: WordResult,
    pub snapshot: QualitySnapshot,
}

/// Whether `new` beats `old` in every configured category
///
/// With no criteria there is nothing to win, so the old attempt stays.
#[must_use]
pub fn supersedes(old: &QualitySnapshot, new: &QualitySnapshot, criteria: &[Criterion]) -> bool {
    !criteria.is_empty()
        && criteria.iter().all(|criterion| {
            let before = criterion.violation(old);
            let after = criterion.violation(new);
            log::trace!("{}: {before} -> {after}", criterion.label());
            after < before
        })
}

/// The better of two attempts; ties keep `old`
#[must_use]
pub fn preferred<'r>(old: &'r AttemptRecord, new: &'r AttemptRecord, criteria: &[Criterion]) -> &'r AttemptRecord {
    if supersedes(&old.snapshot, &new.snapshot, criteria) {
        new
    } else {
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::options::Comparison;
    use std::collections::BTreeMap;

    fn snapshot(total: usize, average_length: f64) -> QualitySnapshot {
        QualitySnapshot {
            total,
            average_length,
            length_counts: BTreeMap::new(),
            percent_uncommon: 0.0,
            qualifies: false,
        }
    }

    fn record(attempt: usize, total: usize, average_length: f64) -> AttemptRecord {
        AttemptRecord {
            attempt,
            grid: Grid::parse_letters("abcdefghi").unwrap(),
            words: WordResult::new(),
            snapshot: snapshot(total, average_length),
        }
    }

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::TotalWords {
                min: Some(100),
                max: None,
            },
            Criterion::AverageLength {
                comparison: Comparison::MoreThan,
                value: 5.0,
            },
        ]
    }

    #[test]
    fn wins_every_category() {
        let (old, new) = (record(1, 40, 3.0), record(2, 60, 4.0));
        assert_eq!(preferred(&old, &new, &criteria()).attempt, 2);
    }

    #[test]
    fn one_regression_keeps_old() {
        let (old, new) = (record(1, 40, 4.0), record(2, 90, 3.5));
        assert_eq!(preferred(&old, &new, &criteria()).attempt, 1);
    }

    #[test]
    fn ties_keep_old() {
        let (old, new) = (record(1, 40, 3.0), record(2, 40, 4.5));
        assert_eq!(preferred(&old, &new, &criteria()).attempt, 1);
    }

    #[test]
    fn no_criteria_keeps_old() {
        let (old, new) = (record(1, 1, 3.0), record(2, 500, 9.0));
        assert_eq!(preferred(&old, &new, &[]).attempt, 1);
    }

    #[test]
    fn preferred_never_regresses_a_category() {
        let criteria = criteria();
        let candidates: Vec<AttemptRecord> = (0..6)
            .flat_map(|t| (0..6).map(move |a| (t, a)))
            .enumerate()
            .map(|(i, (t, a))| record(i, t * 25, f64::from(a)))
            .collect();
        for old in &candidates {
            for new in &candidates {
                let chosen = preferred(old, new, &criteria);
                let other = if std::ptr::eq(chosen, old) { new } else { old };
                if std::ptr::eq(chosen, new) && !std::ptr::eq(old, new) {
                    for c in &criteria {
                        assert!(c.violation(&chosen.snapshot) < c.violation(&other.snapshot));
                    }
                }
            }
        }
    }
}
