//! Puzzle quality statistics and filter checks

use super::options::{Criterion, LengthLimit};
use crate::dictionary::CommonWords;
use crate::solver::WordResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for one found-word set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySnapshot {
    pub total: usize,
    pub average_length: f64,
    pub length_counts: BTreeMap<usize, usize>,
    /// Share of found words absent from the common-word table, 0 to 100
    pub percent_uncommon: f64,
    pub qualifies: bool,
}

impl QualitySnapshot {
    /// Number of found words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.length_counts.get(&length).copied().unwrap_or(0)
    }
}

/// Scores found-word sets against a filter list
#[derive(Debug, Clone, Copy)]
pub struct QualityEvaluator<'a> {
    common: &'a CommonWords,
    criteria: &'a [Criterion],
}

impl<'a> QualityEvaluator<'a> {
    #[must_use]
    pub const fn new(common: &'a CommonWords, criteria: &'a [Criterion]) -> Self {
        Self { common, criteria }
    }

    #[must_use]
    pub const fn criteria(&self) -> &'a [Criterion] {
        self.criteria
    }

    /// Compute statistics and check every filter
    ///
    /// An empty word set has an average length and rarity of zero. With no
    /// filters configured every grid qualifies.
    #[must_use]
    pub fn evaluate(&self, words: &WordResult) -> QualitySnapshot {
        let groups = words.by_length();
        let total = words.len();
        let letters: usize = groups.iter().map(|(len, group)| len * group.len()).sum();

        // Count common words bucket by bucket
        let common_found: usize = groups
            .keys()
            .map(|&len| {
                self.common
                    .for_length(len)
                    .iter()
                    .filter(|word| words.contains(word))
                    .count()
            })
            .sum();

        let (average_length, percent_uncommon) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                letters as f64 / total as f64,
                100.0 - common_found as f64 / total as f64 * 100.0,
            )
        };

        let mut snapshot = QualitySnapshot {
            total,
            average_length,
            length_counts: groups.into_iter().map(|(len, group)| (len, group.len())).collect(),
            percent_uncommon,
            qualifies: true,
        };
        snapshot.qualifies = self.criteria.iter().all(|c| c.is_met(&snapshot));
        snapshot
    }
}

impl Criterion {
    /// Whether `snapshot` satisfies this filter
    #[must_use]
    pub fn is_met(&self, snapshot: &QualitySnapshot) -> bool {
        match self {
            Self::TotalWords { min, max } => within(snapshot.total, *min, *max),
            Self::WordLengths { limits } => limits
                .iter()
                .all(|l| within(snapshot.count_of_length(l.length), l.min, l.max)),
            Self::AverageLength { comparison, value } => comparison.passes(snapshot.average_length, *value),
            Self::Rarity { comparison, value } => comparison.passes(snapshot.percent_uncommon, *value),
        }
    }

    /// How far `snapshot` is from satisfying this filter; zero when inside a range
    #[must_use]
    pub fn violation(&self, snapshot: &QualitySnapshot) -> f64 {
        match self {
            Self::TotalWords { min, max } => range_gap(snapshot.total, *min, *max),
            Self::WordLengths { limits } => limits
                .iter()
                .map(|LengthLimit { length, min, max }| range_gap(snapshot.count_of_length(*length), *min, *max))
                .sum(),
            Self::AverageLength { comparison, value } => comparison.gap(snapshot.average_length, *value),
            Self::Rarity { comparison, value } => comparison.gap(snapshot.percent_uncommon, *value),
        }
    }
}

fn within(count: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.is_none_or(|lo| count >= lo) && max.is_none_or(|hi| count <= hi)
}

fn range_gap(count: usize, min: Option<usize>, max: Option<usize>) -> f64 {
    match (min, max) {
        (Some(lo), _) if count < lo => (lo - count) as f64,
        (_, Some(hi)) if count > hi => (count - hi) as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::options::Comparison;

    fn words(list: &[&str]) -> WordResult {
        list.iter().copied().collect()
    }

    fn common() -> CommonWords {
        CommonWords::new(["cat", "dog", "the"])
    }

    #[test]
    fn computes_statistics() {
        let common = common();
        let evaluator = QualityEvaluator::new(&common, &[]);
        let snapshot = evaluator.evaluate(&words(&["cat", "dog", "zebu", "quilt"]));
        assert_eq!(snapshot.total, 4);
        assert!((snapshot.average_length - 3.75).abs() < 1e-9);
        assert_eq!(snapshot.count_of_length(3), 2);
        assert_eq!(snapshot.count_of_length(5), 1);
        assert_eq!(snapshot.count_of_length(9), 0);
        assert!((snapshot.percent_uncommon - 50.0).abs() < 1e-9);
        assert!(snapshot.qualifies);
    }

    #[test]
    fn empty_word_set_scores_zero() {
        let common = common();
        let snapshot = QualityEvaluator::new(&common, &[]).evaluate(&WordResult::new());
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.average_length.abs() < f64::EPSILON);
        assert!(snapshot.percent_uncommon.abs() < f64::EPSILON);
        assert!(snapshot.qualifies);
    }

    #[test]
    fn no_filters_always_qualifies() {
        let common = CommonWords::default();
        let evaluator = QualityEvaluator::new(&common, &[]);
        let lists: [&[&str]; 3] = [&["abe"], &[], &["cat", "dog", "emu"]];
        for list in lists {
            assert!(evaluator.evaluate(&words(list)).qualifies);
        }
    }

    #[test]
    fn total_words_bounds_are_inclusive() {
        let common = common();
        let criteria = [Criterion::TotalWords {
            min: Some(2),
            max: Some(3),
        }];
        let evaluator = QualityEvaluator::new(&common, &criteria);
        assert!(!evaluator.evaluate(&words(&["cat"])).qualifies);
        assert!(evaluator.evaluate(&words(&["cat", "dog"])).qualifies);
        assert!(evaluator.evaluate(&words(&["cat", "dog", "emu"])).qualifies);
        assert!(!evaluator.evaluate(&words(&["cat", "dog", "emu", "gnu"])).qualifies);
    }

    #[test]
    fn length_limits_check_each_bucket() {
        let common = common();
        let criteria = [Criterion::WordLengths {
            limits: vec![
                LengthLimit {
                    length: 3,
                    min: None,
                    max: Some(1),
                },
                LengthLimit {
                    length: 5,
                    min: Some(1),
                    max: None,
                },
            ],
        }];
        let evaluator = QualityEvaluator::new(&common, &criteria);
        assert!(evaluator.evaluate(&words(&["cat", "quilt"])).qualifies);
        let failing = evaluator.evaluate(&words(&["cat", "dog"]));
        assert!(!failing.qualifies);
        // one over the 3-letter max, one under the 5-letter min
        assert!((criteria[0].violation(&failing) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_length_boundary() {
        let common = common();
        let at_three = words(&["cat", "dog"]);
        let less = [Criterion::AverageLength {
            comparison: Comparison::LessThan,
            value: 3.0,
        }];
        let more = [Criterion::AverageLength {
            comparison: Comparison::MoreThan,
            value: 3.0,
        }];
        assert!(QualityEvaluator::new(&common, &less).evaluate(&at_three).qualifies);
        assert!(!QualityEvaluator::new(&common, &more).evaluate(&at_three).qualifies);
    }

    #[test]
    fn rarity_uses_percent_scale() {
        let common = common();
        let criteria = [Criterion::Rarity {
            comparison: Comparison::MoreThan,
            value: 60.0,
        }];
        let evaluator = QualityEvaluator::new(&common, &criteria);
        // 3 of 4 uncommon = 75%
        assert!(evaluator.evaluate(&words(&["cat", "emu", "gnu", "yak"])).qualifies);
        // 1 of 2 uncommon = 50%
        let snapshot = evaluator.evaluate(&words(&["cat", "emu"]));
        assert!(!snapshot.qualifies);
        assert!((criteria[0].violation(&snapshot) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn filters_are_anded() {
        let common = common();
        let criteria = [
            Criterion::TotalWords {
                min: Some(1),
                max: None,
            },
            Criterion::AverageLength {
                comparison: Comparison::MoreThan,
                value: 4.0,
            },
        ];
        let evaluator = QualityEvaluator::new(&common, &criteria);
        assert!(!evaluator.evaluate(&words(&["cat"])).qualifies);
        assert!(evaluator.evaluate(&words(&["quilt"])).qualifies);
    }

    #[test]
    fn range_gap_measures_distance_to_bounds() {
        assert!((range_gap(3, Some(10), None) - 7.0).abs() < f64::EPSILON);
        assert!((range_gap(12, None, Some(10)) - 2.0).abs() < f64::EPSILON);
        assert!(range_gap(5, Some(1), Some(9)).abs() < f64::EPSILON);
    }
}
