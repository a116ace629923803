//! Grid assembly: sampling, custom letters and required-word placement

use super::options::{Customization, GenerationOptions};
use crate::core::{Grid, PuzzleError, neighbors_of};
use crate::letters::{DistributionCatalog, LetterDistribution, LetterSource};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Random starting cells tried per required word before the build gives up
pub const PLACEMENT_RETRIES: usize = 100;

#[derive(Debug, Clone)]
enum FillPlan {
    Sample,
    Custom { units: Vec<String>, shuffle: bool },
    Required { words: Vec<Vec<String>>, forced: Vec<String> },
}

/// Builds one grid per call according to a generation request
#[derive(Debug, Clone)]
pub struct GridBuilder<'a> {
    source: LetterSource<'a>,
    distribution: &'a LetterDistribution,
    width: usize,
    height: usize,
    plan: FillPlan,
}

impl<'a> GridBuilder<'a> {
    /// Resolve the request against a catalogue
    ///
    /// # Errors
    /// Returns `PuzzleError::Configuration` if the options fail validation or
    /// name an unknown distribution.
    pub fn new(options: &GenerationOptions, catalog: &'a DistributionCatalog) -> Result<Self, PuzzleError> {
        options.validate()?;
        let (width, height) = options.dimensions.resolve();
        let plan = match &options.customization {
            None => FillPlan::Sample,
            Some(Customization::CustomLetters(custom)) => FillPlan::Custom {
                units: custom.units(),
                shuffle: custom.shuffle,
            },
            Some(Customization::RequiredWords(required)) => {
                let words = required.unit_lists();
                let forced = minimum_units(&words);
                FillPlan::Required { words, forced }
            }
        };
        Ok(Self {
            source: LetterSource::new(catalog)?,
            distribution: catalog.get(&options.letter_distribution)?,
            width,
            height,
            plan,
        })
    }

    #[must_use]
    pub const fn distribution(&self) -> &'a LetterDistribution {
        self.distribution
    }

    /// Assemble one grid
    ///
    /// # Errors
    /// Returns `PuzzleError::Placement` when a required word cannot be laid
    /// out within [`PLACEMENT_RETRIES`] starts. The caller should count the
    /// attempt and try again.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, PuzzleError> {
        let total = self.width * self.height;
        let cells = match &self.plan {
            FillPlan::Sample => self.source.sample_display(self.distribution, total, rng),
            FillPlan::Custom { units, shuffle } => {
                let mut units = units.clone();
                if *shuffle {
                    units.shuffle(rng);
                }
                self.source.top_up(units, total, rng)
            }
            FillPlan::Required { words, forced } => self.place_required(words, forced, rng)?,
        };
        Grid::new(self.width, self.height, &cells)
    }

    fn place_required<R: Rng + ?Sized>(
        &self,
        words: &[Vec<String>],
        forced: &[String],
        rng: &mut R,
    ) -> Result<Vec<String>, PuzzleError> {
        let total = self.width * self.height;
        let mut cells: Vec<Option<String>> = vec![None; total];

        for word in words {
            if !self.place_word(&mut cells, word, rng) {
                let word = word.concat();
                log::debug!("failed to place required word {word}");
                return Err(PuzzleError::Placement { word });
            }
        }

        // Sampled letters first, then the shuffled forced units
        let mut forced = forced.to_vec();
        forced.shuffle(rng);
        let sampled = self
            .source
            .sample_display(self.distribution, total.saturating_sub(forced.len()), rng);
        let mut letters = sampled.into_iter().chain(forced);

        let mut empty: Vec<usize> = (0..total).filter(|&i| cells[i].is_none()).collect();
        empty.shuffle(rng);
        for index in empty {
            cells[index] = letters.next();
        }
        // Every empty cell received a letter: sampled + forced >= total
        Ok(cells.into_iter().flatten().collect())
    }

    /// Lay `word` along a random path, reusing cells that already hold the right unit
    fn place_word<R: Rng + ?Sized>(&self, cells: &mut [Option<String>], word: &[String], rng: &mut R) -> bool {
        let mut visited = vec![false; cells.len()];
        let mut path = Vec::with_capacity(word.len());
        for _ in 0..PLACEMENT_RETRIES {
            let start = rng.random_range(0..cells.len());
            path.clear();
            visited.fill(false);
            if self.extend_path(cells, word, start, &mut visited, &mut path, rng) {
                for (&index, unit) in path.iter().zip(word) {
                    cells[index] = Some(unit.clone());
                }
                return true;
            }
        }
        false
    }

    fn extend_path<R: Rng + ?Sized>(
        &self,
        cells: &[Option<String>],
        word: &[String],
        index: usize,
        visited: &mut [bool],
        path: &mut Vec<usize>,
        rng: &mut R,
    ) -> bool {
        let unit = &word[path.len()];
        if visited[index] || cells[index].as_ref().is_some_and(|held| held != unit) {
            return false;
        }
        visited[index] = true;
        path.push(index);
        if path.len() == word.len() {
            return true;
        }

        let mut next: Vec<usize> = neighbors_of(self.width, self.height, index).collect();
        next.shuffle(rng);
        if next
            .into_iter()
            .any(|n| self.extend_path(cells, word, n, visited, path, rng))
        {
            return true;
        }

        visited[index] = false;
        path.pop();
        false
    }
}

/// Smallest multiset of units covering every word on its own
///
/// Each unit appears as often as its highest count in any single word.
///
/// # Examples
/// ```
/// use boggle_solver::generator::minimum_units;
///
/// let words = vec![
///     vec!["e".to_string(), "e".to_string(), "l".to_string()],
///     vec!["l".to_string(), "e".to_string(), "t".to_string()],
/// ];
/// assert_eq!(minimum_units(&words), vec!["e", "e", "l", "t"]);
/// ```
#[must_use]
pub fn minimum_units(words: &[Vec<String>]) -> Vec<String> {
    let mut needed: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for unit in word {
            *counts.entry(unit).or_default() += 1;
        }
        for (unit, count) in counts {
            let slot = needed.entry(unit).or_default();
            *slot = (*slot).max(count);
        }
    }
    needed
        .into_iter()
        .flat_map(|(unit, count)| std::iter::repeat_n(unit.to_string(), count))
        .collect()
}
