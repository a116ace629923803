//! Drawing symbols from a distribution

use super::catalog::DistributionCatalog;
use super::distribution::{LetterDistribution, LetterStrategy, SyllableUnits};
use crate::core::{PuzzleError, decode};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

// Onset : nucleus : coda
const SYLLABLE_WEIGHTS: [u32; 3] = [3, 4, 2];

/// Samples symbols, topping up short explicit lists from the catalogue default
#[derive(Debug, Clone, Copy)]
pub struct LetterSource<'a> {
    fallback: &'a LetterDistribution,
}

impl<'a> LetterSource<'a> {
    /// # Errors
    /// Returns `PuzzleError::Configuration` if the catalogue has no default.
    pub fn new(catalog: &'a DistributionCatalog) -> Result<Self, PuzzleError> {
        Ok(Self {
            fallback: catalog.default_distribution()?,
        })
    }

    /// The distribution used for top-ups
    #[must_use]
    pub const fn fallback(&self) -> &'a LetterDistribution {
        self.fallback
    }

    /// Draw `count` raw symbols (before key expansion)
    ///
    /// An explicit list shorter than `count` is topped up from the fallback
    /// distribution; a longer one is truncated. `dist` must pass
    /// [`LetterDistribution::check`], as every catalogue entry does.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        dist: &LetterDistribution,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        match &dist.strategy {
            LetterStrategy::Explicit { letters } => {
                let mut symbols: Vec<String> = letters.iter().take(count).cloned().collect();
                if symbols.len() < count {
                    let shortfall = count - symbols.len();
                    log::debug!("topping up {shortfall} letters from the default distribution");
                    symbols.extend(draw(self.fallback, shortfall, rng));
                }
                symbols
            }
            _ => draw(dist, count, rng),
        }
    }

    /// Draw `count` symbols and expand them with the distribution's key
    ///
    /// Top-up symbols are expanded with the fallback's key.
    pub fn sample_display<R: Rng + ?Sized>(
        &self,
        dist: &LetterDistribution,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        match &dist.strategy {
            LetterStrategy::Explicit { letters } => {
                let units = decode(&letters.iter().take(count).collect::<Vec<_>>(), &dist.key);
                self.top_up(units, count, rng)
            }
            _ => decode(&draw(dist, count, rng), &dist.key),
        }
    }

    /// Extend display units to `count` with expanded fallback symbols
    pub fn top_up<R: Rng + ?Sized>(&self, mut units: Vec<String>, count: usize, rng: &mut R) -> Vec<String> {
        if units.len() < count {
            let shortfall = count - units.len();
            units.extend(decode(&draw(self.fallback, shortfall, rng), &self.fallback.key));
        }
        units
    }
}

/// One strategy, no top-up
fn draw<R: Rng + ?Sized>(dist: &LetterDistribution, count: usize, rng: &mut R) -> Vec<String> {
    match &dist.strategy {
        LetterStrategy::Weighted { weights } => (0..count)
            .map(|_| weights.lookup(rng.random::<f64>()).to_string())
            .collect(),
        LetterStrategy::Cubes { cubes } => cubes
            .iter()
            .cycle()
            .take(count)
            .filter_map(|cube| roll(cube, rng))
            .collect(),
        LetterStrategy::Syllables(units) => (0..count)
            .filter_map(|_| syllable_unit(units, rng))
            .collect(),
        LetterStrategy::Explicit { letters } => letters.iter().take(count).cloned().collect(),
    }
}

/// One face of a cube, uniformly
fn roll<R: Rng + ?Sized>(cube: &str, rng: &mut R) -> Option<String> {
    let faces: Vec<char> = cube.chars().collect();
    faces.choose(rng).map(char::to_string)
}

fn syllable_unit<R: Rng + ?Sized>(units: &SyllableUnits, rng: &mut R) -> Option<String> {
    let total: u32 = SYLLABLE_WEIGHTS.iter().sum();
    let mut pick = rng.random_range(0..total);
    let category = [&units.onsets, &units.nuclei, &units.codas]
        .into_iter()
        .zip(SYLLABLE_WEIGHTS)
        .find_map(|(category, weight)| {
            if pick < weight {
                Some(category)
            } else {
                pick -= weight;
                None
            }
        })?;
    category.choose(rng).cloned()
}

/// A shuffled cube set with one face rolled per cube
///
/// # Examples
/// ```
/// use boggle_solver::letters::random_cube_roll;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let faces = random_cube_roll(&["aaa", "bbb", "ccc"], &mut rng);
/// let mut sorted = faces.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec!["a", "b", "c"]);
/// ```
pub fn random_cube_roll<S: AsRef<str>, R: Rng + ?Sized>(cubes: &[S], rng: &mut R) -> Vec<String> {
    let mut order: Vec<&str> = cubes.iter().map(AsRef::as_ref).collect();
    order.shuffle(rng);
    order.into_iter().filter_map(|cube| roll(cube, rng)).collect()
}
