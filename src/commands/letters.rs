//! Letter sampling command

use crate::core::PuzzleError;
use crate::letters::{DistributionCatalog, LetterSource};
use rand::Rng;

/// Result of sampling a distribution
#[derive(Debug, Clone)]
pub struct LettersResult {
    pub distribution: String,
    /// Display units, key already applied
    pub letters: Vec<String>,
}

/// Draw `count` display units from a named distribution, or the catalogue default
///
/// # Errors
/// Returns `PuzzleError::Configuration` if the name is unknown.
pub fn sample_letters<R: Rng + ?Sized>(
    catalog: &DistributionCatalog,
    distribution: Option<&str>,
    count: usize,
    rng: &mut R,
) -> Result<LettersResult, PuzzleError> {
    let name = distribution.unwrap_or_else(|| catalog.default_name());
    let dist = catalog.get(name)?;
    let letters = LetterSource::new(catalog)?.sample_display(dist, count, rng);
    Ok(LettersResult {
        distribution: name.to_string(),
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_requested_count() {
        let catalog = DistributionCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample_letters(&catalog, Some("english"), 12, &mut rng).unwrap();
        assert_eq!(result.letters.len(), 12);
        assert!(result.letters.iter().all(|l| l.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn defaults_to_catalogue_default() {
        let catalog = DistributionCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(4);
        let result = sample_letters(&catalog, None, 5, &mut rng).unwrap();
        assert_eq!(result.distribution, catalog.default_name());
    }

    #[test]
    fn unknown_distribution_is_rejected() {
        let catalog = DistributionCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_letters(&catalog, Some("klingon"), 5, &mut rng).is_err());
    }
}
