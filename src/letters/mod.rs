//! Letter distributions and sampling

pub mod catalog;
pub mod distribution;
pub mod sampler;

pub use catalog::{DEFAULT_DISTRIBUTION, DistributionCatalog};
pub use distribution::{FrequencyTable, LetterDistribution, LetterStrategy, SyllableUnits};
pub use sampler::{LetterSource, random_cube_roll};
