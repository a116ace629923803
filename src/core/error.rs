//! Error taxonomy for puzzle loading, configuration and search
//!
//! Load and configuration errors are surfaced to the caller immediately.
//! Attempt-level failures (placement, non-qualification) are absorbed by the
//! search loop and only escape as [`PuzzleError::BudgetExhausted`].

/// Errors produced by the dictionary, letter sources and the generator
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// A dictionary or distribution resource is missing or corrupt
    #[error("failed to load {resource}: {reason}")]
    Load { resource: String, reason: String },

    /// The request cannot be attempted as given
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Required words could not be placed together in one grid
    #[error("could not place required word \"{word}\"")]
    Placement { word: String },

    /// No qualifying grid within the attempt budget and no fallback requested
    #[error("failed to produce an acceptable puzzle after max {attempts} attempt{}", plural(.attempts))]
    BudgetExhausted { attempts: usize },

    /// The job was cancelled before a result was available
    #[error("generation cancelled after {attempts} attempt{}", plural(.attempts))]
    Cancelled { attempts: usize },

    /// Every worker in the pool terminated abnormally
    #[error("all {failed} worker{} terminated abnormally", plural(.failed))]
    WorkerFailure { failed: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Shorthand for a [`PuzzleError::Load`] error
    pub fn load(resource: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable short code for display and log correlation
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Load { .. } => "E-LOAD",
            Self::Configuration(_) => "E-CONFIG",
            Self::Placement { .. } => "E-PLACE",
            Self::BudgetExhausted { .. } => "E-BUDGET",
            Self::Cancelled { .. } => "E-CANCEL",
            Self::WorkerFailure { .. } => "E-WORKER",
            Self::Io(_) => "E-IO",
            Self::Json(_) => "E-JSON",
        }
    }

    /// Whether the search loop retries past this error
    #[must_use]
    pub const fn is_attempt_level(&self) -> bool {
        matches!(self, Self::Placement { .. })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // called with field references from format args
pub(crate) const fn plural(n: &usize) -> &'static str {
    if *n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_message_pluralizes() {
        let one = PuzzleError::BudgetExhausted { attempts: 1 };
        let many = PuzzleError::BudgetExhausted { attempts: 5 };
        assert_eq!(
            one.to_string(),
            "failed to produce an acceptable puzzle after max 1 attempt"
        );
        assert_eq!(
            many.to_string(),
            "failed to produce an acceptable puzzle after max 5 attempts"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let errors = [
            PuzzleError::load("words", "missing"),
            PuzzleError::Configuration("bad".into()),
            PuzzleError::Placement { word: "cat".into() },
            PuzzleError::BudgetExhausted { attempts: 1 },
            PuzzleError::Cancelled { attempts: 1 },
            PuzzleError::WorkerFailure { failed: 2 },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(PuzzleError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn only_placement_is_attempt_level() {
        assert!(PuzzleError::Placement { word: "dog".into() }.is_attempt_level());
        assert!(!PuzzleError::Configuration("x".into()).is_attempt_level());
    }
}
