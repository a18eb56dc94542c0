//! Configuration for one matching run.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Knobs for the matcher's retry driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of independent randomized attempts before giving up.
    pub max_attempts: usize,
    /// If true, a forbidden pair `(g, r)` also blocks `(r, g)`.
    pub symmetric_forbidden: bool,
    /// Fixed RNG seed. `None` seeds from entropy; set it for reproducible
    /// draws in tests.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_attempts: constants::DEFAULT_MAX_ATTEMPTS,
            symmetric_forbidden: true,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Default configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
