//! The matcher's output: a constraint-satisfying giver → receiver bijection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Email;

/// A permutation of the participant email set with no fixed points, no
/// repeated previous-year pair, and no forbidden pair.
///
/// Constructed atomically by the matcher (never partially exposed) and
/// immutable afterwards. The map itself is unordered; presentation order
/// comes from joining against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: HashMap<Email, Email>,
}

impl Assignment {
    #[must_use]
    pub fn new(pairs: HashMap<Email, Email>) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub fn receiver_for(&self, giver: &Email) -> Option<&Email> {
        self.pairs.get(giver)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Email, &Email)> {
        self.pairs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
