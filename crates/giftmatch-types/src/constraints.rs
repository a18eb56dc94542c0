//! The two constraint relations fed to the matcher.
//!
//! `previous` records last round's pairings (at most one receiver per giver);
//! `forbidden` records administrator-blocked pairs (a set of receivers per
//! giver). Both are keyed by normalized [`Email`].
//!
//! All derived forms (`symmetrized`, `restricted_to`) are value-semantics:
//! they return a new `ConstraintSet` and never mutate the receiver, so a
//! caller that keeps the original relation keeps it intact.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Directory, Email};

/// Previous-match and forbidden-pair relations over participant emails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    previous: HashMap<Email, Email>,
    forbidden: HashMap<Email, HashSet<Email>>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-assembled relations.
    #[must_use]
    pub fn from_parts(
        previous: HashMap<Email, Email>,
        forbidden: HashMap<Email, HashSet<Email>>,
    ) -> Self {
        Self { previous, forbidden }
    }

    /// Record last round's receiver for a giver. A later entry for the same
    /// giver replaces the earlier one.
    pub fn set_previous(&mut self, giver: Email, receiver: Email) {
        self.previous.insert(giver, receiver);
    }

    /// Block a giver → receiver pairing.
    pub fn forbid(&mut self, giver: Email, receiver: Email) {
        self.forbidden.entry(giver).or_default().insert(receiver);
    }

    #[must_use]
    pub fn previous_for(&self, giver: &Email) -> Option<&Email> {
        self.previous.get(giver)
    }

    #[must_use]
    pub fn is_forbidden(&self, giver: &Email, receiver: &Email) -> bool {
        self.forbidden
            .get(giver)
            .is_some_and(|set| set.contains(receiver))
    }

    #[must_use]
    pub fn previous(&self) -> &HashMap<Email, Email> {
        &self.previous
    }

    #[must_use]
    pub fn forbidden(&self) -> &HashMap<Email, HashSet<Email>> {
        &self.forbidden
    }

    /// Close the forbidden relation under reversal: every `(g, r)` entry also
    /// blocks `(r, g)`. Idempotent — re-applying inserts nothing new.
    #[must_use]
    pub fn symmetrized(&self) -> Self {
        let mut forbidden = self.forbidden.clone();
        for (giver, receivers) in &self.forbidden {
            for receiver in receivers {
                forbidden
                    .entry(receiver.clone())
                    .or_default()
                    .insert(giver.clone());
            }
        }
        Self {
            previous: self.previous.clone(),
            forbidden,
        }
    }

    /// Drop entries referencing emails outside the directory.
    ///
    /// Stale history (participants who left since last round) is tolerated,
    /// not an error. Dropped entries are surfaced at `debug!` level only.
    #[must_use]
    pub fn restricted_to(&self, directory: &Directory) -> Self {
        let previous: HashMap<Email, Email> = self
            .previous
            .iter()
            .filter(|&(giver, receiver)| {
                let keep = directory.contains(giver) && directory.contains(receiver);
                if !keep {
                    tracing::debug!(giver = %giver, receiver = %receiver, "Dropping stale previous match");
                }
                keep
            })
            .map(|(g, r)| (g.clone(), r.clone()))
            .collect();

        let forbidden: HashMap<Email, HashSet<Email>> = self
            .forbidden
            .iter()
            .filter(|&(giver, _)| directory.contains(giver))
            .map(|(giver, receivers)| {
                let kept: HashSet<Email> = receivers
                    .iter()
                    .filter(|&r| directory.contains(r))
                    .cloned()
                    .collect();
                (giver.clone(), kept)
            })
            .filter(|(_, receivers)| !receivers.is_empty())
            .collect();

        Self { previous, forbidden }
    }
}
