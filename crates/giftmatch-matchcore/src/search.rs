//! One randomized depth-first backtracking attempt.
//!
//! All working state (giver order, used-receiver bitmap, choice stack) lives
//! in a [`Search`] value created for the attempt and dropped with it, so
//! attempts are fully independent: the retry driver only threads the RNG
//! through.

use std::collections::HashMap;

use giftmatch_types::{ConstraintSet, Email};
use rand::Rng;
use rand::seq::SliceRandom;

/// Working state for a single attempt over `emails[0..n]`, indexed positions.
///
/// The constraint set must already be restricted to the directory and
/// symmetrized if requested; the search only asks membership questions.
pub(crate) struct Search<'a, R: Rng> {
    emails: &'a [Email],
    constraints: &'a ConstraintSet,
    rng: &'a mut R,
    /// Giver positions in the (shuffled) order they are assigned.
    giver_order: Vec<usize>,
    /// `used[r]` — receiver position `r` is already taken.
    used: Vec<bool>,
    /// Receiver position chosen at each depth, in `giver_order` order.
    chosen: Vec<usize>,
}

impl<'a, R: Rng> Search<'a, R> {
    pub(crate) fn new(
        emails: &'a [Email],
        constraints: &'a ConstraintSet,
        rng: &'a mut R,
    ) -> Self {
        let n = emails.len();
        let mut giver_order: Vec<usize> = (0..n).collect();
        giver_order.shuffle(&mut *rng);
        Self {
            emails,
            constraints,
            rng,
            giver_order,
            used: vec![false; n],
            chosen: Vec::with_capacity(n),
        }
    }

    /// Run the attempt to completion.
    ///
    /// `Some` with the full giver → receiver map on success; `None` when the
    /// search space under this shuffle is exhausted. `None` means "no
    /// solution found this attempt", not "no solution exists".
    pub(crate) fn run(mut self) -> Option<HashMap<Email, Email>> {
        if !self.descend(0) {
            return None;
        }
        let pairs = self
            .giver_order
            .iter()
            .zip(&self.chosen)
            .map(|(&g, &r)| (self.emails[g].clone(), self.emails[r].clone()))
            .collect();
        Some(pairs)
    }

    fn descend(&mut self, depth: usize) -> bool {
        if depth == self.emails.len() {
            return true;
        }
        let giver = self.giver_order[depth];
        let mut candidates: Vec<usize> = (0..self.emails.len())
            .filter(|&r| !self.used[r] && self.admissible(giver, r))
            .collect();
        // Shuffled once per depth per attempt; backtracking into this depth
        // reuses the same order. Fresh shuffles come from the next attempt.
        candidates.shuffle(&mut *self.rng);

        for receiver in candidates {
            self.used[receiver] = true;
            self.chosen.push(receiver);
            if self.descend(depth + 1) {
                return true;
            }
            self.chosen.pop();
            self.used[receiver] = false;
        }
        false
    }

    /// A receiver is admissible for a giver when it is not the giver itself,
    /// not last round's receiver, and not a forbidden receiver.
    fn admissible(&self, giver: usize, receiver: usize) -> bool {
        if giver == receiver {
            return false;
        }
        let giver = &self.emails[giver];
        let receiver = &self.emails[receiver];
        if self.constraints.previous_for(giver) == Some(receiver) {
            return false;
        }
        !self.constraints.is_forbidden(giver, receiver)
    }
}
