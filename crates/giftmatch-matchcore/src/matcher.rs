//! The retry driver around the randomized backtracking search.

use giftmatch_types::{
    Assignment, ConstraintSet, Directory, Email, GiftmatchError, MatchConfig, Result,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::search::Search;

/// Draw a constraint-satisfying giver → receiver assignment.
///
/// ## Algorithm
///
/// 1. Restrict both constraint relations to the directory (stale entries
///    referencing former participants are dropped, not errors)
/// 2. Symmetrize the forbidden relation iff `config.symmetric_forbidden`
/// 3. Run up to `config.max_attempts` independent randomized backtracking
///    attempts, each with a fresh giver shuffle and fresh candidate shuffles
/// 4. Return the first assignment that satisfies every constraint
///
/// A single attempt explores candidates in a randomized-once order and can
/// thrash on unlucky orderings; restarting with fresh shuffles is the cheap
/// escape hatch for the target group sizes (tens to low hundreds). Worst
/// case remains exponential per attempt and only the attempt budget bounds
/// total work.
///
/// With `config.seed` set, the draw is fully deterministic for a given
/// directory and constraint set.
///
/// # Errors
/// `NoValidMatching` once the attempt budget is exhausted. The constraints
/// may be overly restrictive — or the randomization merely unlucky, since a
/// failed attempt is not a proof of infeasibility.
pub fn draw(
    directory: &Directory,
    constraints: &ConstraintSet,
    config: &MatchConfig,
) -> Result<Assignment> {
    let effective = constraints.restricted_to(directory);
    let effective = if config.symmetric_forbidden {
        effective.symmetrized()
    } else {
        effective
    };
    let emails: Vec<Email> = directory.emails().cloned().collect();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for attempt in 1..=config.max_attempts {
        if let Some(pairs) = Search::new(&emails, &effective, &mut rng).run() {
            tracing::info!(
                attempt,
                participants = emails.len(),
                previous = effective.previous().len(),
                forbidden = effective.forbidden().len(),
                "Assignment drawn"
            );
            return Ok(Assignment::new(pairs));
        }
        tracing::debug!(attempt, "Attempt exhausted without a valid assignment");
    }

    Err(GiftmatchError::NoValidMatching {
        attempts: config.max_attempts,
    })
}
