//! Joining an assignment back to participant records for presentation.

use giftmatch_types::{Assignment, Directory, Pairing};

/// Pure join of an assignment against the directory.
///
/// Rows are emitted in directory (insertion) order — the assignment map
/// itself is unordered, so the directory provides the stable presentation
/// order for a given input. Trusts the assignment invariants upheld by the
/// matcher; no re-validation happens here.
#[must_use]
pub fn project(assignment: &Assignment, directory: &Directory) -> Vec<Pairing> {
    directory
        .iter()
        .filter_map(|giver| {
            let receiver_email = assignment.receiver_for(&giver.email)?;
            let receiver = directory.get(receiver_email)?;
            Some(Pairing {
                giver_name: giver.name.clone(),
                giver_email: giver.email.clone(),
                receiver_name: receiver.name.clone(),
                receiver_email: receiver.email.clone(),
            })
        })
        .collect()
}
