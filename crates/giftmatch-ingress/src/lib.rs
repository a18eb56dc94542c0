//! # giftmatch-ingress
//!
//! **Intake and export boundary of the giftmatch engine.**
//!
//! Everything that crosses the CSV boundary goes through this crate:
//!
//! 1. **Participants**: `name,email` rows → validated [`Directory`]
//! 2. **Previous matches**: `giver_email,receiver_email` rows → last round's
//!    pairing map
//! 3. **Forbidden pairs**: `giver_email,receiver_email` rows → blocked-pair
//!    relation
//! 4. **Export**: pairings back out as CSV, with spreadsheet-formula
//!    escaping, plus a two-column history file to feed back next round
//!
//! Loaders normalize headers (trim + lowercase) and emails identically to
//! the directory, skip rows with empty fields as a stated policy, and turn
//! structural problems (missing headers, duplicate emails) into typed
//! errors before anything reaches the matcher.
//!
//! [`Directory`]: giftmatch_types::Directory

pub mod export;
pub mod pairs;
pub mod participants;
mod reader;

pub use export::{write_history, write_pairings};
pub use pairs::{read_forbidden_pairs, read_previous_matches};
pub use participants::read_participants;
