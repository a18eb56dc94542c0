//! # giftmatch-types
//!
//! Shared types, errors, and configuration for the **giftmatch** gift-exchange
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identity**: [`Email`] (the normalized identity key of the system)
//! - **Directory model**: [`Participant`], [`Directory`]
//! - **Constraint model**: [`ConstraintSet`]
//! - **Result model**: [`Assignment`], [`Pairing`]
//! - **Configuration**: [`MatchConfig`]
//! - **Errors**: [`GiftmatchError`] with `GM_ERR_` prefix codes
//! - **Constants**: attempt budgets and system-wide limits

pub mod assignment;
pub mod config;
pub mod constants;
pub mod constraints;
pub mod email;
pub mod error;
pub mod pairing;
pub mod participant;

// Re-export all primary types at crate root for ergonomic imports:
//   use giftmatch_types::{Email, Directory, ConstraintSet, Assignment, ...};

pub use assignment::*;
pub use config::*;
pub use constraints::*;
pub use email::*;
pub use error::*;
pub use pairing::*;
pub use participant::*;

// Constants are accessed via `giftmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
