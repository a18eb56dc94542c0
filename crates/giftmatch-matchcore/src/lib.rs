//! # giftmatch-matchcore
//!
//! **Pure compute plane of the giftmatch engine.**
//!
//! MatchCore takes a validated directory plus a constraint set and produces a
//! constraint-satisfying giver → receiver bijection. It has:
//!
//! - **Zero I/O**: no files, no network, no side effects beyond logging
//! - **Explicit per-attempt state**: nothing shared across attempts
//! - **Seedable randomness**: same inputs + same seed -> same assignment
//! - **Bounded retries**: restart with fresh shuffles instead of heuristics

pub mod matcher;
pub mod projection;
mod search;

pub use matcher::draw;
pub use projection::project;
