//! # giftmatch-notify
//!
//! **Delivery plane of the giftmatch engine.**
//!
//! Takes the projected pairings and tells each giver who they drew:
//!
//! 1. **Templates**: subject/body with `{giver_name}`-style placeholders
//! 2. **Composition**: header-injection sanitization, subject length cap,
//!    mailbox validation
//! 3. **Delivery**: one message per giver over any [`lettre::Transport`];
//!    per-recipient failures are collected into a [`DeliveryReport`] and
//!    never abort the rest of the batch
//!
//! The matcher's contract ends at the validated assignment; everything
//! here consumes plain [`Pairing`] rows.
//!
//! [`Pairing`]: giftmatch_types::Pairing

pub mod mailer;
pub mod message;
pub mod template;

pub use mailer::{DeliveryFailure, DeliveryReport, SmtpConfig, SmtpCredentials, connect, deliver};
pub use message::compose;
pub use template::MessageTemplate;
