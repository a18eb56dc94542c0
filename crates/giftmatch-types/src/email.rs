//! The normalized email address — the identity key of the whole system.
//!
//! Every relation in the engine (directory membership, previous matches,
//! forbidden pairs, the final assignment) is keyed by `Email`. Normalization
//! happens exactly once, at construction: surrounding whitespace is trimmed
//! and the address is lowercased, so `" Alice@Example.COM "` and
//! `"alice@example.com"` are the same identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A trimmed, lowercased email address.
///
/// Equality and hashing operate on the normalized form. Construction via
/// [`Email::parse`] is the only way to obtain one from raw input, so an
/// `Email` held anywhere in the engine is always normalized and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalize a raw address: trim surrounding whitespace, lowercase.
    ///
    /// Returns `None` if nothing remains after trimming — callers decide
    /// whether an empty field is a skip (CSV rows) or an error.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let email = Email::parse("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(Email::parse("").is_none());
        assert!(Email::parse("   \t ").is_none());
    }

    #[test]
    fn normalized_forms_are_equal() {
        let a = Email::parse("BOB@host.org").unwrap();
        let b = Email::parse("bob@host.org  ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let email = Email::parse("carol@host.org").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"carol@host.org\"");
        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(email, back);
    }
}
