//! The presentable giver → receiver row produced by result projection.

use serde::{Deserialize, Serialize};

use crate::Email;

/// One giver → receiver row, carrying both identities for display, export,
/// and notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver_name: String,
    pub giver_email: Email,
    pub receiver_name: String,
    pub receiver_email: Email,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let pairing = Pairing {
            giver_name: "Alice".into(),
            giver_email: Email::parse("alice@x.org").unwrap(),
            receiver_name: "Bob".into(),
            receiver_email: Email::parse("bob@x.org").unwrap(),
        };
        let json = serde_json::to_string(&pairing).unwrap();
        let back: Pairing = serde_json::from_str(&json).unwrap();
        assert_eq!(pairing, back);
    }
}
