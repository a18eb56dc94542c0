//! Participants and the immutable directory that holds them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Email, GiftmatchError, Result, constants};

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// One member of the gift exchange: a display name and a unique email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: Email,
}

impl Participant {
    /// Build a participant from a raw name (trimmed) and a normalized email.
    ///
    /// # Errors
    /// `MissingField` if the name is empty after trimming. CSV loaders skip
    /// such rows instead of surfacing this error; the variant exists for
    /// record-at-a-time sources.
    pub fn new(name: &str, email: Email) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GiftmatchError::MissingField {
                field: "name".to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            email,
        })
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// The validated, immutable set of participants for one exchange.
///
/// Insertion order is preserved and is the canonical presentation order for
/// everything downstream (result projection, export). Construction rejects
/// the whole input on a duplicate email rather than silently dropping rows.
#[derive(Debug, Clone)]
pub struct Directory {
    participants: Vec<Participant>,
    index: HashMap<Email, usize>,
}

impl Directory {
    /// Validate and seal a participant list.
    ///
    /// # Errors
    /// - `DuplicateEmail` if two participants share a normalized email
    /// - `InsufficientParticipants` if fewer than two remain
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        let mut index = HashMap::with_capacity(participants.len());
        for (i, participant) in participants.iter().enumerate() {
            if index.insert(participant.email.clone(), i).is_some() {
                return Err(GiftmatchError::DuplicateEmail {
                    email: participant.email.to_string(),
                });
            }
        }
        if participants.len() < constants::MIN_PARTICIPANTS {
            return Err(GiftmatchError::InsufficientParticipants {
                count: participants.len(),
            });
        }
        Ok(Self {
            participants,
            index,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Look up a participant by normalized email.
    #[must_use]
    pub fn get(&self, email: &Email) -> Option<&Participant> {
        self.index.get(email).map(|&i| &self.participants[i])
    }

    #[must_use]
    pub fn contains(&self, email: &Email) -> bool {
        self.index.contains_key(email)
    }

    /// Participants in directory (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Emails in directory (insertion) order.
    pub fn emails(&self) -> impl Iterator<Item = &Email> {
        self.participants.iter().map(|p| &p.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, email: &str) -> Participant {
        Participant::new(name, Email::parse(email).unwrap()).unwrap()
    }

    #[test]
    fn participant_trims_name() {
        let p = participant("  Alice  ", "alice@host.org");
        assert_eq!(p.name, "Alice");
    }

    #[test]
    fn participant_rejects_blank_name() {
        let err = Participant::new("   ", Email::parse("a@host.org").unwrap()).unwrap_err();
        assert!(matches!(err, GiftmatchError::MissingField { .. }));
    }

    #[test]
    fn directory_preserves_insertion_order() {
        let dir = Directory::new(vec![
            participant("Alice", "alice@host.org"),
            participant("Bob", "bob@host.org"),
            participant("Carol", "carol@host.org"),
        ])
        .unwrap();
        let emails: Vec<&str> = dir.emails().map(Email::as_str).collect();
        assert_eq!(
            emails,
            ["alice@host.org", "bob@host.org", "carol@host.org"]
        );
    }

    #[test]
    fn directory_rejects_duplicate_email() {
        let err = Directory::new(vec![
            participant("Alice", "alice@host.org"),
            participant("Alias", "ALICE@host.org "),
        ])
        .unwrap_err();
        assert!(matches!(err, GiftmatchError::DuplicateEmail { .. }));
        let msg = format!("{err}");
        assert!(msg.contains("GM_ERR_102"), "Got: {msg}");
        assert!(msg.contains("alice@host.org"));
    }

    #[test]
    fn directory_rejects_single_participant() {
        let err = Directory::new(vec![participant("Alice", "alice@host.org")]).unwrap_err();
        assert!(matches!(
            err,
            GiftmatchError::InsufficientParticipants { count: 1 }
        ));
    }

    #[test]
    fn lookup_by_normalized_email() {
        let dir = Directory::new(vec![
            participant("Alice", "alice@host.org"),
            participant("Bob", "bob@host.org"),
        ])
        .unwrap();
        let key = Email::parse(" ALICE@host.org").unwrap();
        assert_eq!(dir.get(&key).unwrap().name, "Alice");
        assert!(dir.contains(&key));
        assert!(!dir.contains(&Email::parse("dave@host.org").unwrap()));
    }
}
