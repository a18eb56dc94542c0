//! Subject and body templates for the notification messages.

use giftmatch_types::Pairing;
use serde::{Deserialize, Serialize};

/// Placeholder-based subject and body.
///
/// Recognized placeholders: `{giver_name}`, `{giver_email}`,
/// `{receiver_name}`, `{receiver_email}`. Anything else in braces passes
/// through untouched, so a typo'd placeholder shows up verbatim in the
/// message instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub subject: String,
    pub body: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            subject: "Your gift exchange match!".to_string(),
            body: "Hi {giver_name},\n\n\
                   You have been matched to give a gift to: {receiver_name}.\n\
                   Recipient email: {receiver_email}\n\n\
                   Happy gifting!\n\
                   - Your gift exchange organizer"
                .to_string(),
        }
    }
}

impl MessageTemplate {
    /// Render subject and body for one pairing.
    #[must_use]
    pub fn render(&self, pairing: &Pairing) -> (String, String) {
        (
            substitute(&self.subject, pairing),
            substitute(&self.body, pairing),
        )
    }
}

fn substitute(template: &str, pairing: &Pairing) -> String {
    template
        .replace("{giver_name}", &pairing.giver_name)
        .replace("{giver_email}", pairing.giver_email.as_str())
        .replace("{receiver_name}", &pairing.receiver_name)
        .replace("{receiver_email}", pairing.receiver_email.as_str())
}
