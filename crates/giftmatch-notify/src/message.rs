//! Message composition: header-safe assembly of one notification.

use giftmatch_types::{GiftmatchError, Pairing, Result, constants};
use lettre::Message;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;

use crate::template::MessageTemplate;

/// Compose the notification for one pairing, addressed to the giver.
///
/// The rendered subject and all address headers are sanitized (CR/LF
/// stripped) before they reach the message builder, and the subject is
/// capped at [`constants::MAX_SUBJECT_LEN`].
///
/// # Errors
/// - `InvalidAddress` if the organizer or giver address is not a mailbox
/// - `Compose` if the message itself cannot be assembled
pub fn compose(
    template: &MessageTemplate,
    pairing: &Pairing,
    organizer: &str,
) -> Result<Message> {
    let from = parse_mailbox(organizer)?;
    let to = parse_mailbox(pairing.giver_email.as_str())?;

    let (subject, body) = template.render(pairing);
    let subject = cap_subject(sanitize_header(&subject));

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body)
        .map_err(|err| GiftmatchError::Compose {
            reason: err.to_string(),
        })
}

/// Parse a sanitized address as a mailbox (`Name <user@host>` or bare
/// `user@host`).
pub(crate) fn parse_mailbox(raw: &str) -> Result<Mailbox> {
    let cleaned = sanitize_header(raw);
    cleaned
        .parse()
        .map_err(|err: lettre::address::AddressError| GiftmatchError::InvalidAddress {
            address: cleaned.clone(),
            reason: err.to_string(),
        })
}

/// Strip CR/LF to prevent header injection, then trim.
fn sanitize_header(value: &str) -> String {
    value
        .replace('\r', " ")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Truncate to the subject ceiling without splitting a UTF-8 character.
fn cap_subject(mut subject: String) -> String {
    if subject.len() > constants::MAX_SUBJECT_LEN {
        let mut end = constants::MAX_SUBJECT_LEN;
        while !subject.is_char_boundary(end) {
            end -= 1;
        }
        subject.truncate(end);
    }
    subject
}
