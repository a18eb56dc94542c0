//! Constraint CSV intake: `giver_email,receiver_email` rows.
//!
//! The same wire shape feeds two relations with different merge rules:
//! previous matches keep the last row per giver, forbidden pairs accumulate
//! every row into the giver's blocked set.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use csv::ReaderBuilder;
use giftmatch_types::{Email, Result};

use crate::reader::{column_indices, field};

fn read_email_pairs<R: Read>(input: R) -> Result<Vec<(Email, Email)>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();
    let indices = column_indices(&headers, &["giver_email", "receiver_email"])?;
    let (giver_col, receiver_col) = (indices[0], indices[1]);

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let giver = Email::parse(field(&record, giver_col));
        let receiver = Email::parse(field(&record, receiver_col));
        match (giver, receiver) {
            (Some(giver), Some(receiver)) => pairs.push((giver, receiver)),
            _ => {
                tracing::warn!(
                    line = record.position().map_or(0, csv::Position::line),
                    "Skipping pair row with empty giver or receiver"
                );
            }
        }
    }
    Ok(pairs)
}

/// Read last round's matches. At most one receiver per giver; when a giver
/// appears on several rows the last one wins.
pub fn read_previous_matches<R: Read>(input: R) -> Result<HashMap<Email, Email>> {
    let mut previous = HashMap::new();
    for (giver, receiver) in read_email_pairs(input)? {
        previous.insert(giver, receiver);
    }
    Ok(previous)
}

/// Read administrator-blocked pairs. Rows accumulate into the giver's set;
/// repeated rows are harmless.
pub fn read_forbidden_pairs<R: Read>(input: R) -> Result<HashMap<Email, HashSet<Email>>> {
    let mut forbidden: HashMap<Email, HashSet<Email>> = HashMap::new();
    for (giver, receiver) in read_email_pairs(input)? {
        forbidden.entry(giver).or_default().insert(receiver);
    }
    Ok(forbidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftmatch_types::GiftmatchError;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn previous_matches_normalize_and_collect() {
        let csv = "giver_email,receiver_email\n\
                   Alice@Example.com ,bob@example.com\n\
                   bob@example.com,carol@example.com\n";
        let previous = read_previous_matches(csv.as_bytes()).unwrap();
        assert_eq!(previous.len(), 2);
        assert_eq!(
            previous[&email("alice@example.com")],
            email("bob@example.com")
        );
    }

    #[test]
    fn last_previous_row_per_giver_wins() {
        let csv = "giver_email,receiver_email\n\
                   alice@example.com,bob@example.com\n\
                   alice@example.com,carol@example.com\n";
        let previous = read_previous_matches(csv.as_bytes()).unwrap();
        assert_eq!(
            previous[&email("alice@example.com")],
            email("carol@example.com")
        );
    }

    #[test]
    fn forbidden_rows_accumulate_per_giver() {
        let csv = "giver_email,receiver_email\n\
                   alice@example.com,bob@example.com\n\
                   alice@example.com,carol@example.com\n\
                   alice@example.com,bob@example.com\n";
        let forbidden = read_forbidden_pairs(csv.as_bytes()).unwrap();
        let blocked = &forbidden[&email("alice@example.com")];
        assert_eq!(blocked.len(), 2);
        assert!(blocked.contains(&email("bob@example.com")));
        assert!(blocked.contains(&email("carol@example.com")));
    }

    #[test]
    fn rows_with_empty_fields_are_skipped() {
        let csv = "giver_email,receiver_email\n\
                   alice@example.com,\n\
                   ,bob@example.com\n\
                   carol@example.com,dave@example.com\n";
        let previous = read_previous_matches(csv.as_bytes()).unwrap();
        assert_eq!(previous.len(), 1);
    }

    #[test]
    fn missing_header_is_an_error() {
        let csv = "giver,receiver\nalice@example.com,bob@example.com\n";
        let err = read_forbidden_pairs(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GiftmatchError::MissingHeader { .. }));
    }
}
