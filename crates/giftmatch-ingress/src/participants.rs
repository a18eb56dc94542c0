//! Participant CSV intake: `name,email` rows into a validated directory.

use std::io::Read;

use csv::ReaderBuilder;
use giftmatch_types::{Directory, Email, Participant, Result};

use crate::reader::{column_indices, field};

/// Read a participants CSV (headers `name,email`, any casing) into a
/// [`Directory`].
///
/// Rows with an empty name or email after trimming are skipped — partial
/// rows are a tolerated input artifact, not an error. Duplicate emails and
/// a too-small remainder surface as typed errors from [`Directory::new`].
pub fn read_participants<R: Read>(input: R) -> Result<Directory> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();
    let indices = column_indices(&headers, &["name", "email"])?;
    let (name_col, email_col) = (indices[0], indices[1]);

    let mut participants = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = field(&record, name_col).trim();
        let email = Email::parse(field(&record, email_col));
        match email {
            Some(email) if !name.is_empty() => {
                participants.push(Participant::new(name, email)?);
            }
            _ => {
                tracing::warn!(
                    line = record.position().map_or(0, csv::Position::line),
                    "Skipping participant row with empty name or email"
                );
            }
        }
    }
    Directory::new(participants)
}
