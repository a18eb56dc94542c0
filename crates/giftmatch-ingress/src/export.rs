//! CSV export of pairings, hardened against spreadsheet formula injection.

use std::io::Write;

use giftmatch_types::{Pairing, Result};

/// Write the full pairing table (`giver_name,giver_email,receiver_name,
/// receiver_email`) in the given order.
///
/// Every cell passes through [`escape_cell`], so a participant named
/// `=HYPERLINK(...)` renders as text rather than executing when the file is
/// opened in a spreadsheet.
pub fn write_pairings<W: Write>(out: W, pairings: &[Pairing]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["giver_name", "giver_email", "receiver_name", "receiver_email"])?;
    for pairing in pairings {
        writer.write_record([
            escape_cell(&pairing.giver_name),
            escape_cell(pairing.giver_email.as_str()),
            escape_cell(&pairing.receiver_name),
            escape_cell(pairing.receiver_email.as_str()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the two-column `giver_email,receiver_email` history file, suitable
/// to feed back as next round's previous matches.
pub fn write_history<W: Write>(out: W, pairings: &[Pairing]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["giver_email", "receiver_email"])?;
    for pairing in pairings {
        writer.write_record([
            escape_cell(pairing.giver_email.as_str()),
            escape_cell(pairing.receiver_email.as_str()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Neutralize spreadsheet formula cells: a leading `=`, `+`, `-`, or `@`
/// gets a `'` prefix so spreadsheet applications treat the cell as text.
fn escape_cell(value: &str) -> String {
    if value.starts_with(['=', '+', '-', '@']) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}
