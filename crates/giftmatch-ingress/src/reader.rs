//! Header-normalized CSV reading shared by all loaders.

use csv::StringRecord;
use giftmatch_types::{GiftmatchError, Result};

/// Resolve required column names to positions in the header row.
///
/// Header cells are trimmed and lowercased before comparison, so `Name` and
/// ` EMAIL ` resolve like `name` and `email`. The first matching column
/// wins. A missing column is a `MissingHeader` error naming the column.
pub(crate) fn column_indices(headers: &StringRecord, required: &[&str]) -> Result<Vec<usize>> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    required
        .iter()
        .map(|&want| {
            normalized
                .iter()
                .position(|have| have == want)
                .ok_or_else(|| GiftmatchError::MissingHeader {
                    expected: want.to_string(),
                })
        })
        .collect()
}

/// Field access tolerating short (ragged) rows: out-of-range is empty.
pub(crate) fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}
