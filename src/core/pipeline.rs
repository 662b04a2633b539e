//! Row stream to entry stream
//!
//! The multi-record pipeline parses every row and keeps the ones that
//! validate. A malformed row is skipped, not fatal: spreadsheet exports
//! routinely carry header rows, separator rows, and half-filled lines.
//! Input order is preserved among the surviving entries.

use log::{debug, warn};

use crate::core::entry::Entry;
use crate::core::row::ColumnMap;

/// Parse all rows into entries, skipping empty and malformed rows.
pub fn collect_entries(rows: &[Vec<String>], columns: &dyn ColumnMap) -> Vec<Entry> {
    let mut entries = Vec::new();

    for (line, row) in rows.iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        match Entry::parse_with(row, columns) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("skipping row {}: {}", line + 1, e);
            }
        }
    }

    debug!("{} of {} rows parsed into entries", entries.len(), rows.len());
    entries
}
