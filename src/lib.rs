//! # pricelist
//!
//! Turns semicolon-delimited spreadsheet exports into PDF price lists.
//!
//! ## Features
//!
//! - **Spreadsheet addressing**: column letters (`A`, `K`, `AJ`) resolve to
//!   zero-based field indices exactly as spreadsheets number them
//! - **Placeholder templates**: `${COLUMN}` tokens in arbitrary text are
//!   filled from one row, atomically
//! - **Template stamping**: rewrite the content stream of an existing
//!   template PDF in place
//! - **Page-per-record output**: validated entries become one A4 page each,
//!   malformed rows are skipped without aborting
//!
//! ## Usage Examples
//!
//! ### Placeholder substitution
//!
//! ```rust
//! use pricelist::substitute;
//!
//! let row = vec!["7".to_string(), "Cola".to_string()];
//! let text = substitute(&row, "Article ${A}: ${B}").unwrap();
//! assert_eq!(text, "Article 7: Cola");
//! ```
//!
//! ### Parsing entries
//!
//! ```rust
//! use pricelist::{collect_entries, LetterColumns};
//!
//! let rows: Vec<Vec<String>> = vec![vec!["not a valid entry".to_string()]];
//! let entries = collect_entries(&rows, &LetterColumns);
//! assert!(entries.is_empty());
//! ```

/// Core addressing, substitution, and parsing
pub mod core;

/// Input collaborators (CSV ingestion)
pub mod input;

/// PDF assembly collaborators
pub mod pdf;

/// Utility modules
pub mod utils;

// Re-export the core engine
pub use crate::core::{
    collect_entries, column_index, field, field_at, substitute, BottleGroup, ColumnMap,
    CrateGroup, DepositType, Entry, EntryField, FixedColumns, LetterColumns,
};

// Re-export the collaborators
pub use input::read_rows;
pub use pdf::{render_pages, stamp_template, write_pages, PageOptions, StampOptions};

// Re-export utilities
pub use utils::error::{Error, Result};

/// Fill a template text from the first usable row of a CSV file.
///
/// Convenience wrapper over [`read_rows`] and [`substitute`] with the
/// single-template row-selection policy: skip `skip` records, then use
/// exactly the first remaining row. Fails with [`Error::NoData`] when no
/// row remains.
pub fn fill_template(csv: impl AsRef<std::path::Path>, skip: usize, template: &str) -> Result<String> {
    let rows = read_rows(csv, skip)?;
    let row = rows.first().ok_or(Error::NoData)?;
    substitute(row, template)
}
