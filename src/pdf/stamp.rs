//! Single-template mode
//!
//! Takes an existing PDF whose first page carries `${COLUMN}` tokens in its
//! content stream, fills the tokens from one CSV row, and writes the result
//! as a new PDF. Exactly one row is consumed: the first row after the
//! configured number of skipped lines. In this mode a failing row is a hard
//! failure of the whole run, never skipped.

use std::path::Path;

use log::debug;

use crate::core::template::substitute;
use crate::input::csv::read_rows;
use crate::pdf::{latin1_decode, latin1_encode};
use crate::utils::error::{Error, Result};

/// Configuration for [`stamp_template`].
#[derive(Debug, Clone, Default)]
pub struct StampOptions {
    /// Number of leading CSV records to skip (header lines)
    pub skip: usize,
    /// Upper bound on how many rows are considered; the first of them is
    /// used. `None` considers all rows.
    pub limit: Option<usize>,
}

/// Substitute placeholders in raw content-stream bytes with one row.
///
/// The bytes are treated as Latin-1 text, so every non-token byte survives
/// unchanged. Fails atomically on any unresolvable token.
pub fn stamp_content(row: &[String], content: &[u8]) -> Result<Vec<u8>> {
    let text = latin1_decode(content);
    let replaced = substitute(row, &text)?;
    Ok(latin1_encode(&replaced))
}

/// Fill the template PDF's first page from the first usable CSV row.
///
/// Fails with [`Error::NoData`] when no row remains after skipping (and
/// limiting), and with the underlying substitution error when the row does
/// not satisfy the template.
pub fn stamp_template(
    template: impl AsRef<Path>,
    output: impl AsRef<Path>,
    csv: impl AsRef<Path>,
    options: &StampOptions,
) -> Result<()> {
    let mut rows = read_rows(csv, options.skip)?;
    if let Some(limit) = options.limit {
        rows.truncate(limit);
    }
    let row = rows.first().ok_or(Error::NoData)?;

    let mut doc = lopdf::Document::load(template.as_ref())?;
    let first_page = *doc
        .get_pages()
        .get(&1)
        .ok_or_else(|| Error::pdf("template has no pages"))?;

    let content = doc.get_page_content(first_page)?;
    let stamped = stamp_content(row, &content)?;
    debug!(
        "stamped page 1: {} -> {} bytes",
        content.len(),
        stamped.len()
    );
    doc.change_page_content(first_page, stamped)?;

    doc.save(output.as_ref())?;
    Ok(())
}
