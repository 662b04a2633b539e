//! Semicolon-delimited CSV ingestion
//!
//! The price-list exports are headerless, semicolon-delimited, and ragged:
//! rows legitimately differ in length. The reader is configured to accept
//! that; short rows are a parsing-policy matter downstream, not a reader
//! error.

use std::path::Path;

use crate::utils::error::Result;

/// Field delimiter of the spreadsheet exports.
pub const DELIMITER: u8 = b';';

/// Read all rows from `path`, skipping the first `skip` records.
///
/// The skip count is how callers step over header lines; it is external
/// configuration, not something inferred from the data.
pub fn read_rows(path: impl AsRef<Path>, skip: usize) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut rows = Vec::new();
    for record in reader.records().skip(skip) {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_semicolon_delimited() {
        let file = write_fixture("a;b;c\nd;e\n");
        let rows = read_rows(file.path(), 0).unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e"]]);
    }

    #[test]
    fn test_skip_header_lines() {
        let file = write_fixture("header;line\nanother;header\n1;Cola\n");
        let rows = read_rows(file.path(), 2).unwrap();
        assert_eq!(rows, vec![vec!["1", "Cola"]]);
    }

    #[test]
    fn test_skip_past_end() {
        let file = write_fixture("only;row\n");
        let rows = read_rows(file.path(), 5).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_commas_are_plain_text() {
        // Decimal commas in the data must not split fields
        let file = write_fixture("7;Cola;1,99\n");
        let rows = read_rows(file.path(), 0).unwrap();
        assert_eq!(rows, vec![vec!["7", "Cola", "1,99"]]);
    }

    #[test]
    fn test_missing_file() {
        assert!(read_rows("/no/such/file.csv", 0).is_err());
    }
}
