//! Spreadsheet-style column addressing
//!
//! Column addresses are the letter codes spreadsheets print above columns:
//! `A` is the first column, `Z` the 26th, `AA` the 27th. The code is a
//! bijective base-26 number (there is no zero digit), so every non-empty
//! uppercase string denotes exactly one column.

use crate::utils::error::{Error, Result};

/// Resolve a column address to a zero-based field index.
///
/// `A` → 0, `Z` → 25, `AA` → 26, `AJ` → 35. Fails with
/// [`Error::InvalidAddress`] unless the address is a non-empty string of
/// uppercase ASCII letters.
///
/// # Example
///
/// ```rust
/// use pricelist::column_index;
///
/// assert_eq!(column_index("A").unwrap(), 0);
/// assert_eq!(column_index("AJ").unwrap(), 35);
/// assert!(column_index("a1").is_err());
/// ```
pub fn column_index(address: &str) -> Result<usize> {
    if address.is_empty() {
        return Err(Error::invalid_address(address));
    }

    let mut index: usize = 0;
    for c in address.chars() {
        if !c.is_ascii_uppercase() {
            return Err(Error::invalid_address(address));
        }
        index = index * 26 + (c as usize - 'A' as usize + 1);
    }
    Ok(index - 1)
}
