//! Placeholder substitution
//!
//! Templates are opaque text containing `${COLUMN}` tokens, where `COLUMN`
//! is a spreadsheet-style column address. Substitution replaces each token
//! with the addressed field of one row in a single left-to-right pass;
//! everything outside a token is copied byte-for-byte.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::row::field;
use crate::utils::error::Result;

lazy_static! {
    // Non-greedy: ${A}${B} is two tokens, never one
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\$\{(.*?)\}").unwrap();
}

/// Substitute every `${COLUMN}` token in `template` with the addressed
/// field of `row`.
///
/// Substitution is atomic: if any token's address is invalid or out of
/// range for the row, the whole call fails and no partial output is
/// produced. A template without tokens is returned unchanged.
///
/// # Example
///
/// ```rust
/// use pricelist::substitute;
///
/// let row = vec!["Cola".to_string(), "1.99".to_string()];
/// let out = substitute(&row, "${A}: ${B} EUR").unwrap();
/// assert_eq!(out, "Cola: 1.99 EUR");
/// ```
pub fn substitute(row: &[String], template: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut prev_end = 0;

    for captures in TOKEN_PATTERN.captures_iter(template) {
        let token = captures.get(0).expect("group 0 always exists");
        let address = captures.get(1).expect("one capture group in pattern");

        out.push_str(&template[prev_end..token.start()]);
        out.push_str(field(row, address.as_str())?);
        prev_end = token.end();
    }
    out.push_str(&template[prev_end..]);

    Ok(out)
}
