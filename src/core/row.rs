//! Row-backed field access
//!
//! A row is an ordered sequence of string fields produced by CSV ingestion.
//! Rows are borrowed read-only; short or ragged rows are expected input, so
//! an out-of-range lookup is a recoverable error value, never a panic.
//!
//! The key abstraction is the `ColumnMap` trait which decides how the named
//! entry fields are located in a row:
//! - `LetterColumns`: the raw spreadsheet export, addressed by column
//!   letters through the resolver (40+ columns, crate contents composed
//!   from unit count and volume)
//! - `FixedColumns`: the compact ten-column layout, addressed by direct
//!   zero-based position
//!
//! The mapping is a deployment choice fixed at construction, never a per-row
//! decision.

use std::borrow::Cow;

use crate::core::address::column_index;
use crate::utils::error::{Error, Result};

/// Look up a field by column letter in a borrowed row.
///
/// Resolves `address` to a zero-based index and bounds-checks it against
/// the row, failing with [`Error::IndexOutOfRange`] on short rows.
pub fn field<'a>(row: &'a [String], address: &str) -> Result<&'a str> {
    let index = column_index(address)?;
    field_at(row, index)
}

/// Look up a field by zero-based index in a borrowed row.
pub fn field_at(row: &[String], index: usize) -> Result<&str> {
    row.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::out_of_range(index, row.len()))
}

/// The logical fields an entry is built from, one per `Entry` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Id,
    Title,
    CrateContents,
    CratePricePerLitre,
    CratePrice,
    CrateDeposit,
    BottleContents,
    BottlePrice,
    BottleDeposit,
    DepositKind,
}

/// Strategy for locating entry fields in a row.
///
/// Implementations:
/// - [`LetterColumns`]: spreadsheet-letter addressing into the raw export
/// - [`FixedColumns`]: direct indexing into the compact layout
pub trait ColumnMap {
    /// Read one logical field out of a row.
    ///
    /// Returns a borrowed slice where the field maps to a single column
    /// and an owned string where it is composed from several.
    fn get<'a>(&self, row: &'a [String], which: EntryField) -> Result<Cow<'a, str>>;
}

/// Letter-addressed column map for the raw spreadsheet export.
///
/// The crate contents description is composed as `"<C> x <D>"` (unit count
/// times unit volume); the bottle contents is the unit volume alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterColumns;

// Column letters of the raw export
const COL_ID: &str = "A";
const COL_TITLE: &str = "B";
const COL_CRATE_UNITS: &str = "C";
const COL_UNIT_VOLUME: &str = "D";
const COL_CRATE_PRICE: &str = "K";
const COL_BOTTLE_PRICE: &str = "L";
const COL_PRICE_PER_LITRE: &str = "AJ";
const COL_CRATE_DEPOSIT: &str = "AL";
const COL_BOTTLE_DEPOSIT: &str = "AM";
const COL_DEPOSIT_KIND: &str = "AN";

impl ColumnMap for LetterColumns {
    fn get<'a>(&self, row: &'a [String], which: EntryField) -> Result<Cow<'a, str>> {
        let address = match which {
            EntryField::Id => COL_ID,
            EntryField::Title => COL_TITLE,
            EntryField::CrateContents => {
                let units = field(row, COL_CRATE_UNITS)?;
                let volume = field(row, COL_UNIT_VOLUME)?;
                return Ok(Cow::Owned(format!("{} x {}", units, volume)));
            }
            EntryField::CratePricePerLitre => COL_PRICE_PER_LITRE,
            EntryField::CratePrice => COL_CRATE_PRICE,
            EntryField::CrateDeposit => COL_CRATE_DEPOSIT,
            EntryField::BottleContents => COL_UNIT_VOLUME,
            EntryField::BottlePrice => COL_BOTTLE_PRICE,
            EntryField::BottleDeposit => COL_BOTTLE_DEPOSIT,
            EntryField::DepositKind => COL_DEPOSIT_KIND,
        };
        field(row, address).map(Cow::Borrowed)
    }
}

/// Position-addressed column map for the compact ten-column layout.
///
/// Fields appear in entry order: id, title, crate contents, price per
/// litre, crate price, crate deposit, bottle contents, bottle price,
/// bottle deposit, deposit type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColumns;

impl FixedColumns {
    fn index(which: EntryField) -> usize {
        match which {
            EntryField::Id => 0,
            EntryField::Title => 1,
            EntryField::CrateContents => 2,
            EntryField::CratePricePerLitre => 3,
            EntryField::CratePrice => 4,
            EntryField::CrateDeposit => 5,
            EntryField::BottleContents => 6,
            EntryField::BottlePrice => 7,
            EntryField::BottleDeposit => 8,
            EntryField::DepositKind => 9,
        }
    }
}

impl ColumnMap for FixedColumns {
    fn get<'a>(&self, row: &'a [String], which: EntryField) -> Result<Cow<'a, str>> {
        field_at(row, Self::index(which)).map(Cow::Borrowed)
    }
}
