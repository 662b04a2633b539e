//! Entry parsing and validation
//!
//! An `Entry` is the typed projection of one CSV row: one beverage with its
//! crate and bottle price groups and a deposit classification. Rows that do
//! not parse are reported as [`Error::MalformedRow`]; whether that is fatal
//! is the caller's policy (the multi-record pipeline skips, the
//! single-template mode aborts).

use std::borrow::Cow;

use crate::core::row::{ColumnMap, EntryField};
use crate::utils::error::{Error, Result};

/// Deposit classification of a priced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositType {
    /// Returnable bottles ("Mehrweg")
    Reusable,
    /// One-way bottles ("Einweg")
    Disposable,
}

impl DepositType {
    /// Classify a free-text deposit field by its first non-whitespace
    /// character, case-insensitively: `M` → Reusable, `E` → Disposable.
    pub fn parse(text: &str) -> Result<DepositType> {
        match text.trim().chars().next() {
            Some('m') | Some('M') => Ok(DepositType::Reusable),
            Some('e') | Some('E') => Ok(DepositType::Disposable),
            _ => Err(Error::malformed(format!(
                "unrecognized deposit type {:?}",
                text
            ))),
        }
    }

    /// Human-readable label for page output.
    pub fn label(&self) -> &'static str {
        match self {
            DepositType::Reusable => "Mehrweg",
            DepositType::Disposable => "Einweg",
        }
    }
}

/// Crate (case) price group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateGroup {
    /// Contents description, e.g. "6 x 1.5L"
    pub contents: String,
    /// Price per litre
    pub price_per_litre: String,
    /// Total crate price
    pub price: String,
    /// Crate deposit
    pub deposit: String,
}

/// Single-bottle price group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottleGroup {
    /// Contents description, e.g. "1.5L"
    pub contents: String,
    /// Bottle price
    pub price: String,
    /// Bottle deposit
    pub deposit: String,
}

/// One validated price-list record.
///
/// Constructed once at parse time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Article number
    pub id: i64,
    /// Item title
    pub title: String,
    pub crate_group: CrateGroup,
    pub bottle_group: BottleGroup,
    pub deposit_type: DepositType,
}

/// Read one field, wrapping lookup failures as `MalformedRow`.
fn get<'a>(
    columns: &dyn ColumnMap,
    row: &'a [String],
    which: EntryField,
) -> Result<Cow<'a, str>> {
    columns.get(row, which).map_err(|e| match e {
        Error::MalformedRow { .. } => e,
        other => Error::malformed(format!("{:?} column: {}", which, other)),
    })
}

impl Entry {
    /// Build an entry from a row using the given column map.
    ///
    /// Fails with [`Error::MalformedRow`] when the id is not an integer,
    /// any addressed column is out of range, or the deposit field does not
    /// classify. The underlying cause is carried in the error message.
    pub fn parse_with(row: &[String], columns: &dyn ColumnMap) -> Result<Entry> {
        let id_text = get(columns, row, EntryField::Id)?;
        let id: i64 = id_text
            .trim()
            .parse()
            .map_err(|_| Error::malformed(format!("id is not an integer: {:?}", id_text)))?;

        let deposit_text = get(columns, row, EntryField::DepositKind)?;
        let deposit_type = DepositType::parse(&deposit_text)?;

        Ok(Entry {
            id,
            title: get(columns, row, EntryField::Title)?.into_owned(),
            crate_group: CrateGroup {
                contents: get(columns, row, EntryField::CrateContents)?.into_owned(),
                price_per_litre: get(columns, row, EntryField::CratePricePerLitre)?.into_owned(),
                price: get(columns, row, EntryField::CratePrice)?.into_owned(),
                deposit: get(columns, row, EntryField::CrateDeposit)?.into_owned(),
            },
            bottle_group: BottleGroup {
                contents: get(columns, row, EntryField::BottleContents)?.into_owned(),
                price: get(columns, row, EntryField::BottlePrice)?.into_owned(),
                deposit: get(columns, row, EntryField::BottleDeposit)?.into_owned(),
            },
            deposit_type,
        })
    }
}
