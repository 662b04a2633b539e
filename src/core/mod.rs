//! Core addressing, substitution, and parsing
//!
//! This module contains the tabular engine:
//! - `address`: spreadsheet column letters → zero-based indices
//! - `row`: row-backed field access and the column-map strategies
//! - `template`: `${COLUMN}` placeholder substitution
//! - `entry`: typed entry parsing and deposit classification
//! - `pipeline`: rows → validated entries, skipping malformed input

pub mod address;
pub mod entry;
pub mod pipeline;
pub mod row;
pub mod template;

// Re-export the main types and functions
pub use address::column_index;
pub use entry::{BottleGroup, CrateGroup, DepositType, Entry};
pub use pipeline::collect_entries;
pub use row::{field, field_at, ColumnMap, EntryField, FixedColumns, LetterColumns};
pub use template::substitute;
