//! Input collaborators
//!
//! CSV ingestion: the rest of the crate only sees ordered rows of string
//! fields.

pub mod csv;

pub use csv::read_rows;
