//! Error handling for pricelist operations
//!
//! This module provides a unified error type and result type for column
//! addressing, row parsing, template substitution, and document assembly.

use std::fmt;

/// Pricelist error type
#[derive(Debug, Clone)]
pub enum Error {
    /// A column address is not a non-empty uppercase-letter string
    InvalidAddress { address: String },
    /// A resolved column index falls outside the current row
    IndexOutOfRange { index: usize, len: usize },
    /// A row could not be turned into an entry (bad integer, bad deposit
    /// token, or an out-of-range column)
    MalformedRow { message: String },
    /// No usable row where at least one is required
    NoData,
    /// CSV reading failed
    Csv { message: String },
    /// IO error (for file operations)
    Io { message: String },
    /// PDF reading or writing failed
    Pdf { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAddress { address } => {
                write!(f, "Invalid column address: {:?}", address)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Column index {} out of range for row of length {}",
                    index, len
                )
            }
            Error::MalformedRow { message } => {
                write!(f, "Malformed row: {}", message)
            }
            Error::NoData => {
                write!(f, "No data rows available")
            }
            Error::Csv { message } => {
                write!(f, "CSV error: {}", message)
            }
            Error::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            Error::Pdf { message } => {
                write!(f, "PDF error: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv {
            message: err.to_string(),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Pdf {
            message: err.to_string(),
        }
    }
}

/// Result type for pricelist operations
pub type Result<T> = std::result::Result<T, Error>;

// Convenience constructors
impl Error {
    pub fn invalid_address(address: impl Into<String>) -> Self {
        Error::InvalidAddress {
            address: address.into(),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedRow {
            message: message.into(),
        }
    }

    pub fn pdf(message: impl Into<String>) -> Self {
        Error::Pdf {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_display() {
        let err = Error::invalid_address("a1");
        assert!(err.to_string().contains("Invalid column address"));
        assert!(err.to_string().contains("a1"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = Error::out_of_range(35, 10);
        let msg = err.to_string();
        assert!(msg.contains("35"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_malformed_wraps_cause() {
        let cause = Error::out_of_range(39, 4);
        let err = Error::malformed(format!("deposit type column: {}", cause));
        let msg = err.to_string();
        assert!(msg.contains("Malformed row"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
    }
}
