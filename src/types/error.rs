//! Error types for the transaction importer
//!
//! This module defines all error types that can occur while importing a file.
//! Every error is fatal to the import run it occurs in: nothing is retried and
//! there is no partial-success result.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Source file not found, unreadable, or not removable
//! - **Format Errors**: The byte stream is not valid delimited text
//! - **Validation Errors**: A row is missing a required field or has a bad value
//! - **Store Errors**: A category or transaction store call failed

use thiserror::Error;

/// Coarse classification of an [`ImportError`] for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Validation,
    Store,
}

/// Error returned by every category and transaction store operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct StoreError {
    /// Store operation that failed (e.g. "save transaction")
    pub operation: String,
    /// Description of the failure
    pub message: String,
}

impl StoreError {
    /// Create a StoreError for the named operation
    pub fn new(operation: &str, message: impl Into<String>) -> Self {
        StoreError {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

/// Quoting violation found while scanning raw input bytes
///
/// Travels through the CSV reader inside an `InvalidData` I/O error and is
/// turned back into [`ImportError::Format`] on conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MalformedQuote {
    /// Line the offending field starts on
    pub line: u64,
    pub message: &'static str,
}

/// Main error type for the import pipeline
///
/// Each variant carries enough context to be shown to a user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// Source file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while opening, reading or removing the source file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The input could not be parsed as delimited text
    ///
    /// Raised for malformed quoting, invalid UTF-8 and rows whose field count
    /// differs from the first row.
    #[error("CSV format error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Format {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A row failed validation
    ///
    /// A single invalid row aborts the whole import.
    #[error("Invalid format file at line {line}: {message}")]
    Validation {
        /// Source line of the offending row
        line: u64,
        /// What was wrong with the row
        message: String,
    },

    /// A store call failed
    ///
    /// Writes committed before the failure stay committed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ImportError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::FileNotFound { .. } | ImportError::Io { .. } => ErrorKind::Io,
            ImportError::Format { .. } => ErrorKind::Format,
            ImportError::Validation { .. } => ErrorKind::Validation,
            ImportError::Store(_) => ErrorKind::Store,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        ImportError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a Validation error for a missing required field
    pub fn missing_field(line: u64, field: &str) -> Self {
        ImportError::Validation {
            line,
            message: format!("missing {}", field),
        }
    }

    /// Create a Validation error for a field that has the wrong shape
    pub fn invalid_field(line: u64, field: &str, value: &str) -> Self {
        ImportError::Validation {
            line,
            message: format!("invalid {} '{}'", field, value),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(error: std::io::Error) -> Self {
        ImportError::Io {
            message: error.to_string(),
        }
    }
}

impl From<MalformedQuote> for ImportError {
    fn from(error: MalformedQuote) -> Self {
        ImportError::Format {
            line: Some(error.line),
            message: error.message.to_string(),
        }
    }
}

impl From<csv_async::Error> for ImportError {
    fn from(error: csv_async::Error) -> Self {
        if let csv_async::ErrorKind::Io(io_error) = error.kind() {
            let quote = io_error
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<MalformedQuote>());
            if let Some(quote) = quote {
                return quote.clone().into();
            }
        }

        let line = error.position().map(|pos| pos.line());

        ImportError::Format {
            line,
            message: error.to_string(),
        }
    }
}
