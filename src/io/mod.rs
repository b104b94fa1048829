//! I/O module
//!
//! Handles source file access, CSV parsing and output.
//!
//! # Components
//!
//! - `record_parser` - Asynchronous CSV parser yielding raw rows
//! - `quote_check` - Byte stream adapter rejecting malformed quoting
//! - `csv_format` - Row validation and transaction output serialization
//! - `file_system` - Local file system collaborator (open and delete sources)

pub mod csv_format;
pub mod file_system;
pub mod quote_check;
pub mod record_parser;

pub use csv_format::{validate_record, write_transactions_csv};
pub use file_system::LocalFileSystem;
pub use record_parser::RecordParser;
