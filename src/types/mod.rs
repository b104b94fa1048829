//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `category`: Category entity
//! - `transaction`: Transaction shapes, types and balance totals
//! - `record`: Ephemeral per-run records (raw and validated rows)
//! - `error`: Error types for the import pipeline

pub mod category;
pub mod error;
pub mod record;
pub mod transaction;

pub use category::{Category, CategoryId, InsertedCategory};
pub use error::{ErrorKind, ImportError, MalformedQuote, StoreError};
pub use record::{RawRecord, ValidatedRecord};
pub use transaction::{
    Balance, NewTransaction, StoredTransaction, Transaction, TransactionId, TransactionType,
};
