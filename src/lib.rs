//! Transaction Importer Library
//! # Overview
//!
//! This library imports financial transactions from a delimited text file into
//! a category store and a transaction store, then removes the source file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Category, Transaction, records, errors)
//! - [`config`] - Import format and runtime configuration
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::category_resolver`] - Category dedup and find-or-create
//!   - [`core::transaction_writer`] - Ordered transaction persistence
//!   - [`core::importer`] - Pipeline orchestration
//!   - [`core::memory`] - In-memory store implementations
//! - [`io`] - CSV parsing, validation, output and file access
//! - [`runner`] - Runs one import on a tokio runtime for the CLI
//!
//! # Input Format
//!
//! Comma-separated, first row is a header, columns by position:
//!
//! ```text
//! title,type,value,category
//! Salary,income,5000,Job
//! Rent,outcome,1200,Housing
//! ```
//!
//! - `title`, `type` and `value` are required
//! - `type` is `income` or `outcome`
//! - an empty `category` leaves the transaction uncategorized
//!
//! # Failure Semantics
//!
//! Any error aborts the import and leaves the source file in place. Rows are
//! all validated before anything is written; store failures during writing do
//! not roll back earlier writes.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::config::{ImportConfig, RuntimeConfig};
pub use crate::core::{
    import_transactions, CategoryStore, FileSystem, MemoryCategoryStore, MemoryTransactionStore,
    TransactionImporter, TransactionStore,
};
pub use crate::io::write_transactions_csv;
pub use crate::types::{
    Balance, Category, CategoryId, ErrorKind, ImportError, InsertedCategory, StoreError,
    Transaction, TransactionId, TransactionType,
};
