//! Core business logic module
//!
//! This module contains the import pipeline components:
//! - `traits` - Collaborator traits (category store, transaction store, file system)
//! - `category_resolver` - Batch-level category dedup and find-or-create
//! - `transaction_writer` - Sequential, order-preserving transaction persistence
//! - `importer` - Pipeline orchestration and source file cleanup
//! - `memory` - Thread-safe in-memory store implementations

pub mod category_resolver;
pub mod importer;
pub mod memory;
pub mod traits;
pub mod transaction_writer;

pub use category_resolver::{CategoryMap, CategoryResolver};
pub use importer::{import_transactions, TransactionImporter};
pub use memory::{MemoryCategoryStore, MemoryTransactionStore};
pub use traits::{CategoryStore, FileSystem, TransactionStore};
pub use transaction_writer::TransactionWriter;
