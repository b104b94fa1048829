//! Import orchestration
//!
//! This module provides the `TransactionImporter`, which wires the record
//! parser, validator, category resolver and transaction writer into one
//! pipeline and owns the overall success/failure contract.
//!
//! # Pipeline
//!
//! ```text
//! source file ─▶ RecordParser ─▶ validate_record ─▶ buffered batch
//!                                                        │
//!              delete source ◀─ TransactionWriter ◀─ CategoryResolver
//! ```
//!
//! The whole batch is validated before anything is written, so a bad row never
//! leaves categories or transactions behind. Once writing starts there is no
//! rollback: a store failure leaves earlier writes committed.
//!
//! The source file is removed only when every step succeeded.

use crate::config::ImportConfig;
use crate::core::category_resolver::CategoryResolver;
use crate::core::traits::{CategoryStore, FileSystem, TransactionStore};
use crate::core::transaction_writer::TransactionWriter;
use crate::io::{validate_record, LocalFileSystem, RecordParser};
use crate::types::{ImportError, Transaction, ValidatedRecord};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Imports a transaction file into a category store and a transaction store
///
/// Stores are shared through `Arc` so several importers (or other readers) can
/// use the same stores concurrently.
#[derive(Debug)]
pub struct TransactionImporter<C: CategoryStore, T: TransactionStore, F: FileSystem = LocalFileSystem>
{
    resolver: CategoryResolver<C>,
    writer: TransactionWriter<T>,
    file_system: F,
    config: ImportConfig,
}

impl<C: CategoryStore, T: TransactionStore> TransactionImporter<C, T, LocalFileSystem> {
    /// Create an importer reading source files from the local disk
    pub fn new(categories: Arc<C>, transactions: Arc<T>, config: ImportConfig) -> Self {
        Self::with_file_system(categories, transactions, LocalFileSystem, config)
    }
}

impl<C: CategoryStore, T: TransactionStore, F: FileSystem> TransactionImporter<C, T, F> {
    /// Create an importer with an explicit file system collaborator
    pub fn with_file_system(
        categories: Arc<C>,
        transactions: Arc<T>,
        file_system: F,
        config: ImportConfig,
    ) -> Self {
        Self {
            resolver: CategoryResolver::new(categories),
            writer: TransactionWriter::new(transactions),
            file_system,
            config,
        }
    }

    /// Import every row of `source_path`
    ///
    /// Steps, in order:
    /// 1. Open the source file
    /// 2. Parse and validate all rows into an in-memory batch
    /// 3. Resolve categories for the batch
    /// 4. Write transactions sequentially in input order
    /// 5. Delete the source file
    ///
    /// # Returns
    ///
    /// The created transactions, in the order of the data rows.
    ///
    /// # Errors
    ///
    /// Any failure aborts the import and is returned as-is; the source file is
    /// left in place.
    #[instrument(skip_all, fields(source = %source_path.display()))]
    pub async fn execute(&self, source_path: &Path) -> Result<Vec<Transaction>, ImportError> {
        let batch = self.collect_batch(source_path).await?;
        info!(rows = batch.len(), "validated import batch");

        let categories = self.resolver.resolve(&batch).await?;
        info!(
            referenced = categories.len(),
            created = categories.created(),
            "categories resolved"
        );

        let transactions = self.writer.write_all(batch, &categories).await?;
        info!(written = transactions.len(), "transactions written");

        self.file_system.delete_file(source_path).await?;
        debug!("source file removed");

        Ok(transactions)
    }

    /// Parse and validate the whole source file
    ///
    /// Rows are pulled one at a time and each is validated before the next is
    /// read, so when the parser reports end of stream every row has been fully
    /// processed.
    async fn collect_batch(&self, source_path: &Path) -> Result<Vec<ValidatedRecord>, ImportError> {
        let reader = self.file_system.open_read(source_path).await?;
        let mut parser = RecordParser::new(reader, &self.config);
        let mut batch = Vec::new();

        while let Some(raw) = parser.next_record().await? {
            batch.push(validate_record(raw)?);
        }

        Ok(batch)
    }
}

/// Import `source_path` from the local disk with the default format
///
/// Convenience wrapper around [`TransactionImporter::execute`].
pub async fn import_transactions<C: CategoryStore, T: TransactionStore>(
    source_path: &Path,
    categories: Arc<C>,
    transactions: Arc<T>,
) -> Result<Vec<Transaction>, ImportError> {
    TransactionImporter::new(categories, transactions, ImportConfig::default())
        .execute(source_path)
        .await
}
