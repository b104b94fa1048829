//! Runs one import for the command-line interface
//!
//! Builds a tokio multi-threaded runtime, imports the input file into fresh
//! in-memory stores and writes the created transactions to `output`.
//!
//! # Architecture
//!
//! ```text
//! run
//!     ├── RuntimeConfig (worker_threads)
//!     ├── MemoryCategoryStore / MemoryTransactionStore
//!     ├── TransactionImporter (parse → validate → resolve → write → delete)
//!     └── write_transactions_csv (created transactions to output)
//! ```

use crate::config::{ImportConfig, RuntimeConfig};
use crate::core::memory::{MemoryCategoryStore, MemoryTransactionStore};
use crate::core::traits::TransactionStore;
use crate::core::TransactionImporter;
use crate::io::write_transactions_csv;
use crate::types::{Balance, ImportError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Import `input_path` and write the created transactions as CSV to `output`
///
/// # Returns
///
/// * `Ok(Balance)` - Income, outcome and total of the imported transactions
/// * `Err(ImportError)` - The import failed; the input file is left in place
pub fn run(
    input_path: &Path,
    import_config: ImportConfig,
    runtime_config: &RuntimeConfig,
    output: &mut dyn Write,
) -> Result<Balance, ImportError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(runtime_config.worker_threads)
        .enable_all()
        .build()
        .map_err(|e| ImportError::Io {
            message: format!("Failed to create tokio runtime: {}", e),
        })?;

    runtime.block_on(async {
        let categories = Arc::new(MemoryCategoryStore::new());
        let transactions = Arc::new(MemoryTransactionStore::new());
        let importer =
            TransactionImporter::new(categories, Arc::clone(&transactions), import_config);

        let created = importer.execute(input_path).await?;
        write_transactions_csv(&created, output)?;

        let balance = transactions.balance().await?;
        info!(
            income = %balance.income,
            outcome = %balance.outcome,
            total = %balance.total,
            "import complete"
        );

        Ok(balance)
    })
}
