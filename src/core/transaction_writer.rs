//! Sequential, order-preserving transaction persistence
//!
//! Writes are issued one at a time and each is awaited before the next one
//! starts, so the store sees transactions in exactly the input order.

use crate::core::category_resolver::CategoryMap;
use crate::core::traits::TransactionStore;
use crate::types::{ImportError, NewTransaction, Transaction, ValidatedRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Persists validated records through a [`TransactionStore`]
#[derive(Debug)]
pub struct TransactionWriter<T: TransactionStore> {
    store: Arc<T>,
}

impl<T: TransactionStore> TransactionWriter<T> {
    pub fn new(store: Arc<T>) -> Self {
        Self { store }
    }

    /// Persist every record in input order
    ///
    /// Each record is linked to its category from `categories`. The returned
    /// transactions carry the nested category, never the raw foreign key.
    ///
    /// # Errors
    ///
    /// The first failing save aborts the remaining writes and is returned as
    /// `ImportError::Store`. Transactions saved before it are not rolled back.
    pub async fn write_all(
        &self,
        records: Vec<ValidatedRecord>,
        categories: &CategoryMap,
    ) -> Result<Vec<Transaction>, ImportError> {
        let mut transactions = Vec::with_capacity(records.len());

        for record in records {
            let line = record.line;
            let category = categories.get(record.category.as_deref()).cloned();
            let category_id = category.as_ref().map(|c| c.id);

            let new = NewTransaction {
                title: record.title,
                value: record.value,
                tx_type: record.tx_type,
                category_id,
            };

            let stored = self.store.save(new).await.inspect_err(|e| {
                warn!(
                    line,
                    written = transactions.len(),
                    error = %e,
                    "transaction write failed, aborting remaining writes"
                );
            })?;

            if stored.category_id != category_id {
                warn!(
                    line,
                    id = stored.id,
                    expected = ?category_id,
                    stored = ?stored.category_id,
                    "store changed the category reference of a saved transaction"
                );
            }

            debug!(line, id = stored.id, "transaction written");
            transactions.push(Transaction::from_stored(stored, category));
        }

        Ok(transactions)
    }
}
