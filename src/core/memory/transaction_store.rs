//! Thread-safe in-memory transaction store
//!
//! This module provides the `MemoryTransactionStore` struct, which stores
//! transactions using concurrent data structures so several imports can share
//! one store.
//!
//! # Design
//!
//! The `MemoryTransactionStore` uses `DashMap` (a concurrent HashMap) keyed by
//! the store-assigned id. Ids come from a monotonic counter, so ordering rows
//! by id reproduces insertion order.

use crate::core::traits::TransactionStore;
use crate::types::{Balance, NewTransaction, StoreError, StoredTransaction, TransactionId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe transaction store
#[derive(Debug)]
pub struct MemoryTransactionStore {
    /// Stored rows by transaction id
    transactions: DashMap<TransactionId, StoredTransaction>,

    /// Next id to hand out
    next_id: AtomicU64,
}

impl MemoryTransactionStore {
    /// Create a new empty MemoryTransactionStore
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a stored row by id
    pub fn get(&self, id: TransactionId) -> Option<StoredTransaction> {
        self.transactions
            .get(&id)
            .map(|entry| entry.value().clone())
    }
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for MemoryTransactionStore {
    async fn save(&self, transaction: NewTransaction) -> Result<StoredTransaction, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredTransaction::from_new(id, transaction);
        self.transactions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn all(&self) -> Result<Vec<StoredTransaction>, StoreError> {
        let mut transactions: Vec<StoredTransaction> = self
            .transactions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transactions.sort_by_key(|tx| tx.id);
        Ok(transactions)
    }

    async fn balance(&self) -> Result<Balance, StoreError> {
        Ok(self
            .transactions
            .iter()
            .fold(Balance::default(), |balance, entry| {
                balance.add(entry.tx_type, entry.value)
            }))
    }
}
