//! Transaction-related types for the transaction importer
//!
//! A transaction exists in two shapes: [`StoredTransaction`] is the row a
//! transaction store keeps, with a raw `category_id` foreign key, and
//! [`Transaction`] is what the importer hands back to callers, with the
//! category nested instead of referenced.

use super::category::{Category, CategoryId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Store-assigned transaction identifier
pub type TransactionId = u64;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,

    /// Money going out
    Outcome,
}

impl TransactionType {
    /// Parse a type cell, ignoring ASCII case
    ///
    /// Returns `None` for anything other than `income` or `outcome`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("income") {
            Some(TransactionType::Income)
        } else if value.eq_ignore_ascii_case("outcome") {
            Some(TransactionType::Outcome)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field set of a transaction that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub value: Decimal,
    pub tx_type: TransactionType,
    pub category_id: Option<CategoryId>,
}

/// Transaction row as kept by a transaction store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    /// Identifier assigned by the transaction store
    pub id: TransactionId,
    pub title: String,
    pub value: Decimal,
    pub tx_type: TransactionType,

    /// Foreign key into the category store
    ///
    /// `None` for uncategorized transactions.
    pub category_id: Option<CategoryId>,
}

impl StoredTransaction {
    /// Assemble a stored row from an uninserted transaction and its new id
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        StoredTransaction {
            id,
            title: new.title,
            value: new.value,
            tx_type: new.tx_type,
            category_id: new.category_id,
        }
    }
}

/// Imported transaction as returned to callers
///
/// Carries the resolved category itself. The raw foreign key stays inside the
/// store and is never exposed here.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub title: String,
    pub value: Decimal,
    pub tx_type: TransactionType,
    pub category: Option<Category>,
}

impl Transaction {
    /// Build the caller-facing transaction from a stored row
    ///
    /// `category` is the category the importer resolved for the row. It is
    /// nested as given; the row's `category_id` is not consulted.
    pub fn from_stored(stored: StoredTransaction, category: Option<Category>) -> Self {
        Transaction {
            id: stored.id,
            title: stored.title,
            value: stored.value,
            tx_type: stored.tx_type,
            category,
        }
    }
}

/// Income and outcome totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    /// Sum of all income values
    pub income: Decimal,

    /// Sum of all outcome values
    pub outcome: Decimal,

    /// `income - outcome`
    pub total: Decimal,
}

impl Balance {
    /// Fold one transaction into the running totals
    pub fn add(mut self, tx_type: TransactionType, value: Decimal) -> Self {
        match tx_type {
            TransactionType::Income => self.income += value,
            TransactionType::Outcome => self.outcome += value,
        }
        self.total = self.income - self.outcome;
        self
    }
}
