//! Ephemeral records that only live for the duration of one import run

use super::transaction::TransactionType;
use rust_decimal::Decimal;

/// One row as delimited in the source file
///
/// Cells are kept exactly as read: no trimming and no type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line of the row in the source file
    pub line: u64,

    /// Raw cell values in column order
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Trimmed cell at `index`, or `""` when the row is shorter
    pub fn cell(&self, index: usize) -> &str {
        self.fields.get(index).map(|s| s.trim()).unwrap_or_default()
    }
}

/// Row that passed validation and is ready for category resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    /// Source line, kept for diagnostics
    pub line: u64,
    pub title: String,
    pub tx_type: TransactionType,
    pub value: Decimal,

    /// Category title, `None` when the cell was empty
    pub category: Option<String>,
}
