//! CSV format handling for imported rows and transaction output
//!
//! This module centralizes the row-level format concerns, providing:
//! - Positional mapping and validation of raw rows
//! - Transaction output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{
    ImportError, RawRecord, Transaction, TransactionId, TransactionType, ValidatedRecord,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Column positions of the import format: `title, type, value, category`
const TITLE: usize = 0;
const TYPE: usize = 1;
const VALUE: usize = 2;
const CATEGORY: usize = 3;

/// Output row for one imported transaction
///
/// Field order is the column order of the output file.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TransactionRow<'a> {
    pub id: TransactionId,
    pub title: &'a str,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub value: String,
    /// Category title, empty for uncategorized transactions
    pub category: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        TransactionRow {
            id: tx.id,
            title: &tx.title,
            tx_type: tx.tx_type,
            value: tx.value.to_string(),
            category: tx.category.as_ref().map(|c| c.title.as_str()).unwrap_or(""),
        }
    }
}

/// Validate a raw row and map it to a ValidatedRecord
///
/// This function:
/// - Trims every cell
/// - Requires `title`, `type` and `value` to be non-empty
/// - Parses `type` as `income` or `outcome` (case-insensitive)
/// - Parses `value` as a decimal number
/// - Maps an empty or missing category to `None`
///
/// # Returns
///
/// * `Ok(ValidatedRecord)` - The row is usable
/// * `Err(ImportError::Validation)` - The row is rejected; the import must abort
pub fn validate_record(raw: RawRecord) -> Result<ValidatedRecord, ImportError> {
    let line = raw.line;
    let title = raw.cell(TITLE);
    let tx_type = raw.cell(TYPE);
    let value = raw.cell(VALUE);

    if title.is_empty() {
        return Err(ImportError::missing_field(line, "title"));
    }
    if tx_type.is_empty() {
        return Err(ImportError::missing_field(line, "type"));
    }
    if value.is_empty() {
        return Err(ImportError::missing_field(line, "value"));
    }

    let tx_type = TransactionType::parse(tx_type)
        .ok_or_else(|| ImportError::invalid_field(line, "type", tx_type))?;
    let value =
        Decimal::from_str(value).map_err(|_| ImportError::invalid_field(line, "value", value))?;

    let category = match raw.cell(CATEGORY) {
        "" => None,
        category => Some(category.to_string()),
    };

    Ok(ValidatedRecord {
        line,
        title: title.to_string(),
        tx_type,
        value,
        category,
    })
}

/// Write imported transactions in CSV format
///
/// Writes transactions in input order with columns: id, title, type, value, category.
/// Uncategorized transactions get an empty category cell.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), ImportError> {
    use csv::WriterBuilder;

    let to_io = |e: csv::Error| ImportError::Io {
        message: format!("Failed to write transactions: {}", e),
    };

    // Header is written explicitly so an empty import still produces one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer
        .write_record(["id", "title", "type", "value", "category"])
        .map_err(to_io)?;

    for tx in transactions {
        writer.serialize(TransactionRow::from(tx)).map_err(to_io)?;
    }

    writer.flush()?;

    Ok(())
}
