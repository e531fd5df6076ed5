//! Transaction records, validation, and basket construction

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::error::{BasketError, RecordField};

/// A single `(transaction_id, item)` row of the transaction log.
///
/// A transaction is the set of records that share a `transaction_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub item: String,
}

impl TransactionRecord {
    pub fn new(transaction_id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            item: item.into(),
        }
    }
}

/// A row as read from the source table, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub transaction_id: Option<String>,
    pub item: Option<String>,
}

impl RawRecord {
    pub fn new(transaction_id: Option<&str>, item: Option<&str>) -> Self {
        Self {
            transaction_id: transaction_id.map(str::to_string),
            item: item.map(str::to_string),
        }
    }
}

/// Basket of distinct items for each transaction, keyed by transaction id.
pub type Baskets<'a> = BTreeMap<&'a str, BTreeSet<&'a str>>;

/// Validate raw rows into transaction records.
///
/// Fails on the first row with a null or blank transaction id or item. Rows are
/// never silently dropped so the caller decides whether to discard or abort.
pub fn validate_records(raw: Vec<RawRecord>) -> Result<Vec<TransactionRecord>, BasketError> {
    raw.into_iter()
        .enumerate()
        .map(|(row, record)| {
            let transaction_id = non_blank(record.transaction_id).ok_or(
                BasketError::MalformedRecord {
                    row,
                    field: RecordField::TransactionId,
                },
            )?;
            let item = non_blank(record.item).ok_or(BasketError::MalformedRecord {
                row,
                field: RecordField::Item,
            })?;
            Ok(TransactionRecord {
                transaction_id,
                item,
            })
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Group records into baskets, collapsing duplicate items within a transaction.
pub fn build_baskets(transactions: &[TransactionRecord]) -> Baskets<'_> {
    let mut baskets: Baskets<'_> = BTreeMap::new();
    for record in transactions {
        baskets
            .entry(record.transaction_id.as_str())
            .or_default()
            .insert(record.item.as_str());
    }
    baskets
}

/// Number of distinct transactions in the input.
pub fn count_transactions(transactions: &[TransactionRecord]) -> usize {
    transactions
        .iter()
        .map(|r| r.transaction_id.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}
