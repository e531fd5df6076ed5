//! Error types for basket aggregation.
//!
//! Validation failures are reported before any aggregation runs. Once the
//! records are validated the only remaining failure is the zero-denominator
//! guard, which signals a broken invariant rather than bad input.

use std::fmt;

/// Column of a transaction record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    TransactionId,
    Item,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::TransactionId => write!(f, "transaction id"),
            RecordField::Item => write!(f, "item"),
        }
    }
}

/// Errors raised by the item frequency counter and pair co-occurrence engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasketError {
    /// A record is missing its transaction id or item (null or blank).
    ///
    /// `row` is the zero-based position of the record in the input table; the
    /// message reports it as a one-based data row, not counting a header line.
    #[error("Malformed record at data row {}: missing {}", .row + 1, .field)]
    MalformedRecord { row: usize, field: RecordField },

    /// A probability was requested for an item with no recorded transactions.
    ///
    /// Pairs only exist for items that occur, so this indicates a logic fault.
    #[error("Item '{item}' has co-occurrences but a transaction count of zero")]
    ZeroDenominator { item: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message() {
        let err = BasketError::MalformedRecord {
            row: 3,
            field: RecordField::Item,
        };
        assert_eq!(
            err.to_string(),
            "Malformed record at data row 4: missing item"
        );
    }

    #[test]
    fn test_zero_denominator_names_item() {
        let err = BasketError::ZeroDenominator {
            item: "milk".to_string(),
        };
        assert!(err.to_string().contains("'milk'"));
    }
}
