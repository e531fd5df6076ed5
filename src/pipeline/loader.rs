//! Transaction table loader for CSV and Parquet files

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::transaction::{validate_records, RawRecord, TransactionRecord};
use crate::utils::{create_spinner, finish_with_success, finish_with_warning};

/// Names of the transaction id and item columns in the source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub transaction_column: String,
    pub item_column: String,
}

impl ColumnMapping {
    pub fn new(transaction_column: impl Into<String>, item_column: impl Into<String>) -> Self {
        Self {
            transaction_column: transaction_column.into(),
            item_column: item_column.into(),
        }
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::new("TransactionID", "Item")
    }
}

/// Load a dataset from a file (CSV or Parquet based on extension)
///
/// `infer_schema_length` of 0 scans the full CSV file for schema inference.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Column names of a dataset, read from its schema without loading rows
fn schema_column_names(lf: &mut LazyFrame, path: &Path) -> Result<Vec<String>> {
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read schema of {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Fail unless both mapped columns are among `available`
pub fn ensure_columns(available: &[String], columns: &ColumnMapping) -> Result<()> {
    for name in [&columns.transaction_column, &columns.item_column] {
        if !available.contains(name) {
            anyhow::bail!(
                "Column '{}' not found in dataset. Available columns: {:?}",
                name,
                available
            );
        }
    }
    Ok(())
}

/// Extract raw `(transaction_id, item)` rows from a DataFrame.
///
/// Both columns are cast to strings, so numeric transaction ids are accepted.
/// Nulls are preserved for [`validate_records`] to report.
pub fn extract_raw_records(df: &DataFrame, columns: &ColumnMapping) -> Result<Vec<RawRecord>> {
    let available: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    ensure_columns(&available, columns)?;

    let ids = df
        .column(&columns.transaction_column)?
        .cast(&DataType::String)
        .with_context(|| {
            format!(
                "Failed to read column '{}' as text",
                columns.transaction_column
            )
        })?;
    let items = df
        .column(&columns.item_column)?
        .cast(&DataType::String)
        .with_context(|| format!("Failed to read column '{}' as text", columns.item_column))?;

    let records = ids
        .str()?
        .into_iter()
        .zip(items.str()?.into_iter())
        .map(|(id, item)| RawRecord::new(id, item))
        .collect();

    Ok(records)
}

/// Load and validate the transaction records of a file, with a spinner.
pub fn load_transactions_with_progress(
    path: &Path,
    columns: &ColumnMapping,
    infer_schema_length: usize,
) -> Result<Vec<TransactionRecord>> {
    let spinner = create_spinner("Loading transactions...");

    match load_transactions(path, columns, infer_schema_length) {
        Ok(records) => {
            finish_with_success(&spinner, &format!("Loaded {} transaction rows", records.len()));
            Ok(records)
        }
        Err(e) => {
            finish_with_warning(&spinner, "Failed to load transactions");
            Err(e)
        }
    }
}

/// Load and validate the transaction records of a file.
///
/// Both mapped columns are checked against the file schema before any rows
/// are read.
pub fn load_transactions(
    path: &Path,
    columns: &ColumnMapping,
    infer_schema_length: usize,
) -> Result<Vec<TransactionRecord>> {
    let mut lf = load_dataset(path, infer_schema_length)?;
    let available = schema_column_names(&mut lf, path)?;
    ensure_columns(&available, columns)?;

    let df = lf
        .select([
            col(columns.transaction_column.as_str()),
            col(columns.item_column.as_str()),
        ])
        .collect()
        .with_context(|| format!("Failed to read columns from {}", path.display()))?;

    let raw = extract_raw_records(&df, columns)?;
    let records = validate_records(raw)
        .with_context(|| format!("Invalid transaction data in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        "Loaded transaction records"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_casts_numeric_ids() {
        let df = df! {
            "TransactionID" => [1i64, 1, 2],
            "Item" => ["milk", "bread", "eggs"],
        }
        .unwrap();

        let raw = extract_raw_records(&df, &ColumnMapping::default()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0], RawRecord::new(Some("1"), Some("milk")));
        assert_eq!(raw[2], RawRecord::new(Some("2"), Some("eggs")));
    }

    #[test]
    fn test_extract_keeps_nulls() {
        let df = df! {
            "TransactionID" => [Some("T1"), None],
            "Item" => [Some("milk"), Some("bread")],
        }
        .unwrap();

        let raw = extract_raw_records(&df, &ColumnMapping::default()).unwrap();
        assert_eq!(raw[1].transaction_id, None);
        assert!(validate_records(raw).is_err());
    }

    #[test]
    fn test_extract_missing_column_errors() {
        let df = df! {
            "Member_number" => [1i64, 2],
            "itemDescription" => ["milk", "bread"],
        }
        .unwrap();

        let err = extract_raw_records(&df, &ColumnMapping::default()).unwrap_err();
        assert!(err.to_string().contains("'TransactionID' not found"));
    }

    #[test]
    fn test_ensure_columns_lists_available() {
        let available = vec!["id".to_string(), "product".to_string()];
        let err = ensure_columns(&available, &ColumnMapping::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'TransactionID' not found"));
        assert!(message.contains("Available columns"));

        let mapping = ColumnMapping::new("id", "product");
        assert!(ensure_columns(&available, &mapping).is_ok());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_dataset(Path::new("transactions.xlsx"), 100);
        assert!(result.is_err());
    }
}
