//! Unit tests for transaction loading

use cobasket::pipeline::{
    compute_pair_statistics, load_transactions, load_transactions_with_progress, pairs_for_item,
    ColumnMapping, TransactionRecord,
};
use polars::prelude::*;
use tempfile::TempDir;

mod common;

#[test]
fn test_load_csv_with_numeric_ids() {
    let (_dir, path) = common::create_temp_csv(&common::grocery_csv_lines());

    let records = load_transactions_with_progress(&path, &ColumnMapping::default(), 100).unwrap();

    assert_eq!(records.len(), 6);
    assert_eq!(records[0], TransactionRecord::new("1", "milk"));
    assert_eq!(records[5], TransactionRecord::new("3", "bread"));
}

#[test]
fn test_load_csv_custom_columns() {
    let (_dir, path) = common::create_temp_csv(&[
        "Member_number,Date,itemDescription",
        "1808,21-07-2015,tropical fruit",
        "1808,21-07-2015,whole milk",
        "2552,05-01-2015,whole milk",
    ]);

    let columns = ColumnMapping::new("Member_number", "itemDescription");
    let records = load_transactions_with_progress(&path, &columns, 100).unwrap();
    assert_eq!(records.len(), 3);

    let pairs = compute_pair_statistics(&records).unwrap();
    let fruit = pairs_for_item(&pairs, "tropical fruit");
    assert_eq!(fruit.len(), 1);
    assert_eq!(fruit[0].item_b, "whole milk");
    assert_eq!(fruit[0].probability_percent, 100.0);
}

#[test]
fn test_load_parquet_file() {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("transactions.parquet");

    let mut df = df! {
        "TransactionID" => ["T1", "T1", "T2"],
        "Item" => ["milk", "bread", "milk"],
    }
    .unwrap();

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(&mut df).unwrap();

    let records =
        load_transactions_with_progress(&parquet_path, &ColumnMapping::default(), 100).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1], TransactionRecord::new("T1", "bread"));
}

#[test]
fn test_missing_item_is_rejected() {
    let (_dir, path) = common::create_temp_csv(&["TransactionID,Item", "1,milk", "2,"]);

    let err = load_transactions_with_progress(&path, &ColumnMapping::default(), 100).unwrap_err();
    let message = format!("{:#}", err);
    assert!(
        message.contains("Malformed record at data row 2: missing item"),
        "Unexpected error: {}",
        message
    );
}

#[test]
fn test_missing_column_is_rejected() {
    let (_dir, path) = common::create_temp_csv(&["id,product", "1,milk"]);

    let err = load_transactions_with_progress(&path, &ColumnMapping::default(), 100).unwrap_err();
    let message = format!("{:#}", err);
    assert!(
        message.contains("Column 'TransactionID' not found in dataset"),
        "Unexpected error: {}",
        message
    );
    assert!(message.contains("Available columns"), "Unexpected error: {}", message);
    assert!(message.contains("\"product\""), "Unexpected error: {}", message);
}

#[test]
fn test_missing_item_column_is_rejected() {
    let (_dir, path) = common::create_temp_csv(&["TransactionID,product", "1,milk"]);

    let err = load_transactions(&path, &ColumnMapping::default(), 100).unwrap_err();
    assert!(err.to_string().contains("Column 'Item' not found in dataset"));
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("transactions.json");
    std::fs::write(&path, "{}").unwrap();

    let result = load_transactions_with_progress(&path, &ColumnMapping::default(), 100);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unsupported file format"));
}
