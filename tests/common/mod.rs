//! Shared test utilities and fixture generators

#![allow(dead_code)]

use cobasket::pipeline::TransactionRecord;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build records from `(transaction_id, item)` tuples
pub fn records(rows: &[(&str, &str)]) -> Vec<TransactionRecord> {
    rows.iter()
        .map(|(id, item)| TransactionRecord::new(*id, *item))
        .collect()
}

/// The grocery scenario used throughout the tests:
/// T1 = {milk, bread}, T2 = {milk, bread, eggs}, T3 = {bread}
pub fn grocery_records() -> Vec<TransactionRecord> {
    records(&[
        ("T1", "milk"),
        ("T1", "bread"),
        ("T2", "milk"),
        ("T2", "bread"),
        ("T2", "eggs"),
        ("T3", "bread"),
    ])
}

/// Random transaction log with duplicate rows and varying basket sizes
pub fn create_random_records(
    transactions: usize,
    catalog: usize,
    seed: u64,
) -> Vec<TransactionRecord> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut rows = Vec::new();
    for t in 0..transactions {
        let basket_size = rng.gen_range(1..=6);
        for _ in 0..basket_size {
            let item = rng.gen_range(0..catalog);
            rows.push(TransactionRecord::new(
                format!("T{}", t),
                format!("item_{}", item),
            ));
        }
    }
    rows
}

/// Create a temporary directory with a CSV file holding the given lines
pub fn create_temp_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("transactions.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }

    (temp_dir, csv_path)
}

/// CSV lines for the grocery scenario with numeric transaction ids
pub fn grocery_csv_lines() -> Vec<&'static str> {
    vec![
        "TransactionID,Item",
        "1,milk",
        "1,bread",
        "2,milk",
        "2,bread",
        "2,eggs",
        "3,bread",
    ]
}
