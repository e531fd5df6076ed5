//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::ColumnMapping;

/// cobasket - Find the items your customers buy together
#[derive(Parser, Debug)]
#[command(name = "cobasket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet) with one row per (transaction, item)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column holding the transaction identifier
    #[arg(long, default_value = "TransactionID")]
    pub transaction_column: String,

    /// Column holding the item name
    #[arg(long, default_value = "Item")]
    pub item_column: String,

    /// Item to show combinations for ("Item A").
    /// If not provided, will be selected interactively, defaulting to the most popular item.
    #[arg(short = 'a', long)]
    pub item: Option<String>,

    /// Number of rows to show in each table. Use 0 to show every row.
    #[arg(long, default_value = "20")]
    pub top: usize,

    /// Number of shards to split transactions into for parallel pair counting
    #[arg(long, default_value = "1", value_parser = validate_shards)]
    pub shards: usize,

    /// Export the result tables to this JSON file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Export the result tables next to the input file ('_basket.json' suffix)
    #[arg(long, default_value = "false")]
    pub save_report: bool,

    /// Include every item pair in the export instead of only the selected item's
    #[arg(long, default_value = "false")]
    pub export_all: bool,

    /// Write the full pair table to a CSV or Parquet file (determined by extension)
    #[arg(long)]
    pub pairs_output: Option<PathBuf>,

    /// Skip interactive prompts (selects the most popular item by default)
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Enable debug logging (overridden by COBASKET_LOG)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Transaction and item column names
    pub fn columns(&self) -> ColumnMapping {
        ColumnMapping::new(self.transaction_column.clone(), self.item_column.clone())
    }

    /// Get the JSON export path, if any.
    /// An explicit `--export` wins; `--save-report` derives one from the input path.
    pub fn export_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.export {
            return Some(path.clone());
        }
        if !self.save_report {
            return None;
        }
        let parent = self
            .input
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."));
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("transactions");
        Some(parent.join(format!("{}_basket.json", stem)))
    }
}

/// Validator for the shards parameter
fn validate_shards(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("shards must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
