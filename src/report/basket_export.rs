//! Basket analysis export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::{ColumnMapping, ItemFrequency, PairStatistic};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// cobasket version
    pub cobasket_version: String,
    /// Input file path
    pub input_file: String,
    pub transaction_column: String,
    pub item_column: String,
    /// Item the combinations table was filtered on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_item: Option<String>,
}

/// Summary statistics of the analysis
#[derive(Serialize)]
pub struct AnalysisTotals {
    pub record_count: usize,
    pub transaction_count: usize,
    pub item_count: usize,
    pub pair_count: usize,
}

/// Complete basket analysis export with metadata
#[derive(Serialize)]
pub struct BasketAnalysisExport<'a> {
    pub metadata: AnalysisMetadata,
    pub totals: AnalysisTotals,
    /// Popular Items, sorted by transaction count descending
    pub popular_items: &'a [ItemFrequency],
    /// Item Combinations, either all pairs or those of the selected item
    pub item_combinations: &'a [PairStatistic],
}

/// Parameters for the analysis export
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub columns: &'a ColumnMapping,
    pub selected_item: Option<&'a str>,
    pub record_count: usize,
    pub transaction_count: usize,
    /// Number of pairs in the full table, regardless of what is exported
    pub pair_count: usize,
}

/// Export the analysis tables to a JSON file with run metadata
pub fn export_basket_analysis(
    popular_items: &[ItemFrequency],
    item_combinations: &[PairStatistic],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = BasketAnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            cobasket_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            transaction_column: params.columns.transaction_column.clone(),
            item_column: params.columns.item_column.clone(),
            selected_item: params.selected_item.map(|s| s.to_string()),
        },
        totals: AnalysisTotals {
            record_count: params.record_count,
            transaction_count: params.transaction_count,
            item_count: popular_items.len(),
            pair_count: params.pair_count,
        },
        popular_items,
        item_combinations,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize basket analysis to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write basket analysis to {}",
            output_path.display()
        )
    })?;

    Ok(())
}

/// Build a DataFrame from the pair table using the display column names
pub fn pairs_to_dataframe(pairs: &[PairStatistic]) -> Result<DataFrame> {
    let item_a: Vec<&str> = pairs.iter().map(|p| p.item_a.as_str()).collect();
    let item_b: Vec<&str> = pairs.iter().map(|p| p.item_b.as_str()).collect();
    let trx_ab: Vec<u64> = pairs.iter().map(|p| p.pair_transaction_count as u64).collect();
    let trx_a: Vec<u64> = pairs
        .iter()
        .map(|p| p.item_a_transaction_count as u64)
        .collect();
    let prob: Vec<f64> = pairs.iter().map(|p| p.probability_percent).collect();

    let df = df! {
        "Item A" => item_a,
        "Item B" => item_b,
        "Trx AB" => trx_ab,
        "Trx A" => trx_a,
        "Prob (%)" => prob,
    }
    .context("Failed to build pair table")?;

    Ok(df)
}

/// Write the pair table to a file (CSV or Parquet based on extension)
pub fn write_pair_table(pairs: &[PairStatistic], path: &Path) -> Result<()> {
    let mut df = pairs_to_dataframe(pairs)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        ),
    }

    Ok(())
}
