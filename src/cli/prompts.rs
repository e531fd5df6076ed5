//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::pipeline::ItemFrequency;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm overwriting an existing output file
pub fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    confirm_step(&format!("{} already exists. Overwrite?", path.display()))
}

/// Prompt user to pick "Item A" from the popular items table.
///
/// `frequencies` should be in display order; `default` is the highlighted row.
pub fn select_item(frequencies: &[ItemFrequency], default: usize) -> Result<String> {
    let labels: Vec<String> = frequencies
        .iter()
        .map(|f| format!("{} ({} transactions)", f.item, f.transaction_count))
        .collect();

    let index = Select::new()
        .with_prompt("Select an item")
        .items(&labels)
        .default(default)
        .max_length(15)
        .interact()?;

    Ok(frequencies[index].item.clone())
}
