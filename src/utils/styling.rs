//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::ColumnMapping;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static COLUMNS: Emoji<'_, '_> = Emoji("🧾 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static INSIGHT: Emoji<'_, '_> = Emoji("🔍 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        PACKAGE,
        style("cobasket").cyan().bold()
    );
    println!(
        "    {}",
        style("Product bundling from your transaction log").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, columns: &ColumnMapping, export: Option<&Path>) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:       {:<34}│",
        FOLDER,
        truncate_path(input, 33)
    );
    println!(
        "    │  {} Transaction: {:<34}│",
        COLUMNS,
        truncate_string(&columns.transaction_column, 33)
    );
    println!(
        "    │  {} Item:        {:<34}│",
        COLUMNS,
        truncate_string(&columns.item_column, 33)
    );
    if let Some(export) = export {
        println!(
            "    │  {} Export:      {:<34}│",
            SAVE,
            truncate_path(export, 33)
        );
    }
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the insight sentence for the selected item and its strongest partner
pub fn print_insight(selected: &str, partner: &str, probability_percent: f64) {
    println!();
    println!(
        "    {} {}",
        INSIGHT,
        style("Here's your insight!").white().bold()
    );
    println!(
        "      So, you select {}. Based on transaction data, your customer usually bought {} too with probability {}.",
        style(selected).cyan().bold(),
        style(partner).cyan().bold(),
        style(format!("{:.1}%", probability_percent)).yellow().bold()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("cobasket analysis complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "      Found {} {}",
        style(count).yellow().bold(),
        description
    );
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
