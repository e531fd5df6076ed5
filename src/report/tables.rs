//! Popular Items and Item Combinations tables

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{ItemFrequency, PairStatistic};

/// Probability at or above which a combination is highlighted as a strong bond
const STRONG_BOND_PERCENT: f64 = 50.0;

/// Build the Popular Items table from rows already in display order.
///
/// `top` limits the number of rows shown; 0 shows every row.
pub fn popular_items_table(frequencies: &[ItemFrequency], top: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Item A").add_attribute(Attribute::Bold),
        Cell::new("Trx A").add_attribute(Attribute::Bold),
    ]);

    for freq in limit(frequencies, top) {
        table.add_row(vec![
            Cell::new(&freq.item),
            Cell::new(freq.transaction_count).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Build the Item Combinations table from rows already in display order.
pub fn item_combinations_table(pairs: &[PairStatistic], top: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Item A").add_attribute(Attribute::Bold),
        Cell::new("Item B").add_attribute(Attribute::Bold),
        Cell::new("Trx AB").add_attribute(Attribute::Bold),
        Cell::new("Trx A").add_attribute(Attribute::Bold),
        Cell::new("Prob (%)").add_attribute(Attribute::Bold),
    ]);

    for pair in limit(pairs, top) {
        let color = if pair.probability_percent >= STRONG_BOND_PERCENT {
            Color::Green
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(&pair.item_a),
            Cell::new(&pair.item_b),
            Cell::new(pair.pair_transaction_count).set_alignment(CellAlignment::Right),
            Cell::new(pair.item_a_transaction_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", pair.probability_percent))
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print a titled table, indented like the rest of the output
pub fn display_table(title: &str, table: &Table, shown: usize, total: usize) {
    println!();
    println!("    {}", style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    if shown < total {
        println!(
            "    {}",
            style(format!("Showing {} of {} rows", shown, total)).dim()
        );
    }
}

/// Number of rows a table will show for the given `top` limit
pub fn shown_rows(total: usize, top: usize) -> usize {
    if top == 0 {
        total
    } else {
        total.min(top)
    }
}

fn limit<T>(rows: &[T], top: usize) -> &[T] {
    &rows[..shown_rows(rows.len(), top)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(item: &str, count: usize) -> ItemFrequency {
        ItemFrequency {
            item: item.to_string(),
            transaction_count: count,
        }
    }

    #[test]
    fn test_shown_rows() {
        assert_eq!(shown_rows(10, 0), 10);
        assert_eq!(shown_rows(10, 3), 3);
        assert_eq!(shown_rows(2, 5), 2);
    }

    #[test]
    fn test_popular_items_table_limits_rows() {
        let freqs = vec![freq("bread", 3), freq("milk", 2), freq("eggs", 1)];
        let rendered = popular_items_table(&freqs, 2).to_string();
        assert!(rendered.contains("bread"));
        assert!(rendered.contains("milk"));
        assert!(!rendered.contains("eggs"));
    }

    #[test]
    fn test_item_combinations_table_formats_probability() {
        let pairs = vec![PairStatistic {
            item_a: "bread".to_string(),
            item_b: "milk".to_string(),
            pair_transaction_count: 2,
            item_a_transaction_count: 3,
            probability_percent: 66.7,
        }];
        let rendered = item_combinations_table(&pairs, 0).to_string();
        assert!(rendered.contains("Prob (%)"));
        assert!(rendered.contains("66.7"));
    }
}
