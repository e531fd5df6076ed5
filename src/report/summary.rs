//! Basket analysis summary report

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a basket analysis run
#[derive(Debug, Default)]
pub struct BasketSummary {
    pub record_count: usize,
    pub transaction_count: usize,
    pub item_count: usize,
    pub pair_count: usize,
    /// Sum of per-item transaction counts (distinct items over all baskets)
    pub basket_item_total: usize,
    pub selected_item: Option<String>,
    pub selected_pair_count: usize,
    pub load_time: Duration,
    pub aggregate_time: Duration,
}

impl BasketSummary {
    pub fn new(record_count: usize, transaction_count: usize) -> Self {
        Self {
            record_count,
            transaction_count,
            ..Default::default()
        }
    }

    pub fn set_counts(&mut self, item_count: usize, basket_item_total: usize, pair_count: usize) {
        self.item_count = item_count;
        self.basket_item_total = basket_item_total;
        self.pair_count = pair_count;
    }

    pub fn set_selection(&mut self, item: &str, pair_count: usize) {
        self.selected_item = Some(item.to_string());
        self.selected_pair_count = pair_count;
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_aggregate_time(&mut self, elapsed: Duration) {
        self.aggregate_time = elapsed;
    }

    /// Average number of distinct items per transaction
    pub fn average_basket_size(&self) -> f64 {
        if self.transaction_count == 0 {
            0.0
        } else {
            self.basket_item_total as f64 / self.transaction_count as f64
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BASKET SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("🧾 Records"), Cell::new(self.record_count)]);
        table.add_row(vec![
            Cell::new("🛒 Transactions"),
            Cell::new(self.transaction_count),
        ]);
        table.add_row(vec![Cell::new("🍙 Items"), Cell::new(self.item_count)]);
        table.add_row(vec![
            Cell::new("🔗 Item Pairs"),
            Cell::new(self.pair_count).fg(if self.pair_count == 0 {
                Color::Yellow
            } else {
                Color::White
            }),
        ]);
        table.add_row(vec![
            Cell::new("📐 Avg Basket Size"),
            Cell::new(format!("{:.2}", self.average_basket_size())),
        ]);

        if let Some(item) = &self.selected_item {
            table.add_row(vec![
                Cell::new("🎯 Selected Item"),
                Cell::new(item).fg(Color::Cyan).add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![
                Cell::new("🤝 Partners"),
                Cell::new(self.selected_pair_count)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏱️  Load / Aggregate"),
            Cell::new(format!(
                "{:.2}s / {:.2}s",
                self.load_time.as_secs_f64(),
                self.aggregate_time.as_secs_f64()
            )),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_basket_size() {
        let mut summary = BasketSummary::new(6, 3);
        summary.set_counts(3, 6, 6);
        assert!((summary.average_basket_size() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_basket_size_empty() {
        let summary = BasketSummary::new(0, 0);
        assert_eq!(summary.average_basket_size(), 0.0);
    }
}
