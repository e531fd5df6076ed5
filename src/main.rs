//! cobasket: Market-Basket Analysis CLI Tool
//!
//! A command-line tool for finding the items customers buy together,
//! using per-item transaction counts and pairwise co-occurrence probabilities.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::{style, Term};

use cobasket::cli::{confirm_overwrite, select_item, Cli};
use cobasket::pipeline::{
    compute_pair_statistics, compute_pair_statistics_sharded, count_item_frequencies,
    count_transactions, load_transactions_with_progress, most_popular_item, pairs_for_item,
    sort_by_pair_count, sort_by_transaction_count, top_partner, ColumnMapping, ItemFrequency,
    PairStatistic,
};
use cobasket::report::{
    display_table, export_basket_analysis, item_combinations_table, popular_items_table,
    shown_rows, write_pair_table, BasketSummary, ExportParams,
};
use cobasket::utils::{
    create_spinner, finish_with_success, finish_with_warning, init_tracing, print_banner,
    print_completion, print_config, print_count, print_info, print_insight, print_step_header,
    print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let columns = cli.columns();
    let export_path = cli.export_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &columns, export_path.as_deref());

    // Step 1: Load transactions
    print_step_header(1, "Load Transactions");

    let step_start = Instant::now();
    let records = load_transactions_with_progress(&cli.input, &columns, cli.infer_schema_length)?;
    let transaction_count = count_transactions(&records);
    print_count("transaction(s)", transaction_count);

    let mut summary = BasketSummary::new(records.len(), transaction_count);
    summary.set_load_time(step_start.elapsed());

    // Step 2: Popular items
    print_step_header(2, "Popular Items");

    let step_start = Instant::now();
    let mut frequencies = count_item_frequencies(&records);
    sort_by_transaction_count(&mut frequencies);
    print_count("distinct item(s)", frequencies.len());

    if frequencies.is_empty() {
        print_warning("No transactions found - no item selection possible");
        let output = SaveOutput {
            columns: &columns,
            export_path: export_path.as_deref(),
            record_count: records.len(),
            transaction_count,
        };
        save_results(&cli, &output, &frequencies, &[], &[], None)?;
        summary.display();
        print_completion();
        return Ok(());
    }

    display_table(
        "Popular Items",
        &popular_items_table(&frequencies, cli.top),
        shown_rows(frequencies.len(), cli.top),
        frequencies.len(),
    );

    // Step 3: Item combinations
    print_step_header(3, "Item Combinations");

    let spinner = create_spinner("Counting item combinations...");
    let computed = if cli.shards > 1 {
        compute_pair_statistics_sharded(&records, cli.shards)
    } else {
        compute_pair_statistics(&records)
    };
    let pairs = match computed {
        Ok(pairs) => pairs,
        Err(e) => {
            finish_with_warning(&spinner, "Failed to count item combinations");
            return Err(e.into());
        }
    };
    let basket_item_total: usize = frequencies.iter().map(|f| f.transaction_count).sum();
    summary.set_counts(frequencies.len(), basket_item_total, pairs.len());
    summary.set_aggregate_time(step_start.elapsed());

    if pairs.is_empty() {
        finish_with_warning(&spinner, "No items were bought together");
    } else {
        finish_with_success(
            &spinner,
            &format!("Found {} item combination(s)", pairs.len()),
        );
    }

    let selected = choose_item(&cli, &frequencies)?;
    let mut combinations = pairs_for_item(&pairs, &selected);
    sort_by_pair_count(&mut combinations);
    summary.set_selection(&selected, combinations.len());

    if !frequencies.iter().any(|f| f.item == selected) {
        print_warning(&format!(
            "Item '{}' does not appear in the transaction data",
            selected
        ));
    } else if combinations.is_empty() {
        print_info(&format!(
            "'{}' was never bought together with another item",
            selected
        ));
    } else {
        display_table(
            &format!("Item Combinations for {}", style(&selected).cyan()),
            &item_combinations_table(&combinations, cli.top),
            shown_rows(combinations.len(), cli.top),
            combinations.len(),
        );
    }

    if let Some(partner) = top_partner(&combinations) {
        print_insight(&selected, &partner.item_b, partner.probability_percent);
    }

    // Step 4: Save results
    let exported = if cli.export_all { &pairs } else { &combinations };
    let output = SaveOutput {
        columns: &columns,
        export_path: export_path.as_deref(),
        record_count: records.len(),
        transaction_count,
    };
    save_results(
        &cli,
        &output,
        &frequencies,
        exported,
        &pairs,
        Some(selected.as_str()),
    )?;

    summary.display();
    print_completion();

    Ok(())
}

/// Destinations and run counts shared by every save
struct SaveOutput<'a> {
    columns: &'a ColumnMapping,
    export_path: Option<&'a std::path::Path>,
    record_count: usize,
    transaction_count: usize,
}

/// Write the JSON export and the full pair table, when requested.
///
/// Runs for empty input too, writing empty tables with no selected item.
fn save_results(
    cli: &Cli,
    output: &SaveOutput,
    frequencies: &[ItemFrequency],
    exported: &[PairStatistic],
    pairs: &[PairStatistic],
    selected_item: Option<&str>,
) -> Result<()> {
    if output.export_path.is_none() && cli.pairs_output.is_none() {
        return Ok(());
    }
    print_step_header(4, "Save Results");

    if let Some(path) = output.export_path {
        if can_write(cli, path)? {
            export_basket_analysis(
                frequencies,
                exported,
                path,
                &ExportParams {
                    input_file: &cli.input.display().to_string(),
                    columns: output.columns,
                    selected_item,
                    record_count: output.record_count,
                    transaction_count: output.transaction_count,
                    pair_count: pairs.len(),
                },
            )?;
            print_success(&format!("Analysis exported to {}", path.display()));
        }
    }

    if let Some(path) = cli.pairs_output.as_deref() {
        if can_write(cli, path)? {
            write_pair_table(pairs, path)?;
            print_success(&format!("Pair table saved to {}", path.display()));
        }
    }

    Ok(())
}

/// Resolve "Item A": the `--item` flag, an interactive pick, or the most popular item.
fn choose_item(cli: &Cli, frequencies: &[ItemFrequency]) -> Result<String> {
    if let Some(item) = &cli.item {
        return Ok(item.clone());
    }

    let default_item = most_popular_item(frequencies)
        .ok_or_else(|| anyhow::anyhow!("No items available to select"))?;

    if cli.no_confirm || !Term::stdout().is_term() {
        print_info(&format!("Selected most popular item: {}", default_item));
        return Ok(default_item.to_string());
    }

    let default_index = frequencies
        .iter()
        .position(|f| f.item == default_item)
        .unwrap_or(0);
    select_item(frequencies, default_index)
}

/// Whether an output file may be written, asking before overwriting.
fn can_write(cli: &Cli, path: &std::path::Path) -> Result<bool> {
    if cli.no_confirm || !path.exists() || !Term::stdout().is_term() {
        return Ok(true);
    }
    let confirmed = confirm_overwrite(path)?;
    if !confirmed {
        print_info(&format!("Skipped {}", path.display()));
    }
    Ok(confirmed)
}
