//! Pairwise co-occurrence analysis ("Item Combinations")
//!
//! For every ordered pair of distinct items (A, B) that share at least one
//! transaction, counts the distinct transactions containing both and derives
//! the conditional probability P(B | A) from A's own transaction count.

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::BasketError;
use super::frequency::{count_item_frequencies, ItemFrequency};
use super::transaction::{build_baskets, TransactionRecord};

/// Decimal places kept in the ratio before it is scaled to a percentage
const PROBABILITY_DECIMALS: i32 = 3;

/// Co-occurrence statistics for an ordered item pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStatistic {
    pub item_a: String,
    pub item_b: String,
    /// Distinct transactions containing both items
    pub pair_transaction_count: usize,
    /// Distinct transactions containing `item_a`
    pub item_a_transaction_count: usize,
    /// P(item_b | item_a) as a percentage in [0, 100]
    pub probability_percent: f64,
}

/// Item and pair counts over a set of baskets.
///
/// Counts from disjoint sets of baskets can be merged by summation. Probabilities
/// are only derived once all partial counts have been merged.
#[derive(Debug, Clone, Default)]
pub struct BasketCounts<'a> {
    transactions: usize,
    items: HashMap<&'a str, usize>,
    pairs: HashMap<(&'a str, &'a str), usize>,
}

impl<'a> BasketCounts<'a> {
    /// Count items and ordered pairs over baskets of distinct items.
    pub fn from_baskets<'s, I>(baskets: I) -> Self
    where
        'a: 's,
        I: IntoIterator<Item = &'s BTreeSet<&'a str>>,
    {
        let mut counts = Self::default();
        for basket in baskets {
            counts.transactions += 1;
            for &item_a in basket {
                *counts.items.entry(item_a).or_insert(0) += 1;
                for &item_b in basket {
                    if item_a != item_b {
                        *counts.pairs.entry((item_a, item_b)).or_insert(0) += 1;
                    }
                }
            }
        }
        counts
    }

    /// Sum the counts of two disjoint sets of baskets.
    pub fn merge(mut self, other: Self) -> Self {
        self.transactions += other.transactions;
        for (item, count) in other.items {
            *self.items.entry(item).or_insert(0) += count;
        }
        for (pair, count) in other.pairs {
            *self.pairs.entry(pair).or_insert(0) += count;
        }
        self
    }

    /// Number of baskets counted
    pub fn transaction_count(&self) -> usize {
        self.transactions
    }

    /// Number of distinct ordered pairs seen
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Per-item transaction counts, sorted by item name
    pub fn item_frequencies(&self) -> Vec<ItemFrequency> {
        let mut frequencies: Vec<ItemFrequency> = self
            .items
            .iter()
            .map(|(item, &count)| ItemFrequency {
                item: item.to_string(),
                transaction_count: count,
            })
            .collect();
        frequencies.sort_by(|a, b| a.item.cmp(&b.item));
        frequencies
    }

    /// Derive pair statistics using the merged item counts as denominators.
    pub fn into_pair_statistics(self) -> Result<Vec<PairStatistic>, BasketError> {
        let frequencies = self.item_frequencies();
        derive_statistics(self.pairs, &frequencies)
    }
}

/// Compute co-occurrence statistics for every ordered pair of distinct items.
///
/// Items that never share a transaction with another item produce no rows.
/// Rows are sorted by `(item_a, item_b)`.
pub fn compute_pair_statistics(
    transactions: &[TransactionRecord],
) -> Result<Vec<PairStatistic>, BasketError> {
    let frequencies = count_item_frequencies(transactions);
    let baskets = build_baskets(transactions);
    let counts = BasketCounts::from_baskets(baskets.values());

    tracing::debug!(
        transactions = counts.transaction_count(),
        items = frequencies.len(),
        pairs = counts.pair_count(),
        "Counted item pairs"
    );

    derive_statistics(counts.pairs, &frequencies)
}

/// Same result as [`compute_pair_statistics`], aggregated over `shards` disjoint
/// sets of baskets in parallel.
///
/// Baskets, not records, are partitioned so a transaction never spans shards.
pub fn compute_pair_statistics_sharded(
    transactions: &[TransactionRecord],
    shards: usize,
) -> Result<Vec<PairStatistic>, BasketError> {
    let baskets = build_baskets(transactions);
    if baskets.is_empty() {
        return Ok(Vec::new());
    }

    let basket_list: Vec<&BTreeSet<&str>> = baskets.values().collect();
    let shards = shards.clamp(1, basket_list.len());
    let chunk_size = basket_list.len().div_ceil(shards);

    tracing::debug!(
        baskets = basket_list.len(),
        shards,
        chunk_size,
        "Aggregating pair counts in shards"
    );

    let merged = basket_list
        .par_chunks(chunk_size)
        .map(|chunk| BasketCounts::from_baskets(chunk.iter().copied()))
        .reduce(BasketCounts::default, BasketCounts::merge);

    merged.into_pair_statistics()
}

fn derive_statistics(
    pairs: HashMap<(&str, &str), usize>,
    frequencies: &[ItemFrequency],
) -> Result<Vec<PairStatistic>, BasketError> {
    let denominators: HashMap<&str, usize> = frequencies
        .iter()
        .map(|f| (f.item.as_str(), f.transaction_count))
        .collect();

    let mut statistics = pairs
        .into_iter()
        .map(|((item_a, item_b), pair_count)| {
            let item_a_count = denominators.get(item_a).copied().unwrap_or(0);
            Ok(PairStatistic {
                item_a: item_a.to_string(),
                item_b: item_b.to_string(),
                pair_transaction_count: pair_count,
                item_a_transaction_count: item_a_count,
                probability_percent: probability_percent(pair_count, item_a_count, item_a)?,
            })
        })
        .collect::<Result<Vec<_>, BasketError>>()?;

    statistics.sort_by(|a, b| {
        a.item_a
            .cmp(&b.item_a)
            .then_with(|| a.item_b.cmp(&b.item_b))
    });

    Ok(statistics)
}

/// Conditional probability as a percentage.
///
/// The ratio is rounded to three decimals (half to even) before scaling by 100,
/// so 2/3 yields 66.7 rather than 66.667.
pub fn probability_percent(
    pair_count: usize,
    item_a_count: usize,
    item_a: &str,
) -> Result<f64, BasketError> {
    if item_a_count == 0 {
        return Err(BasketError::ZeroDenominator {
            item: item_a.to_string(),
        });
    }

    let ratio = pair_count as f64 / item_a_count as f64;
    let scale = 10f64.powi(PROBABILITY_DECIMALS);
    Ok((ratio * scale).round_ties_even() / scale * 100.0)
}

/// Pair rows whose first item is `item_a`.
///
/// An item absent from the input yields an empty table, not an error.
pub fn pairs_for_item(pairs: &[PairStatistic], item_a: &str) -> Vec<PairStatistic> {
    pairs
        .iter()
        .filter(|p| p.item_a == item_a)
        .cloned()
        .collect()
}

/// Sort by co-occurrence count descending, ties broken by `item_b`
pub fn sort_by_pair_count(pairs: &mut [PairStatistic]) {
    pairs.sort_by(|a, b| {
        b.pair_transaction_count
            .cmp(&a.pair_transaction_count)
            .then_with(|| a.item_b.cmp(&b.item_b))
    });
}

/// The partner most often bought with the selected item.
///
/// Expects rows for a single `item_a`, where the pair count and probability
/// orderings coincide.
pub fn top_partner(pairs: &[PairStatistic]) -> Option<&PairStatistic> {
    pairs.iter().min_by(|a, b| {
        b.pair_transaction_count
            .cmp(&a.pair_transaction_count)
            .then_with(|| a.item_b.cmp(&b.item_b))
    })
}
