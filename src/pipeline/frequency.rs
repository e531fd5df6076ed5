//! Item frequency counting ("Popular Items")

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::transaction::TransactionRecord;

/// Number of distinct transactions containing an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFrequency {
    pub item: String,
    pub transaction_count: usize,
}

/// Count the distinct transactions containing each item.
///
/// Duplicate rows of an item within one transaction count once. Rows are
/// returned sorted by item name; callers wanting the popularity ordering
/// should use [`sort_by_transaction_count`].
pub fn count_item_frequencies(transactions: &[TransactionRecord]) -> Vec<ItemFrequency> {
    let mut seen: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in transactions {
        seen.entry(record.item.as_str())
            .or_default()
            .insert(record.transaction_id.as_str());
    }

    seen.into_iter()
        .map(|(item, ids)| ItemFrequency {
            item: item.to_string(),
            transaction_count: ids.len(),
        })
        .collect()
}

/// Sort by transaction count descending, ties broken by item name
pub fn sort_by_transaction_count(frequencies: &mut [ItemFrequency]) {
    frequencies.sort_by(|a, b| {
        b.transaction_count
            .cmp(&a.transaction_count)
            .then_with(|| a.item.cmp(&b.item))
    });
}

/// The default item selection: the item found in the most transactions.
///
/// Returns `None` for empty input, where no selection is possible.
pub fn most_popular_item(frequencies: &[ItemFrequency]) -> Option<&str> {
    frequencies
        .iter()
        .min_by(|a, b| {
            b.transaction_count
                .cmp(&a.transaction_count)
                .then_with(|| a.item.cmp(&b.item))
        })
        .map(|f| f.item.as_str())
}
