use std::hash::Hash;

use indexmap::IndexMap;
use tracing::trace;

use crate::core::{IrisRecord, QuartileSummary};
use crate::error::ChartResult;

/// Partitions `items` by key, keeping groups in first-appearance order and
/// values within a group in encounter order.
pub fn group_values_by<T, K, V>(
    items: &[T],
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> V,
) -> IndexMap<K, Vec<V>>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(value_fn(item));
    }
    groups
}

/// Petal lengths keyed by species.
#[must_use]
pub fn group_petal_lengths(records: &[IrisRecord]) -> IndexMap<String, Vec<f64>> {
    group_values_by(
        records,
        |record| record.species.clone(),
        |record| record.petal_length,
    )
}

/// Builds one quartile summary per group, preserving group order.
pub fn summarize_groups<K>(
    groups: &IndexMap<K, Vec<f64>>,
) -> ChartResult<IndexMap<K, QuartileSummary>>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    let mut summaries = IndexMap::with_capacity(groups.len());
    for (key, values) in groups {
        let summary = QuartileSummary::from_values(values)?;
        trace!(group = ?key, count = values.len(), median = summary.median, "group summary");
        summaries.insert(key.clone(), summary);
    }
    Ok(summaries)
}
