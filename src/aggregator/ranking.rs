//! Top-N ranking of entity keys by occurrence count.
//!
//! Ties keep the order in which keys were first seen: the counter is
//! insertion-ordered and `sort_by` is stable.

use super::counter::OrderedCounts;
use super::select::KeySource;
use crate::parser::schema::{AggregatedCount, GroupKey, Row};
use crate::utils::error::AggregateError;
use log::debug;

/// Count occurrences of each key, in first-seen order
///
/// **Public** - also used to report per-entity totals
pub fn count_keys(rows: &[Row], key: &KeySource) -> Result<Vec<AggregatedCount>, AggregateError> {
    let mut counts = OrderedCounts::new();
    for (i, row) in rows.iter().enumerate() {
        counts.add(key.extract(row, i)?);
    }
    Ok(counts.into_counts())
}

/// The `n` keys with the most rows, highest first
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `rows` - Input rows
/// * `key` - Where each row's entity key comes from
/// * `n` - Number of keys to return (e.g., 5)
///
/// # Returns
/// At most `n` keys, sorted by count (descending)
///
/// # Errors
/// * `AggregateError::InvalidInput` - `n == 0`
/// * `AggregateError::MissingField` - a row has no key field
pub fn top_n(rows: &[Row], key: &KeySource, n: usize) -> Result<Vec<GroupKey>, AggregateError> {
    check_n(n)?;
    let counts = count_keys(rows, key)?;
    rank_counts(&counts, n)
}

/// Rank pre-aggregated counts
pub fn rank_counts(counts: &[AggregatedCount], n: usize) -> Result<Vec<GroupKey>, AggregateError> {
    check_n(n)?;

    debug!("Ranking top {} of {} keys", n, counts.len());

    let mut sorted: Vec<&AggregatedCount> = counts.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(sorted.into_iter().take(n).map(|c| c.key.clone()).collect())
}

fn check_n(n: usize) -> Result<(), AggregateError> {
    if n == 0 {
        return Err(AggregateError::invalid("top-N size must be greater than 0"));
    }
    Ok(())
}
