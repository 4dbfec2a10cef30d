//! Grouped summarization of rows into nested counts.
//!
//! Rows are partitioned by an outer key, then counted by an inner key.
//! Both levels keep first-encounter order. Pairs that never occur get no
//! entry; use `densify` when a complete grid is needed.

use super::counter::OrderedCounts;
use super::select::KeySource;
use crate::parser::schema::{GridCell, GroupKey, NestedGroup, Row};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::HashMap;

/// Group rows by `outer`, counting `inner` within each group
///
/// **Public** - main entry point for summarization
///
/// # Example
/// ```ignore
/// let groups = summarize_groups(&rows, &KeySource::field("Act"), &KeySource::field("Player"))?;
/// // [{ key: 1, members: [{ key: "John", count: 2 }, ...] }, ...]
/// ```
///
/// # Errors
/// * `AggregateError::MissingField` - a row lacks the outer or inner field
/// * `AggregateError::InvalidInput` - a field value cannot be used as a key
pub fn summarize_groups(
    rows: &[Row],
    outer: &KeySource,
    inner: &KeySource,
) -> Result<Vec<NestedGroup>, AggregateError> {
    debug!(
        "Summarizing {} rows by '{}' then '{}'",
        rows.len(),
        outer.name(),
        inner.name()
    );

    let mut groups: Vec<(GroupKey, OrderedCounts)> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for (i, row) in rows.iter().enumerate() {
        let outer_key = outer.extract(row, i)?;
        let inner_key = inner.extract(row, i)?;

        let slot = match index.get(&outer_key) {
            Some(&slot) => slot,
            None => {
                index.insert(outer_key.clone(), groups.len());
                groups.push((outer_key, OrderedCounts::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.add(inner_key);
    }

    debug!("Built {} groups", groups.len());

    Ok(groups
        .into_iter()
        .map(|(key, counts)| NestedGroup {
            key,
            members: counts.into_counts(),
        })
        .collect())
}

/// Same aggregation as `summarize_groups`, flattened into grid cells
///
/// This is the yearly-count table of the heatmap: one cell per observed
/// `(neighborhood, year)` pair.
pub fn summarize_cells(
    rows: &[Row],
    outer: &KeySource,
    inner: &KeySource,
) -> Result<Vec<GridCell>, AggregateError> {
    Ok(flatten_groups(&summarize_groups(rows, outer, inner)?))
}

/// Flatten nested groups into `(outer, inner, count)` cells
pub fn flatten_groups(groups: &[NestedGroup]) -> Vec<GridCell> {
    groups
        .iter()
        .flat_map(|group| {
            group.members.iter().map(move |member| GridCell {
                outer: group.key.clone(),
                inner: member.key.clone(),
                count: member.count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::AggregatedCount;
    use pretty_assertions::assert_eq;

    fn row(act: i64, player: &str) -> Row {
        Row::new().with("Act", act).with("Player", player)
    }

    #[test]
    fn test_summarize_groups_order_and_counts() {
        let rows = vec![
            row(2, "Jane"),
            row(1, "John"),
            row(2, "John"),
            row(1, "Jane"),
            row(1, "John"),
        ];

        let groups =
            summarize_groups(&rows, &KeySource::field("Act"), &KeySource::field("Player"))
                .unwrap();

        assert_eq!(
            groups,
            vec![
                NestedGroup::new(
                    2,
                    vec![AggregatedCount::new("Jane", 1), AggregatedCount::new("John", 1)]
                ),
                NestedGroup::new(
                    1,
                    vec![AggregatedCount::new("John", 2), AggregatedCount::new("Jane", 1)]
                ),
            ]
        );
    }

    #[test]
    fn test_summarize_groups_empty() {
        let groups =
            summarize_groups(&[], &KeySource::field("Act"), &KeySource::field("Player")).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_summarize_groups_missing_inner() {
        let rows = vec![row(1, "John"), Row::new().with("Act", 1)];
        let result = summarize_groups(&rows, &KeySource::field("Act"), &KeySource::field("Player"));
        assert_eq!(result, Err(AggregateError::missing("Player", 1)));
    }

    #[test]
    fn test_summarize_cells_by_year() {
        let rows = vec![
            Row::new().with("Arrond_Nom", "Verdun").with("Date_Plantation", "2012-03-01"),
            Row::new().with("Arrond_Nom", "Verdun").with("Date_Plantation", "2012-09-15"),
            Row::new().with("Arrond_Nom", "Anjou").with("Date_Plantation", "2014-05-05"),
        ];

        let cells = summarize_cells(
            &rows,
            &KeySource::field("Arrond_Nom"),
            &KeySource::year("Date_Plantation"),
        )
        .unwrap();

        assert_eq!(
            cells,
            vec![
                GridCell::new("Verdun", 2012, 2),
                GridCell::new("Anjou", 2014, 1),
            ]
        );
    }
}
