//! Count distribution statistics over aggregated data.
//!
//! `max_count` is the upper bound of the linear y / colour domain
//! `[0, max]` used by the chart binders.

use crate::parser::schema::{GridCell, NestedGroup};
use std::collections::HashSet;

/// Summary of an aggregate's counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountDistribution {
    /// Sum of all counts
    pub total: u64,

    /// Number of outer groups
    pub groups: usize,

    /// Number of `(outer, inner)` entries
    pub entries: usize,

    /// Largest single entry count
    pub max_count: u64,

    /// Mean total per group
    pub mean_per_group: u64,
}

/// Distribution over nested groups
///
/// **Public** - returned to the lines command for logging
pub fn group_distribution(groups: &[NestedGroup]) -> CountDistribution {
    if groups.is_empty() {
        return CountDistribution::default();
    }

    let total: u64 = groups.iter().map(NestedGroup::total).sum();
    let entries = groups.iter().map(|g| g.members.len()).sum();
    let max_count = groups
        .iter()
        .flat_map(|g| g.members.iter().map(|m| m.count))
        .max()
        .unwrap_or(0);

    CountDistribution {
        total,
        groups: groups.len(),
        entries,
        max_count,
        mean_per_group: total / groups.len() as u64,
    }
}

/// Distribution over grid cells; groups are the distinct outer keys
pub fn cell_distribution(cells: &[GridCell]) -> CountDistribution {
    if cells.is_empty() {
        return CountDistribution::default();
    }

    let total: u64 = cells.iter().map(|c| c.count).sum();
    let groups = cells.iter().map(|c| &c.outer).collect::<HashSet<_>>().len();

    CountDistribution {
        total,
        groups,
        entries: cells.len(),
        max_count: cells.iter().map(|c| c.count).max().unwrap_or(0),
        mean_per_group: total / groups.max(1) as u64,
    }
}

impl CountDistribution {
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Groups: {} | Entries: {} | Max: {} | Mean/group: {}",
            self.total, self.groups, self.entries, self.max_count, self.mean_per_group
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::AggregatedCount;

    #[test]
    fn test_group_distribution() {
        let groups = vec![
            NestedGroup::new(
                1,
                vec![AggregatedCount::new("John", 6), AggregatedCount::new("Jane", 2)],
            ),
            NestedGroup::new(2, vec![AggregatedCount::new("Jane", 4)]),
        ];

        let dist = group_distribution(&groups);

        assert_eq!(dist.total, 12);
        assert_eq!(dist.groups, 2);
        assert_eq!(dist.entries, 3);
        assert_eq!(dist.max_count, 6);
        assert_eq!(dist.mean_per_group, 6);
    }

    #[test]
    fn test_cell_distribution() {
        let cells = vec![
            GridCell::new("A", 2010, 3),
            GridCell::new("A", 2011, 0),
            GridCell::new("B", 2010, 5),
        ];

        let dist = cell_distribution(&cells);

        assert_eq!(dist.total, 8);
        assert_eq!(dist.groups, 2);
        assert_eq!(dist.max_count, 5);
        assert_eq!(dist.mean_per_group, 4);
    }

    #[test]
    fn test_distribution_empty() {
        let dist = group_distribution(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist.total, 0);
        assert_eq!(cell_distribution(&[]), CountDistribution::default());
    }
}
