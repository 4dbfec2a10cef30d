//! "Other" collapsing of non-top members.

use crate::parser::schema::{AggregatedCount, GroupKey, NestedGroup};
use crate::utils::config::OTHER_LABEL;
use log::debug;
use std::collections::HashSet;

/// Replace every member not in `kept` with a single `"Other"` member
///
/// **Public** - last stage of the lines pipeline
///
/// Kept members retain their counts and relative order. The synthetic
/// member is appended last and is present even when its count is 0, so
/// every group has the same bar layout. A real member already named
/// `"Other"` is folded into the synthetic one. Group totals are preserved.
pub fn collapse_others(groups: &[NestedGroup], kept: &[GroupKey]) -> Vec<NestedGroup> {
    let other = GroupKey::from(OTHER_LABEL);
    let kept: HashSet<&GroupKey> = kept.iter().filter(|k| **k != other).collect();

    debug!(
        "Collapsing {} groups to {} kept keys plus '{}'",
        groups.len(),
        kept.len(),
        OTHER_LABEL
    );

    groups
        .iter()
        .map(|group| {
            let mut other_count = 0;
            let mut members: Vec<AggregatedCount> = Vec::with_capacity(kept.len() + 1);

            for member in &group.members {
                if kept.contains(&member.key) {
                    members.push(member.clone());
                } else {
                    other_count += member.count;
                }
            }

            members.push(AggregatedCount {
                key: other.clone(),
                count: other_count,
            });

            NestedGroup {
                key: group.key.clone(),
                members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn act(key: i64, members: &[(&str, u64)]) -> NestedGroup {
        NestedGroup::new(
            key,
            members
                .iter()
                .map(|(k, c)| AggregatedCount::new(*k, *c))
                .collect(),
        )
    }

    #[test]
    fn test_collapse_sums_removed() {
        let groups = vec![act(1, &[("Jane", 4), ("John", 2), ("Mary", 3), ("Paul", 1)])];
        let kept = vec![GroupKey::from("John"), GroupKey::from("Jane")];

        let collapsed = collapse_others(&groups, &kept);

        assert_eq!(
            collapsed,
            vec![act(1, &[("Jane", 4), ("John", 2), ("Other", 4)])]
        );
        assert_eq!(collapsed[0].total(), groups[0].total());
    }

    #[test]
    fn test_collapse_emits_zero_other() {
        let groups = vec![act(2, &[("John", 5)])];
        let collapsed = collapse_others(&groups, &[GroupKey::from("John")]);
        assert_eq!(collapsed, vec![act(2, &[("John", 5), ("Other", 0)])]);
    }

    #[test]
    fn test_collapse_folds_real_other() {
        let groups = vec![act(1, &[("Other", 2), ("John", 1), ("Mary", 1)])];
        let kept = vec![GroupKey::from("Other"), GroupKey::from("John")];

        let collapsed = collapse_others(&groups, &kept);

        assert_eq!(collapsed, vec![act(1, &[("John", 1), ("Other", 3)])]);
    }

    #[test]
    fn test_collapse_empty_kept() {
        let groups = vec![act(1, &[("John", 1), ("Mary", 1)]), act(2, &[])];
        let collapsed = collapse_others(&groups, &[]);
        assert_eq!(collapsed, vec![act(1, &[("Other", 2)]), act(2, &[("Other", 0)])]);
    }
}
