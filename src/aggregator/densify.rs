//! Grid densification.
//!
//! Fills a sparse `(outer, inner) -> count` table so that every pair of the
//! declared key sets has exactly one cell. Missing pairs get count 0.

use super::select::check_year_range;
use crate::parser::schema::{GridCell, GroupKey};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Inclusive integer key range, e.g. the heatmap's years
///
/// # Errors
/// * `AggregateError::InvalidInput` - `start > end`
pub fn year_range(start: i64, end: i64) -> Result<Vec<GroupKey>, AggregateError> {
    check_year_range(start, end)?;
    Ok((start..=end).map(GroupKey::Int).collect())
}

/// Densify `cells` over `outer_keys` x `inner_keys`
///
/// **Public** - main entry point for densification
///
/// # Returns
/// Exactly one cell per pair, ordered outer-key major then inner-key.
/// Existing counts are kept, so running this on its own output returns
/// the same sequence.
///
/// # Errors
/// * `AggregateError::InvalidInput` - an empty key set, a key declared
///   twice, a cell whose key is outside the declared sets, or two input
///   cells for the same pair
pub fn densify(
    cells: &[GridCell],
    outer_keys: &[GroupKey],
    inner_keys: &[GroupKey],
) -> Result<Vec<GridCell>, AggregateError> {
    let outer_set = declared_set(outer_keys, "outer")?;
    let inner_set = declared_set(inner_keys, "inner")?;

    let mut existing: HashMap<(&GroupKey, &GroupKey), u64> = HashMap::with_capacity(cells.len());
    for cell in cells {
        if !outer_set.contains(&cell.outer) || !inner_set.contains(&cell.inner) {
            return Err(AggregateError::invalid(format!(
                "cell ({}, {}) is outside the declared keys",
                cell.outer, cell.inner
            )));
        }
        if existing.insert((&cell.outer, &cell.inner), cell.count).is_some() {
            return Err(AggregateError::invalid(format!(
                "duplicate cell ({}, {})",
                cell.outer, cell.inner
            )));
        }
    }

    let mut dense = Vec::with_capacity(outer_keys.len() * inner_keys.len());
    let mut inserted = 0usize;

    for outer in outer_keys {
        for inner in inner_keys {
            let count = match existing.get(&(outer, inner)) {
                Some(&count) => count,
                None => {
                    inserted += 1;
                    0
                }
            };
            dense.push(GridCell {
                outer: outer.clone(),
                inner: inner.clone(),
                count,
            });
        }
    }

    debug!(
        "Densified {}x{} grid: {} zero cells inserted",
        outer_keys.len(),
        inner_keys.len(),
        inserted
    );

    Ok(dense)
}

fn declared_set<'a>(
    keys: &'a [GroupKey],
    which: &str,
) -> Result<HashSet<&'a GroupKey>, AggregateError> {
    if keys.is_empty() {
        return Err(AggregateError::invalid(format!("empty {} key set", which)));
    }

    let mut set = HashSet::with_capacity(keys.len());
    for key in keys {
        if !set.insert(key) {
            return Err(AggregateError::invalid(format!(
                "{} key '{}' declared twice",
                which, key
            )));
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(names: &[&str]) -> Vec<GroupKey> {
        names.iter().map(|n| GroupKey::from(*n)).collect()
    }

    #[test]
    fn test_year_range() {
        assert_eq!(
            year_range(2010, 2012).unwrap(),
            vec![GroupKey::Int(2010), GroupKey::Int(2011), GroupKey::Int(2012)]
        );
        assert_eq!(year_range(2015, 2015).unwrap().len(), 1);
        assert!(year_range(2020, 2010).is_err());
    }

    #[test]
    fn test_densify_fills_zeros() {
        let cells = vec![GridCell::new("A", 2010, 3)];
        let dense = densify(&cells, &keys(&["A", "B"]), &year_range(2010, 2011).unwrap()).unwrap();

        assert_eq!(
            dense,
            vec![
                GridCell::new("A", 2010, 3),
                GridCell::new("A", 2011, 0),
                GridCell::new("B", 2010, 0),
                GridCell::new("B", 2011, 0),
            ]
        );
    }

    #[test]
    fn test_densify_idempotent() {
        let cells = vec![GridCell::new("B", 2011, 7)];
        let outer = keys(&["A", "B"]);
        let inner = year_range(2010, 2011).unwrap();

        let once = densify(&cells, &outer, &inner).unwrap();
        let twice = densify(&once, &outer, &inner).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.len(), outer.len() * inner.len());
        assert_eq!(once.last(), Some(&GridCell::new("B", 2011, 7)));
    }

    #[test]
    fn test_densify_rejects_cells_outside_keys() {
        let outer = keys(&["A", "B"]);
        let inner = year_range(2010, 2011).unwrap();

        let unknown_outer = vec![GridCell::new("A", 2010, 3), GridCell::new("Z", 2010, 9)];
        assert_eq!(
            densify(&unknown_outer, &outer, &inner),
            Err(AggregateError::invalid("cell (Z, 2010) is outside the declared keys"))
        );

        let unknown_year = vec![GridCell::new("B", 2019, 1)];
        assert!(matches!(
            densify(&unknown_year, &outer, &inner),
            Err(AggregateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_densify_rejects_duplicates() {
        let cells = vec![GridCell::new("A", 2010, 1), GridCell::new("A", 2010, 2)];
        let result = densify(&cells, &keys(&["A"]), &year_range(2010, 2010).unwrap());
        assert!(matches!(result, Err(AggregateError::InvalidInput(_))));

        let result = densify(&[], &keys(&["A", "A"]), &year_range(2010, 2010).unwrap());
        assert!(matches!(result, Err(AggregateError::InvalidInput(_))));
    }

    #[test]
    fn test_densify_rejects_empty_keys() {
        assert!(densify(&[], &[], &year_range(2010, 2010).unwrap()).is_err());
        assert!(densify(&[], &keys(&["A"]), &[]).is_err());
    }
}
