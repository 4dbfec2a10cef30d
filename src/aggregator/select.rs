//! Key extraction and row selection.
//!
//! `KeySource` tells the aggregation stages how to read a grouping key
//! from a row: straight from a field, or as the calendar year of a date
//! field (the heatmap's x axis).

use crate::parser::schema::{GroupKey, Row};
use crate::utils::error::AggregateError;
use chrono::Datelike;
use log::debug;
use std::collections::HashSet;

/// Where a grouping key comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// The raw value of a field (string or integer)
    Field(String),

    /// The year of a date field
    Year(String),
}

impl KeySource {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn year(name: impl Into<String>) -> Self {
        Self::Year(name.into())
    }

    /// Name of the underlying field
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Year(name) => name,
        }
    }

    /// Read the key of `row`, which sits at `index` in its collection
    pub fn extract(&self, row: &Row, index: usize) -> Result<GroupKey, AggregateError> {
        match self {
            Self::Field(name) => row.key(name, index),
            Self::Year(name) => Ok(GroupKey::Int(row.date(name, index)?.year() as i64)),
        }
    }
}

/// Keep the rows whose date falls in `[start, end]` (years, inclusive)
///
/// # Errors
/// * `AggregateError::InvalidInput` - `start > end`, or a date does not parse
/// * `AggregateError::MissingField` - a row has no `date_field`
pub fn filter_years(
    rows: &[Row],
    date_field: &str,
    start: i64,
    end: i64,
) -> Result<Vec<Row>, AggregateError> {
    check_year_range(start, end)?;

    let mut kept = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let year = row.date(date_field, i)?.year() as i64;
        if (start..=end).contains(&year) {
            kept.push(row.clone());
        }
    }

    debug!(
        "Year filter [{}, {}] kept {} of {} rows",
        start,
        end,
        kept.len(),
        rows.len()
    );

    Ok(kept)
}

/// Shared by `filter_years` and `year_range`
pub(crate) fn check_year_range(start: i64, end: i64) -> Result<(), AggregateError> {
    if start > end {
        return Err(AggregateError::invalid(format!(
            "inverted year range: {} > {}",
            start, end
        )));
    }
    Ok(())
}

/// Distinct keys in first-seen order
///
/// Used for ordinal colour domains and the neighborhood list.
pub fn distinct_keys(rows: &[Row], key: &KeySource) -> Result<Vec<GroupKey>, AggregateError> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let k = key.extract(row, i)?;
        if seen.insert(k.clone()) {
            keys.push(k);
        }
    }

    Ok(keys)
}

/// Ascending, deduplicated keys (band-scale axis domain)
pub fn sorted_keys(keys: impl IntoIterator<Item = GroupKey>) -> Vec<GroupKey> {
    let mut keys: Vec<GroupKey> = keys.into_iter().collect();
    keys.sort();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plantations() -> Vec<Row> {
        vec![
            Row::new().with("Arrond_Nom", "Verdun").with("Date_Plantation", "2009-06-01"),
            Row::new().with("Arrond_Nom", "Anjou").with("Date_Plantation", "2010-01-01"),
            Row::new().with("Arrond_Nom", "Verdun").with("Date_Plantation", "2020-12-31"),
            Row::new().with("Arrond_Nom", "Lachine").with("Date_Plantation", "2021-01-01"),
        ]
    }

    #[test]
    fn test_year_source() {
        let row = Row::new().with("Date_Plantation", "2013-07-04");
        let key = KeySource::year("Date_Plantation").extract(&row, 0).unwrap();
        assert_eq!(key, GroupKey::Int(2013));
    }

    #[test]
    fn test_filter_years_inclusive() {
        let kept = filter_years(&plantations(), "Date_Plantation", 2010, 2020).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text("Arrond_Nom", 0).unwrap(), "Anjou");
    }

    #[test]
    fn test_filter_years_inverted() {
        let result = filter_years(&plantations(), "Date_Plantation", 2020, 2010);
        assert_eq!(result, Err(AggregateError::invalid("inverted year range: 2020 > 2010")));
        assert_eq!(
            crate::aggregator::year_range(2020, 2010),
            Err(AggregateError::invalid("inverted year range: 2020 > 2010"))
        );
    }

    #[test]
    fn test_filter_years_missing_field() {
        let rows = vec![Row::new().with("Arrond_Nom", "Verdun")];
        let result = filter_years(&rows, "Date_Plantation", 2010, 2020);
        assert_eq!(result, Err(AggregateError::missing("Date_Plantation", 0)));
    }

    #[test]
    fn test_distinct_keys_first_seen() {
        let keys = distinct_keys(&plantations(), &KeySource::field("Arrond_Nom")).unwrap();
        assert_eq!(
            keys,
            vec![
                GroupKey::from("Verdun"),
                GroupKey::from("Anjou"),
                GroupKey::from("Lachine")
            ]
        );

        let sorted = sorted_keys(keys);
        assert_eq!(sorted[0], GroupKey::from("Anjou"));
        assert_eq!(sorted[2], GroupKey::from("Verdun"));
    }
}
