//! Name normalization.
//!
//! Rewrites a free-text name field so that only its first character is
//! upper-case ("JOHN" -> "John"). Returns new rows; the input is untouched.

use crate::parser::schema::Row;
use crate::utils::error::AggregateError;
use log::debug;

/// Normalize `field` in every row
///
/// **Public** - first stage of the lines pipeline
///
/// Row order and all other fields are preserved. An empty name stays empty.
///
/// # Errors
/// * `AggregateError::MissingField` - a row has no `field`
/// * `AggregateError::InvalidInput` - `field` is not a string
pub fn clean_names(rows: &[Row], field: &str) -> Result<Vec<Row>, AggregateError> {
    debug!("Normalizing '{}' in {} rows", field, rows.len());

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let name = capitalize(row.text(field, i)?);
            Ok(row.clone().with(field, name))
        })
        .collect()
}

/// Upper-case the first character, lower-case the rest
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
