//! Row loader for JSON datasets.
//!
//! Accepts the shape a tabular export produces: either a bare array of
//! objects, or an object wrapping that array under one of the
//! `ROW_FIELD_NAMES` keys. Field values are kept as-is; typed access
//! (keys, dates) happens in the aggregation stages.

use super::schema::Row;
use crate::utils::config::ROW_FIELD_NAMES;
use crate::utils::error::LoadError;
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load rows from a JSON file
///
/// # Errors
/// * `LoadError::IoError` - File cannot be opened
/// * `LoadError::JsonError` - File is not valid JSON
/// * `LoadError::InvalidFormat` - JSON is not an array of objects
pub fn load_rows(input_path: impl AsRef<Path>) -> Result<Vec<Row>, LoadError> {
    let input_path = input_path.as_ref();

    info!("Loading rows from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_rows(&raw)
}

/// Convert parsed JSON into rows
pub fn parse_rows(raw: &Value) -> Result<Vec<Row>, LoadError> {
    let items = find_row_array(raw)?;

    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(Row::from_map(map.clone())),
            other => Err(LoadError::InvalidFormat(format!(
                "element {} is not an object: {}",
                i, other
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} rows", rows.len());

    Ok(rows)
}

/// Locate the row array in the raw document
///
/// **Private** - internal helper for parse_rows
fn find_row_array(raw: &Value) -> Result<&Vec<Value>, LoadError> {
    match raw {
        Value::Array(items) => Ok(items),

        Value::Object(obj) => ROW_FIELD_NAMES
            .iter()
            .find_map(|name| obj.get(*name).and_then(Value::as_array))
            .ok_or_else(|| {
                LoadError::InvalidFormat(format!(
                    "object has none of the row keys {:?}",
                    ROW_FIELD_NAMES
                ))
            }),

        _ => Err(LoadError::InvalidFormat(
            "Input must be a JSON array or object".to_string(),
        )),
    }
}
