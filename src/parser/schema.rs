//! Row and aggregate schema definitions.
//!
//! Rows are the loader's output; everything else in this file is what the
//! aggregation core produces and what the JSON reports carry on disk.

use crate::utils::error::AggregateError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single input record
///
/// Field names depend on the dataset (`Player`/`Act` for dialogue lines,
/// `Arrond_Nom`/`Date_Plantation` for tree plantations).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style setter, returns the updated row
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Look up a required field; absent and `null` both count as missing
    ///
    /// `index` is the row's position in its collection and is only used
    /// for error reporting.
    pub fn field(&self, field: &str, index: usize) -> Result<&Value, AggregateError> {
        match self.fields.get(field) {
            Some(Value::Null) | None => Err(AggregateError::missing(field, index)),
            Some(value) => Ok(value),
        }
    }

    pub fn text(&self, field: &str, index: usize) -> Result<&str, AggregateError> {
        self.field(field, index)?.as_str().ok_or_else(|| {
            AggregateError::invalid(format!("row {}: field '{}' is not a string", index, field))
        })
    }

    /// Read a field as a grouping key
    pub fn key(&self, field: &str, index: usize) -> Result<GroupKey, AggregateError> {
        let value = self.field(field, index)?;
        GroupKey::from_value(value).ok_or_else(|| {
            AggregateError::invalid(format!(
                "row {}: field '{}' cannot be used as a key ({})",
                index, field, value
            ))
        })
    }

    /// Read a date field
    ///
    /// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps.
    pub fn date(&self, field: &str, index: usize) -> Result<NaiveDate, AggregateError> {
        let raw = self.text(field, index)?;
        parse_date(raw).ok_or_else(|| {
            AggregateError::invalid(format!(
                "row {}: field '{}' is not a date ({})",
                index, field, raw
            ))
        })
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// A single field value used to partition rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Int(i64),
    Text(String),
}

impl GroupKey {
    /// Convert a JSON value into a key
    ///
    /// Integers and strings only; floats, booleans, arrays and objects
    /// have no stable key form.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Int),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for GroupKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for GroupKey {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

/// Number of rows observed for a key (0 when synthesized)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedCount {
    pub key: GroupKey,
    pub count: u64,
}

impl AggregatedCount {
    pub fn new(key: impl Into<GroupKey>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// One outer group with its per-inner-key counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedGroup {
    pub key: GroupKey,
    pub members: Vec<AggregatedCount>,
}

impl NestedGroup {
    pub fn new(key: impl Into<GroupKey>, members: Vec<AggregatedCount>) -> Self {
        Self {
            key: key.into(),
            members,
        }
    }

    /// Sum of member counts
    pub fn total(&self) -> u64 {
        self.members.iter().map(|m| m.count).sum()
    }

    pub fn count_of(&self, key: &GroupKey) -> Option<u64> {
        self.members.iter().find(|m| &m.key == key).map(|m| m.count)
    }
}

/// One `(outer, inner) -> count` record of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub outer: GroupKey,
    pub inner: GroupKey,
    pub count: u64,
}

impl GridCell {
    pub fn new(outer: impl Into<GroupKey>, inner: impl Into<GroupKey>, count: u64) -> Self {
        Self {
            outer: outer.into(),
            inner: inner.into(),
            count,
        }
    }
}

/// Grouped bar chart data written by the `lines` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinesReport {
    pub version: String,
    pub outer_field: String,
    pub inner_field: String,

    /// Kept inner keys, highest count first
    pub top: Vec<GroupKey>,

    /// Groups after other-collapsing
    pub groups: Vec<NestedGroup>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Dense heatmap grid written by the `heatmap` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapReport {
    pub version: String,
    pub outer_field: String,
    pub date_field: String,
    pub start_year: i64,
    pub end_year: i64,

    /// Outer keys in ascending order (y axis domain)
    pub outer_keys: Vec<GroupKey>,

    pub cells: Vec<GridCell>,

    /// Upper bound of the colour domain `[0, max_count]`
    pub max_count: u64,

    pub generated_at: String,
}

/// Any report this crate writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Lines(LinesReport),
    Heatmap(HeatmapReport),
}

impl Report {
    pub fn version(&self) -> &str {
        match self {
            Self::Lines(r) => &r.version,
            Self::Heatmap(r) => &r.version,
        }
    }

    pub fn generated_at(&self) -> &str {
        match self {
            Self::Lines(r) => &r.generated_at,
            Self::Heatmap(r) => &r.generated_at,
        }
    }
}
