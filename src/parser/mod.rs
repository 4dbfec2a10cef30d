//! Row loading and schema definitions.
//!
//! This module handles:
//! - Reading JSON datasets into rows
//! - Typed field access (keys, dates)
//! - Defining the aggregate and report schema

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_rows, parse_rows};
pub use schema::{
    AggregatedCount, GridCell, GroupKey, HeatmapReport, LinesReport, NestedGroup, Report, Row,
};
