//! Tabular aggregation of rows into chart-ready structures.
//!
//! This module transforms loaded rows into:
//! - Normalized names
//! - Top-N rankings (ties by first-seen order)
//! - Nested outer/inner counts, optionally collapsed to "Other"
//! - Dense grids with zero-filled missing pairs
//! - Count distribution statistics
//!
//! Every function is pure and fails fast on the first invalid row.

mod counter;
pub mod collapse;
pub mod densify;
pub mod metrics;
pub mod normalize;
pub mod ranking;
pub mod select;
pub mod summarize;

// Re-export main types and functions
pub use collapse::collapse_others;
pub use densify::{densify, year_range};
pub use metrics::{cell_distribution, group_distribution, CountDistribution};
pub use normalize::{capitalize, clean_names};
pub use ranking::{count_keys, rank_counts, top_n};
pub use select::{distinct_keys, filter_years, sorted_keys, KeySource};
pub use summarize::{flatten_groups, summarize_cells, summarize_groups};
