//! Chart Prep
//!
//! Tabular aggregation helpers that turn flat rows into chart-ready data:
//! grouped counts with a top-N "Other" bucket for grouped bar charts, and
//! zero-filled year grids for heatmaps.
//!
//! This crate provides the core implementation for the
//! `chart-prep` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! chart-prep lines --input lines.json --top 5 --summary
//! chart-prep heatmap --input trees.json --start 2010 --end 2020
//! ```
//!
//! As a library, the pipeline stages live in [`aggregator`] and work on
//! [`parser::Row`] collections without touching the filesystem.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
