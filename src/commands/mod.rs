//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod heatmap;
pub mod lines;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use heatmap::{build_heatmap_report, execute_heatmap, heatmap_summary, validate_heatmap_args};
pub use lines::{build_lines_report, execute_lines, lines_summary, validate_lines_args};
pub use models::{HeatmapArgs, LinesArgs};
pub use utils::{display_schema, display_version, validate_report_file};
