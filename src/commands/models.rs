use crate::utils::config::{HeatmapConfig, LinesConfig};
use std::path::PathBuf;

/// Arguments for the lines command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct LinesArgs {
    /// Input JSON rows
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Field names and top-N size
    pub config: LinesConfig,

    /// Normalize the inner (player) names before counting
    pub clean_names: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for LinesArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lines.json"),
            output: PathBuf::from("lines-report.json"),
            config: LinesConfig::default(),
            clean_names: true,
            print_summary: false,
        }
    }
}

/// Arguments for the heatmap command
#[derive(Debug, Clone)]
pub struct HeatmapArgs {
    /// Input JSON rows
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Field names and year range
    pub config: HeatmapConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for HeatmapArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("trees.json"),
            output: PathBuf::from("heatmap-report.json"),
            config: HeatmapConfig::default(),
            print_summary: false,
        }
    }
}
