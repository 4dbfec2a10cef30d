//! Configuration and constants for the pipelines.
//!
//! Defaults live here as constants; a TOML file can override them and
//! CLI flags override the file.

use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of entities kept by the top-N ranker when nothing else is configured
pub const DEFAULT_TOP_N: usize = 5;

/// Label of the synthetic entry produced by other-collapsing
pub const OTHER_LABEL: &str = "Other";

// Default field names of the dialogue-line dataset
pub const PLAYER_FIELD: &str = "Player";
pub const ACT_FIELD: &str = "Act";

// Default field names of the tree-plantation dataset
pub const NEIGHBORHOOD_FIELD: &str = "Arrond_Nom";
pub const PLANTATION_DATE_FIELD: &str = "Date_Plantation";

// Wrapper keys accepted around a row array (`{"rows": [...]}`)
pub const ROW_FIELD_NAMES: &[&str] = &["rows", "data", "records"];

// Inclusive year range of the heatmap x axis
pub const DEFAULT_START_YEAR: i64 = 2010;
pub const DEFAULT_END_YEAR: i64 = 2020;

/// Settings of the `lines` pipeline (grouped bar chart)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinesConfig {
    pub outer_field: String,
    pub inner_field: String,
    pub top_n: usize,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            outer_field: ACT_FIELD.to_string(),
            inner_field: PLAYER_FIELD.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Settings of the `heatmap` pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub outer_field: String,
    pub date_field: String,
    pub start_year: i64,
    pub end_year: i64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            outer_field: NEIGHBORHOOD_FIELD.to_string(),
            date_field: PLANTATION_DATE_FIELD.to_string(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub lines: LinesConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,
}

/// Load a pipeline configuration from a TOML file
///
/// Sections and keys that are absent fall back to the defaults above.
///
/// # Example
/// ```ignore
/// let config = load_config("chart-prep.toml")?;
/// assert_eq!(config.lines.top_n, 5);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading pipeline config from: {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: PipelineConfig = toml::from_str(&contents)?;
    Ok(config)
}
