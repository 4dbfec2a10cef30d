//! Lines command implementation.
//!
//! The lines command:
//! 1. Loads dialogue rows
//! 2. Normalizes player names
//! 3. Ranks the top-N players
//! 4. Summarizes line counts per act and player
//! 5. Collapses the remaining players into "Other"
//! 6. Writes the report

use super::models::LinesArgs;
use crate::aggregator::{
    clean_names, collapse_others, group_distribution, summarize_groups, top_n, KeySource,
};
use crate::output::write_report;
use crate::parser::schema::{GroupKey, LinesReport, Report, Row};
use crate::parser::load_rows;
use crate::render::{render_grouped_bars, TextRenderer};
use crate::utils::config::{LinesConfig, OTHER_LABEL, SCHEMA_VERSION};
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::time::Instant;

/// Upper bound accepted for `top_n`
const MAX_TOP_N: usize = 1000;

/// Execute the lines command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or parse failures
/// * Missing or mistyped fields in any row
/// * File write errors
pub fn execute_lines(args: LinesArgs) -> Result<LinesReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading rows...");
    let rows = load_rows(&args.input)
        .with_context(|| format!("Failed to load rows from {}", args.input.display()))?;

    info!("Step 2/3: Aggregating {} rows...", rows.len());
    let report = build_lines_report(&rows, &args.config, args.clean_names)
        .context("Failed to aggregate dialogue lines")?;

    let dist = group_distribution(&report.groups);
    if dist.is_empty() {
        warn!("No rows to count, the report has no groups");
    } else {
        info!("Line distribution: {}", dist.summary());
    }

    info!("Step 3/3: Writing report...");
    write_report(&Report::Lines(report.clone()), &args.output)
        .context("Failed to write lines report")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", lines_summary(&report));
    }

    info!("Lines completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Run the lines pipeline over in-memory rows
///
/// **Public** - the file-free core of `execute_lines`
pub fn build_lines_report(
    rows: &[Row],
    config: &LinesConfig,
    normalize: bool,
) -> Result<LinesReport, AggregateError> {
    let outer = KeySource::field(config.outer_field.as_str());
    let inner = KeySource::field(config.inner_field.as_str());

    let cleaned;
    let rows = if normalize {
        cleaned = clean_names(rows, &config.inner_field)?;
        &cleaned[..]
    } else {
        rows
    };

    let top = top_n(rows, &inner, config.top_n)?;
    debug!(
        "Top {}: {}",
        config.top_n,
        top.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );

    let groups = summarize_groups(rows, &outer, &inner)?;
    let groups = collapse_others(&groups, &top);

    Ok(LinesReport {
        version: SCHEMA_VERSION.to_string(),
        outer_field: config.outer_field.clone(),
        inner_field: config.inner_field.clone(),
        top,
        groups,
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Render a lines report as a terminal summary
pub fn lines_summary(report: &LinesReport) -> String {
    let mut legend = report.top.clone();
    legend.push(GroupKey::from(OTHER_LABEL));

    let mut renderer = TextRenderer::new(format!(
        "{} per {} (top {})",
        report.inner_field,
        report.outer_field,
        report.top.len()
    ));
    render_grouped_bars(&mut renderer, &report.groups, &legend);
    renderer.finish()
}

/// Validate lines arguments
///
/// **Public** - can be called before execute_lines for early validation
pub fn validate_lines_args(args: &LinesArgs) -> Result<()> {
    if args.config.outer_field.is_empty() || args.config.inner_field.is_empty() {
        anyhow::bail!("Field names cannot be empty");
    }

    if args.config.outer_field == args.config.inner_field {
        anyhow::bail!("Outer and inner fields must differ");
    }

    if args.config.top_n == 0 {
        anyhow::bail!("top_n must be greater than 0");
    }

    if args.config.top_n > MAX_TOP_N {
        anyhow::bail!("top_n is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}
