//! Heatmap command implementation.
//!
//! The heatmap command:
//! 1. Loads plantation rows
//! 2. Keeps the rows inside the year range
//! 3. Counts plantations per neighborhood and year
//! 4. Fills missing (neighborhood, year) pairs with zeros
//! 5. Writes the report

use super::models::HeatmapArgs;
use crate::aggregator::{
    cell_distribution, densify, distinct_keys, filter_years, sorted_keys, summarize_cells,
    year_range, KeySource,
};
use crate::output::write_report;
use crate::parser::load_rows;
use crate::parser::schema::{HeatmapReport, Report, Row};
use crate::render::{render_heatmap, TextRenderer};
use crate::utils::config::{HeatmapConfig, SCHEMA_VERSION};
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the heatmap command
///
/// **Public** - main entry point called from main.rs
pub fn execute_heatmap(args: HeatmapArgs) -> Result<HeatmapReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading rows...");
    let rows = load_rows(&args.input)
        .with_context(|| format!("Failed to load rows from {}", args.input.display()))?;

    info!(
        "Step 2/3: Aggregating {} rows over {}-{}...",
        rows.len(),
        args.config.start_year,
        args.config.end_year
    );
    let report =
        build_heatmap_report(&rows, &args.config).context("Failed to aggregate plantations")?;

    info!("Cell distribution: {}", cell_distribution(&report.cells).summary());

    info!("Step 3/3: Writing report...");
    write_report(&Report::Heatmap(report.clone()), &args.output)
        .context("Failed to write heatmap report")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", heatmap_summary(&report));
    }

    info!("Heatmap completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Run the heatmap pipeline over in-memory rows
///
/// Neighborhoods are taken from all rows, so one with no plantation in the
/// range still gets a row of zeros.
pub fn build_heatmap_report(
    rows: &[Row],
    config: &HeatmapConfig,
) -> Result<HeatmapReport, AggregateError> {
    let outer = KeySource::field(config.outer_field.as_str());
    let years = year_range(config.start_year, config.end_year)?;

    let outer_keys = sorted_keys(distinct_keys(rows, &outer)?);
    debug!("{} distinct '{}' values", outer_keys.len(), config.outer_field);

    let in_range = filter_years(rows, &config.date_field, config.start_year, config.end_year)?;
    let cells = summarize_cells(
        &in_range,
        &outer,
        &KeySource::year(config.date_field.as_str()),
    )?;
    let cells = densify(&cells, &outer_keys, &years)?;

    Ok(HeatmapReport {
        version: SCHEMA_VERSION.to_string(),
        outer_field: config.outer_field.clone(),
        date_field: config.date_field.clone(),
        start_year: config.start_year,
        end_year: config.end_year,
        max_count: cell_distribution(&cells).max_count,
        outer_keys,
        cells,
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Render a heatmap report as a terminal summary
pub fn heatmap_summary(report: &HeatmapReport) -> String {
    // year_range cannot fail on a report that was built from a valid range
    let columns = year_range(report.start_year, report.end_year).unwrap_or_default();

    let mut renderer = TextRenderer::new(format!(
        "{} per {} and year ({}-{})",
        report.date_field, report.outer_field, report.start_year, report.end_year
    ));
    render_heatmap(&mut renderer, &report.cells, &columns, &report.outer_keys);
    renderer.finish()
}

/// Validate heatmap arguments
pub fn validate_heatmap_args(args: &HeatmapArgs) -> Result<()> {
    if args.config.outer_field.is_empty() || args.config.date_field.is_empty() {
        anyhow::bail!("Field names cannot be empty");
    }

    if args.config.start_year > args.config.end_year {
        anyhow::bail!(
            "Start year {} is after end year {}",
            args.config.start_year,
            args.config.end_year
        );
    }

    Ok(())
}
