use crate::output::{read_report, report_to_string};
use crate::parser::schema::Report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
///
/// With `print_json` the parsed report is echoed back as pretty JSON.
pub fn validate_report_file(file_path: PathBuf, print_json: bool) -> Result<Report> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version() != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported schema version {} (expected {})",
            report.version(),
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version());
    println!("  Generated: {}", report.generated_at());

    match &report {
        Report::Lines(r) => {
            println!("  Kind: lines ({} per {})", r.inner_field, r.outer_field);
            println!("  Top keys: {}", r.top.len());
            println!("  Groups: {}", r.groups.len());
        }
        Report::Heatmap(r) => {
            println!("  Kind: heatmap ({} by year of {})", r.outer_field, r.date_field);
            println!("  Years: {}-{}", r.start_year, r.end_year);
            println!("  Cells: {}", r.cells.len());
            println!("  Max count: {}", r.max_count);
        }
    }

    if print_json {
        println!();
        println!("{}", report_to_string(&report)?);
    }

    Ok(report)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Chart Prep Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure (kind = \"lines\"):");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  outer_field: string      - Grouping field (e.g., 'Act')");
        println!("  inner_field: string      - Counted field (e.g., 'Player')");
        println!("  top: array               - Kept keys, highest count first");
        println!("  groups: array            - One entry per outer key");
        println!("    key: string|number     - Outer key");
        println!("    members: array         - {{ key, count }}, 'Other' last");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!();
        println!("Schema Structure (kind = \"heatmap\"):");
        println!("  version: string          - Schema version");
        println!("  outer_field: string      - Row field (e.g., 'Arrond_Nom')");
        println!("  date_field: string       - Date field (e.g., 'Date_Plantation')");
        println!("  start_year, end_year     - Inclusive year range");
        println!("  outer_keys: array        - Row keys in ascending order");
        println!("  cells: array             - {{ outer, inner, count }} for every pair");
        println!("  max_count: number        - Colour domain upper bound");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Chart Prep v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Tabular aggregation for grouped bar charts and heatmaps.");
}
