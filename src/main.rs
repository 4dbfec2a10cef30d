//! Chart Prep CLI
//!
//! Aggregates tabular JSON rows into grouped-bar and heatmap reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use chart_prep::commands::{
    display_schema, display_version, execute_heatmap, execute_lines, validate_heatmap_args,
    validate_lines_args, validate_report_file, HeatmapArgs, LinesArgs,
};
use chart_prep::utils::config::{load_config, PipelineConfig};

/// Chart Prep - tabular aggregation for charts
#[derive(Parser, Debug)]
#[command(name = "chart-prep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pipeline config file (TOML); flags override its values
    #[arg(short, long, global = true, env = "CHART_PREP_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Count lines per act and player, keeping the top players
    Lines {
        /// Input JSON rows
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "lines-report.json")]
        output: PathBuf,

        /// Number of players kept before collapsing into "Other"
        #[arg(long)]
        top: Option<usize>,

        /// Outer grouping field
        #[arg(long)]
        outer_field: Option<String>,

        /// Inner counted field
        #[arg(long)]
        inner_field: Option<String>,

        /// Keep names exactly as they appear in the input
        #[arg(long)]
        raw_names: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Count plantations per neighborhood and year, zero-filled
    Heatmap {
        /// Input JSON rows
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "heatmap-report.json")]
        output: PathBuf,

        /// First year (inclusive)
        #[arg(long)]
        start: Option<i64>,

        /// Last year (inclusive)
        #[arg(long)]
        end: Option<i64>,

        /// Row grouping field
        #[arg(long)]
        outer_field: Option<String>,

        /// Date field whose year is the column
        #[arg(long)]
        date_field: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Print the parsed report as JSON
        #[arg(long)]
        print: bool,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let pipeline = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Lines {
            input,
            output,
            top,
            outer_field,
            inner_field,
            raw_names,
            summary,
        } => {
            let mut config = pipeline.lines;
            if let Some(n) = top {
                config.top_n = n;
            }
            if let Some(field) = outer_field {
                config.outer_field = field;
            }
            if let Some(field) = inner_field {
                config.inner_field = field;
            }

            let args = LinesArgs {
                input,
                output,
                config,
                clean_names: !raw_names,
                print_summary: summary,
            };

            validate_lines_args(&args)?;
            execute_lines(args)?;
        }

        Commands::Heatmap {
            input,
            output,
            start,
            end,
            outer_field,
            date_field,
            summary,
        } => {
            let mut config = pipeline.heatmap;
            if let Some(year) = start {
                config.start_year = year;
            }
            if let Some(year) = end {
                config.end_year = year;
            }
            if let Some(field) = outer_field {
                config.outer_field = field;
            }
            if let Some(field) = date_field {
                config.date_field = field;
            }

            let args = HeatmapArgs {
                input,
                output,
                config,
                print_summary: summary,
            };

            validate_heatmap_args(&args)?;
            execute_heatmap(args)?;
        }

        Commands::Validate { file, print } => {
            validate_report_file(file, print)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
