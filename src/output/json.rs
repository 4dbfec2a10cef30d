//! JSON report writer and reader.

use crate::parser::schema::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// Parent directories are created when missing.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = Report::Lines(lines_report);
/// write_report(&report, "lines.json")?;
/// ```
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &Report) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Read a report from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (I/O errors share one variant)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: Report = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: version {}, generated {}",
        report.version(),
        report.generated_at()
    );

    Ok(report)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{GridCell, GroupKey, HeatmapReport};
    use tempfile::NamedTempFile;

    fn create_test_report() -> Report {
        Report::Heatmap(HeatmapReport {
            version: "1.0.0".to_string(),
            outer_field: "Arrond_Nom".to_string(),
            date_field: "Date_Plantation".to_string(),
            start_year: 2010,
            end_year: 2011,
            outer_keys: vec![GroupKey::from("Verdun")],
            cells: vec![
                GridCell::new("Verdun", 2010, 2),
                GridCell::new("Verdun", 2011, 0),
            ],
            max_count: 2,
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        })
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_report_to_string() {
        let json = report_to_string(&create_test_report()).unwrap();
        assert!(json.contains("\"kind\": \"heatmap\""));
        assert!(json.contains("\"Verdun\""));
    }

    #[test]
    fn test_read_report_rejects_other_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), r#"{"kind": "scatter"}"#).unwrap();

        let result = read_report(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&create_test_report(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
