//! Recap report files.
//!
//! Reports are pretty-printed camelCase JSON. Writing serializes in memory
//! first, so a serialization failure never leaves a truncated file behind.

use crate::parser::schema::RecapReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Destination file; missing parent directories are created
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(report: &RecapReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_output_path(output_path)?;

    let json = report_to_string(report)?;
    ensure_parent_dir(output_path)?;
    fs::write(output_path, &json)?;

    info!(
        "Wrote {} report for {} ({} bytes) to {}",
        report.year,
        report.login,
        json.len(),
        output_path.display()
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &RecapReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Read a report written by [`write_report`]
///
/// **Public** - used by the grid and validate commands
///
/// # Errors
/// * `OutputError::ReadFailed` - File missing or unreadable
/// * `OutputError::InvalidReport` - Contents are not a recap report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<RecapReport, OutputError> {
    let path = input_path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| OutputError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let report: RecapReport =
        serde_json::from_str(&contents).map_err(|source| OutputError::InvalidReport {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded report v{} for {} / {} from {}",
        report.version,
        report.login,
        report.year,
        path.display()
    );

    Ok(report)
}

fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }

    debug!("Creating parent directories: {}", parent.display());
    fs::create_dir_all(parent).map_err(|e| {
        OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_missing_file_is_a_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = read_report(&path).unwrap_err();

        assert!(matches!(err, OutputError::ReadFailed { .. }));
        let message = err.to_string();
        assert!(message.starts_with("Failed to read "), "{}", message);
        assert!(message.contains("missing.json"), "{}", message);
    }

    #[test]
    fn test_read_non_report_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("other.json");
        fs::write(&path, r#"{"hello": "world"}"#).unwrap();

        let err = read_report(&path).unwrap_err();

        assert!(matches!(err, OutputError::InvalidReport { .. }));
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("recap.json")).is_ok());
    }
}
