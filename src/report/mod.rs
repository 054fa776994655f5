pub mod json;
pub mod table;

use crate::error::LexiscoreError;
use crate::types::config::ReportFormat;
use crate::types::report::FileReport;
use std::path::Path;

pub fn render(files: &[FileReport], format: ReportFormat) -> Result<String, LexiscoreError> {
    match format {
        ReportFormat::Csv => table::to_csv(files).map_err(LexiscoreError::Csv),
        ReportFormat::Json => json::to_json(files).map_err(LexiscoreError::Json),
    }
}

/// Renders and writes the whole report in one go, replacing any previous file.
pub fn write_report(
    path: &Path,
    files: &[FileReport],
    format: ReportFormat,
) -> Result<(), LexiscoreError> {
    let rendered = render(files, format)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
