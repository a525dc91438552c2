use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::SummaryReport;

/// Writes the report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &SummaryReport) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)?;
    fs::write(path, json_string)?;
    Ok(())
}
