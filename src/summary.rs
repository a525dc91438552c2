use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{info, instrument, warn};

use crate::aggregate::{aggregate_file, merge};
use crate::error::Result;
use crate::io::{discover, excel_read, excel_write, json};
use crate::model::{PersonValueMap, SummaryReport};
use crate::reconcile::reconcile;

/// Default roster workbook name, looked up inside the source directory.
pub const DEFAULT_ROSTER_FILE: &str = "质检部花名册.xlsx";
/// Default output file name prefix.
pub const DEFAULT_OUTPUT_PREFIX: &str = "质检部工作量统计表";
/// Default department name used in the report title.
pub const DEFAULT_DEPARTMENT: &str = "质检部";

/// Settings for one summary run.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Directory scanned for source workbooks; the output lands here too.
    pub source_dir: PathBuf,
    pub roster_path: PathBuf,
    pub output_prefix: String,
    pub department: String,
    /// Any day of the month being reported.
    pub month: NaiveDate,
    /// Optional JSON copy of the report.
    pub json_path: Option<PathBuf>,
}

impl SummaryOptions {
    /// Options with the default names for `source_dir` and `month`.
    pub fn new(source_dir: impl Into<PathBuf>, month: NaiveDate) -> Self {
        let source_dir = source_dir.into();
        Self {
            roster_path: source_dir.join(DEFAULT_ROSTER_FILE),
            source_dir,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            month,
            json_path: None,
        }
    }

    /// `2024年3月`
    pub fn month_label(&self) -> String {
        format!("{}年{}月", self.month.year(), self.month.month())
    }

    pub fn title(&self) -> String {
        format!("{}{}工作量统计表", self.department, self.month_label())
    }

    pub fn output_path(&self) -> PathBuf {
        self.source_dir
            .join(format!("{}{}.xlsx", self.output_prefix, self.month_label()))
    }
}

/// Runs the whole pipeline and returns the absolute path of the written
/// workbook.
///
/// Unreadable source workbooks are logged and skipped. A missing roster or
/// a failure writing the output aborts the run before anything is saved.
/// The JSON copy is best effort: failing to write it is only logged.
#[instrument(
    level = "info",
    skip_all,
    fields(dir = %options.source_dir.display(), month = %options.month_label())
)]
pub fn summarize(options: &SummaryOptions) -> Result<PathBuf> {
    let roster = excel_read::read_roster(&options.roster_path)?;
    info!(entries = roster.len(), "loaded roster");

    let output = options.output_path();
    let exclude = [options.roster_path.clone(), output.clone()];
    let sources = discover::list_workbooks(&options.source_dir, &exclude)?;
    info!(file_count = sources.len(), "reading source workbooks");

    let merged = merge(sources.iter().filter_map(|path| read_source(path)));
    info!(person_count = merged.len(), "merged source values");

    let report = SummaryReport::new(reconcile(&merged, &roster));
    if report.is_empty() {
        warn!("no roster entry has a non-zero value; writing an empty report");
    }
    info!(row_count = report.rows.len(), total = report.total, "report reconciled");

    excel_write::write_report(&output, &report, &options.title())?;
    if let Some(json_path) = &options.json_path {
        if let Err(error) = json::write_report(json_path, &report) {
            warn!(path = %json_path.display(), %error, "failed to write JSON copy");
        }
    }

    let output = fs::canonicalize(&output)?;
    info!(output = %output.display(), "summary written");
    Ok(output)
}

fn read_source(path: &Path) -> Option<PersonValueMap> {
    match aggregate_file(path) {
        Ok(values) => Some(values),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read workbook; file skipped");
            None
        }
    }
}
