use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::{from_cents, to_cents};

/// Person name → performance value. A key is present only when a numeric
/// value was actually found for that person; absence is not zero.
pub type PersonValueMap = BTreeMap<String, f64>;

/// One sheet of a source workbook, detached from any spreadsheet library.
///
/// Rows may be ragged and cells may be empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Sheet label as shown on the workbook tab.
    pub label: String,
    /// Cell text in row-major order.
    pub rows: Vec<Vec<String>>,
}

impl Tab {
    /// Creates a new tab from a label and a text grid.
    pub fn new(label: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }
}

/// A person listed in the roster workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub team: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}

/// A single line of the summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 1-based, dense sequence number.
    pub index: u32,
    pub name: String,
    /// Team taken from the roster, never from the source workbooks.
    pub team: String,
    /// Merged value; every contribution was already rounded to 2 decimals.
    pub value: f64,
    pub remark: String,
}

/// Ordered report rows plus their total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub rows: Vec<ReportRow>,
    pub total: f64,
}

impl SummaryReport {
    /// Builds a report from reconciled rows, computing the total in cents.
    pub fn new(rows: Vec<ReportRow>) -> Self {
        let total = from_cents(rows.iter().map(|row| to_cents(row.value)).sum());
        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
