use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, warn};

use crate::error::{Result, ToolError};
use crate::model::{RosterEntry, Tab};

/// Zero-based column holding the person's name in the roster.
const ROSTER_NAME_COLUMN: usize = 1;
/// Zero-based column holding the team label in the roster.
const ROSTER_TEAM_COLUMN: usize = 2;

/// Reads the sheets of a workbook whose label passes `select` as text grids.
///
/// A sheet that fails to parse is logged and skipped; failing to open the
/// workbook itself is an error.
pub fn read_tabs<F>(path: &Path, mut select: F) -> Result<Vec<Tab>>
where
    F: FnMut(&str) -> bool,
{
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let labels = workbook.sheet_names().to_owned();

    let mut tabs = Vec::new();
    for label in labels {
        if !select(&label) {
            debug!(%label, "not a person tab");
            continue;
        }
        match read_sheet(&mut workbook, &label) {
            Ok(range) => {
                let rows = range_to_grid(&range);
                tabs.push(Tab::new(label, rows));
            }
            Err(error) => warn!(%label, %error, "failed to read sheet; tab skipped"),
        }
    }
    Ok(tabs)
}

/// Reads the roster from the first sheet of `path`.
///
/// The first row is a header. Each following row carries the name in
/// column B and the team in column C; rows without a name are ignored.
pub fn read_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    if !path.is_file() {
        return Err(ToolError::MissingRoster(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("roster workbook has no sheets".into()))?;
    let range = read_sheet(&mut workbook, &sheet)?;

    let entries = range_to_grid(&range)
        .into_iter()
        .skip(1)
        .filter_map(|row| {
            let name = cell_text(&row, ROSTER_NAME_COLUMN);
            if name.is_empty() {
                return None;
            }
            Some(RosterEntry::new(name, cell_text(&row, ROSTER_TEAM_COLUMN)))
        })
        .collect();
    Ok(entries)
}

fn read_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

/// Converts a range into a grid anchored at A1, so leading empty rows and
/// columns keep their position.
fn range_to_grid(range: &Range<DataType>) -> Vec<Vec<String>> {
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let mut grid: Vec<Vec<String>> = vec![Vec::new(); row_offset as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); col_offset as usize];
        cells.extend(row.iter().map(|cell| cell_to_string(Some(cell))));
        grid.push(cells);
    }
    grid
}

fn cell_text(row: &[String], column: usize) -> String {
    row.get(column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
