use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ToolError};

/// Extension of the workbooks picked up as sources.
pub const WORKBOOK_EXTENSION: &str = "xlsx";
/// Prefix of the lock files the spreadsheet editor leaves next to open workbooks.
pub const TEMP_FILE_PREFIX: &str = "~$";

/// Lists the source workbooks of a directory.
///
/// Only regular `.xlsx` files are returned; editor lock files and any path
/// listed in `exclude` are skipped. The result is sorted by file name.
pub fn list_workbooks(dir: &Path, exclude: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ToolError::MissingInput(dir.to_path_buf()));
    }

    let mut workbooks = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if !is_source_workbook(&path) {
            continue;
        }
        if exclude.iter().any(|excluded| same_file(excluded, &path)) {
            debug!(path = %path.display(), "excluded from sources");
            continue;
        }
        workbooks.push(path);
    }

    workbooks.sort();
    Ok(workbooks)
}

/// Returns `true` for `.xlsx` paths that are not editor lock files.
pub fn is_source_workbook(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(WORKBOOK_EXTENSION));
    let is_temp = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(TEMP_FILE_PREFIX));
    has_extension && !is_temp
}

fn same_file(lhs: &Path, rhs: &Path) -> bool {
    match (fs::canonicalize(lhs), fs::canonicalize(rhs)) {
        (Ok(lhs), Ok(rhs)) => lhs == rhs,
        _ => lhs == rhs,
    }
}
