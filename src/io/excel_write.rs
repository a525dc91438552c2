use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::Result;
use crate::model::{ReportRow, SummaryReport};

/// Name of the single sheet in the output workbook.
pub const SHEET_NAME: &str = "Sheet1";
/// Column headers of the report table.
pub const HEADERS: [&str; 5] = ["序号", "姓名", "班组", "工作量", "备注"];
/// Label written in front of the total.
pub const TOTAL_LABEL: &str = "合计";

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;
const VALUE_COLUMN: u16 = 3;
const LAST_COLUMN: u16 = HEADERS.len() as u16 - 1;

const TITLE_HEIGHT: f64 = 30.0;
const INDEX_COLUMN_WIDTH: f64 = 10.0;
const TEXT_COLUMN_WIDTH: f64 = 20.0;

struct ReportFormats {
    title: Format,
    row: Format,
    total: Format,
}

impl ReportFormats {
    fn new() -> Self {
        let bordered = Format::new()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            title: bordered.clone().set_font_size(14).set_bold(),
            row: bordered.set_font_size(12),
            total: Format::new()
                .set_font_size(14)
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
        }
    }
}

/// Writes the summary workbook to `path`.
///
/// Layout: a merged title across the table width, the header row, one row
/// per report line, and a totals row whose value is a `SUM` formula over
/// the value column.
pub fn write_report(path: &Path, report: &SummaryReport, title: &str) -> Result<()> {
    let formats = ReportFormats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    worksheet.set_column_width(0, INDEX_COLUMN_WIDTH)?;
    for col in 1..=LAST_COLUMN {
        worksheet.set_column_width(col, TEXT_COLUMN_WIDTH)?;
    }

    worksheet.merge_range(TITLE_ROW, 0, TITLE_ROW, LAST_COLUMN, title, &formats.title)?;
    worksheet.set_row_height(TITLE_ROW, TITLE_HEIGHT)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, *header, &formats.title)?;
    }

    for (offset, row) in report.rows.iter().enumerate() {
        write_row(worksheet, FIRST_DATA_ROW + offset as u32, row, &formats.row)?;
    }

    write_total(worksheet, report, &formats.total)?;

    workbook.save(path)?;
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row_idx: u32,
    row: &ReportRow,
    format: &Format,
) -> Result<()> {
    worksheet.write_number_with_format(row_idx, 0, row.index, format)?;
    worksheet.write_string_with_format(row_idx, 1, &row.name, format)?;
    worksheet.write_string_with_format(row_idx, 2, &row.team, format)?;
    worksheet.write_number_with_format(row_idx, VALUE_COLUMN, row.value, format)?;
    worksheet.write_string_with_format(row_idx, 4, &row.remark, format)?;
    Ok(())
}

fn write_total(
    worksheet: &mut Worksheet,
    report: &SummaryReport,
    format: &Format,
) -> Result<()> {
    let total_row = FIRST_DATA_ROW + report.rows.len() as u32;

    for col in 0..VALUE_COLUMN - 1 {
        worksheet.write_string_with_format(total_row, col, "", format)?;
    }
    worksheet.write_string_with_format(total_row, VALUE_COLUMN - 1, TOTAL_LABEL, format)?;

    let formula = sum_formula(report.rows.len());
    worksheet.write_formula_with_format(total_row, VALUE_COLUMN, formula.as_str(), format)?;
    worksheet.write_string_with_format(total_row, LAST_COLUMN, "", format)?;
    Ok(())
}

/// `SUM` over the value column of `row_count` data rows (1-based A1 notation).
///
/// With no data rows the totals row sits directly under the header, so any
/// range would include the formula's own cell; a constant zero is written
/// instead.
pub fn sum_formula(row_count: usize) -> String {
    if row_count == 0 {
        return "=0".to_string();
    }
    let first = FIRST_DATA_ROW + 1;
    let last = FIRST_DATA_ROW + row_count as u32;
    format!("=SUM(D{first}:D{last})")
}
