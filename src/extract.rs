//! Locating the performance figure inside a sheet of unknown shape.
//!
//! Authors lay out their sheets differently, but the authoritative figure
//! always sits in the bottom-right region. The search therefore walks the
//! grid backwards and takes the first cell whose entire trimmed text is a
//! number, skipping trailing blanks and annotation text along the way.

/// Parses a cell as a number.
///
/// Surrounding whitespace is ignored, but the remaining text must be a
/// number in full: `"合计:12"` is not a number. Non-finite values such as
/// `NaN` or `inf` are rejected.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns the last numeric value of a grid, scanning rows from the bottom
/// and cells from the right.
///
/// `None` means no cell in the grid is numeric; callers must not treat it
/// as zero.
pub fn last_numeric_value<R, C>(rows: &[R]) -> Option<f64>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    rows.iter()
        .rev()
        .flat_map(|row| row.as_ref().iter().rev())
        .find_map(|cell| parse_numeric(cell.as_ref()))
}

/// Rounds to 2 decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    from_cents(to_cents(value))
}

/// Whole cents of `value`, halves away from zero.
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}
