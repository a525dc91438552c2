use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::classify::is_person_label;
use crate::error::Result;
use crate::extract::{from_cents, last_numeric_value, round_to_cents, to_cents};
use crate::io::excel_read;
use crate::model::{PersonValueMap, Tab};

/// Builds the person → value mapping for the tabs of one workbook.
///
/// Tabs whose label is not a person name are ignored. A person tab without
/// any numeric cell is dropped from the result rather than recorded as zero.
pub fn aggregate_tabs<I>(tabs: I) -> PersonValueMap
where
    I: IntoIterator<Item = Tab>,
{
    let mut values = PersonValueMap::new();
    for tab in tabs {
        if !is_person_label(&tab.label) {
            continue;
        }
        match last_numeric_value(&tab.rows) {
            Some(value) => {
                let rounded = round_to_cents(value);
                debug!(label = %tab.label, value, rounded, "extracted value");
                values.insert(tab.label, rounded);
            }
            None => warn!(label = %tab.label, "no numeric value found; tab skipped"),
        }
    }
    values
}

/// Opens a source workbook and aggregates its person tabs.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn aggregate_file(path: &Path) -> Result<PersonValueMap> {
    let tabs = excel_read::read_tabs(path, is_person_label)?;
    let values = aggregate_tabs(tabs);
    debug!(person_count = values.len(), "workbook aggregated");
    Ok(values)
}

/// Sums per-file mappings into one.
///
/// A name missing from a file contributes nothing for that file; a name
/// missing from every file never appears. Values present with a literal
/// zero still take part in the sum.
///
/// Contributions are accumulated in whole cents, so the result does not
/// depend on file order and cancelling values sum to exactly zero.
pub fn merge<I>(maps: I) -> PersonValueMap
where
    I: IntoIterator<Item = PersonValueMap>,
{
    let mut cents: BTreeMap<String, i64> = BTreeMap::new();
    for values in maps {
        for (name, value) in values {
            *cents.entry(name).or_insert(0) += to_cents(value);
        }
    }
    cents
        .into_iter()
        .map(|(name, total)| (name, from_cents(total)))
        .collect()
}
