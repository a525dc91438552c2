use crate::model::{PersonValueMap, ReportRow, RosterEntry};

/// Orders the merged values by the roster and assigns sequence numbers.
///
/// The roster decides both the order of the rows and each person's team.
/// An entry is emitted only when the person has a merged value
/// ([`merged_value`]) and that value is not exactly zero
/// ([`is_reportable`]). Sequence numbers start at 1 and count emitted rows
/// only.
pub fn reconcile(merged: &PersonValueMap, roster: &[RosterEntry]) -> Vec<ReportRow> {
    roster
        .iter()
        .filter_map(|entry| merged_value(merged, entry).map(|value| (entry, value)))
        .filter(|(_, value)| is_reportable(*value))
        .zip(1u32..)
        .map(|((entry, value), index)| ReportRow {
            index,
            name: entry.name.clone(),
            team: entry.team.clone(),
            value,
            remark: String::new(),
        })
        .collect()
}

/// Looks up the merged value for a roster entry. `None` when no source
/// workbook had a qualifying tab for this person.
pub fn merged_value(merged: &PersonValueMap, entry: &RosterEntry) -> Option<f64> {
    merged.get(&entry.name).copied()
}

/// Zero-contribution rows are not shown.
pub fn is_reportable(value: f64) -> bool {
    value != 0.0
}
