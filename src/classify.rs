use once_cell::sync::Lazy;
use regex::Regex;

// Two to four Han characters and nothing else.
static PERSON_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Han}{2,4}$").expect("person label pattern compiles"));

/// Returns `true` when a sheet label looks like a person's name.
///
/// Workbooks mix per-person tabs with cover sheets and section headers, and
/// the only reliable signal is the label itself: a name is written as 2 to 4
/// CJK Han characters. Digits, Latin letters, punctuation or whitespace
/// anywhere in the label disqualify it.
pub fn is_person_label(label: &str) -> bool {
    PERSON_LABEL.is_match(label)
}
