//! Header-row heuristics for sheets whose first row may or may not be a
//! column title. Callers only ever test the first row or item.

/// Substrings that mark a label/value header row (English and Korean).
const LABEL_VALUE_KEYWORDS: &[&str] = &["label", "value", "항목", "값", "지표"];

/// Exact titles used for a university column.
const UNIVERSITY_KEYWORDS: &[&str] = &["대학", "대학명", "university", "학교"];

/// True when a label/value pair looks like the sheet's header row.
pub fn is_label_value_header(label: &str, value: &str) -> bool {
    let joined = format!("{label} {value}").to_lowercase();
    LABEL_VALUE_KEYWORDS.iter().any(|k| joined.contains(k))
}

/// True when a single cell is a university column title.
pub fn is_university_header(cell: &str) -> bool {
    let normalized = cell.trim().to_lowercase();
    UNIVERSITY_KEYWORDS.iter().any(|k| normalized == *k)
}
