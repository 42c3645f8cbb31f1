//! Identifier canonicalisation applied before every upstream call.

/// ISO country and currency codes are sent upper-cased.
pub fn iso_code(raw: &str) -> String {
    raw.to_uppercase()
}

/// Country names are lower-cased, then only the first character is capitalised.
///
/// Multi-word names keep lower-case words after the first
/// ("united kingdom" → "United kingdom"); the upstream match depends on it.
pub fn country_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
