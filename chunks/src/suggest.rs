//! Autocomplete filtering for the free-text bot selector.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

/// Candidates containing `input` case-insensitively.
///
/// A blank input shows every candidate. When nothing matches, the full list
/// is returned so the dropdown never collapses to nothing.
#[must_use]
pub fn filter_suggestions<'a>(candidates: &'a [String], input: &str) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return candidates.iter().map(String::as_str).collect();
    }
    let matches: Vec<&str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect();
    if matches.is_empty() {
        return candidates.iter().map(String::as_str).collect();
    }
    matches
}

/// Exact (case-insensitive) candidate for a submitted value, if any.
#[must_use]
pub fn resolve_candidate<'a>(candidates: &'a [String], input: &str) -> Option<&'a str> {
    let needle = input.trim();
    candidates
        .iter()
        .map(String::as_str)
        .find(|c| c.eq_ignore_ascii_case(needle))
}
