//! Date and free-text filtering of tournament lists.

use crate::tournament::Tournament;

/// User-controlled filter state.
///
/// An empty string means "no filter" for either field. Both fields can be
/// set or cleared at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_date: String,
    pub search_term: String,
}

impl FilterState {
    pub fn new(selected_date: impl Into<String>, search_term: impl Into<String>) -> Self {
        FilterState {
            selected_date: selected_date.into(),
            search_term: search_term.into(),
        }
    }

    /// Whether any filter would drop records
    pub fn is_active(&self) -> bool {
        !self.selected_date.is_empty() || !self.search_term.is_empty()
    }

    pub fn apply(&self, records: &[Tournament]) -> Vec<Tournament> {
        filter(records, &self.selected_date, &self.search_term)
    }
}

/// Return the records matching both the date filter and the search term.
///
/// - `selected_date` keeps records whose `date` equals it exactly.
/// - `search_term` keeps records whose `name` or `id` contains it,
///   ignoring case.
///
/// Empty strings disable the corresponding filter. Relative order of the
/// input is preserved and an empty result is valid.
pub fn filter(records: &[Tournament], selected_date: &str, search_term: &str) -> Vec<Tournament> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .filter(|t| selected_date.is_empty() || t.date == selected_date)
        .filter(|t| needle.is_empty() || t.matches_search(&needle))
        .cloned()
        .collect()
}
