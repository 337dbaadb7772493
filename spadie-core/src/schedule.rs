//! The schedule view: the full tournament list plus the user's filter state.

use crate::dates::unique_dates;
use crate::filter::FilterState;
use crate::group::{DateGroups, group_by_date};
use crate::tournament::Tournament;

/// Everything the presenter needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Sorted distinct dates of the full list, for the filter controls
    pub dates: Vec<String>,
    pub filtered: Vec<Tournament>,
    pub groups: DateGroups,
}

impl ScheduleSnapshot {
    /// True when nothing matches the current filters
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Owns the tournament list and the filter state.
///
/// Derived views are recomputed from the current inputs on every call.
#[derive(Debug, Clone, Default)]
pub struct ScheduleView {
    tournaments: Vec<Tournament>,
    filter: FilterState,
}

impl ScheduleView {
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        ScheduleView {
            tournaments,
            filter: FilterState::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_selected_date(&mut self, date: impl Into<String>) {
        self.filter.selected_date = date.into();
        log::debug!("Date filter: {:?}", self.filter.selected_date);
    }

    pub fn clear_selected_date(&mut self) {
        self.set_selected_date(String::new());
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        log::debug!("Search term: {:?}", self.filter.search_term);
    }

    pub fn clear_search_term(&mut self) {
        self.set_search_term(String::new());
    }

    /// Clear both filters
    pub fn reset(&mut self) {
        self.filter = FilterState::default();
    }

    pub fn unique_dates(&self) -> Vec<String> {
        unique_dates(&self.tournaments)
    }

    pub fn filtered(&self) -> Vec<Tournament> {
        self.filter.apply(&self.tournaments)
    }

    pub fn grouped(&self) -> DateGroups {
        group_by_date(&self.filtered())
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        let filtered = self.filtered();
        let groups = group_by_date(&filtered);

        ScheduleSnapshot {
            dates: self.unique_dates(),
            filtered,
            groups,
        }
    }

    /// First tournament with exactly this id, ignoring filters.
    pub fn find(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }
}
