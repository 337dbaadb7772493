//! Grouping of tournaments into ordered per-date sections.

use crate::tournament::Tournament;

/// All tournaments sharing one date label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: String,
    pub tournaments: Vec<Tournament>,
}

/// Tournaments partitioned by date.
///
/// Groups keep the order in which each date first appears in the input,
/// which is also the order sections are rendered in. This is not the
/// sorted unique-date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateGroups {
    groups: Vec<DateGroup>,
}

impl DateGroups {
    pub fn iter(&self) -> std::slice::Iter<'_, DateGroup> {
        self.groups.iter()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<&DateGroup> {
        self.groups.iter().find(|g| g.date == date)
    }

    /// Number of tournaments across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.tournaments.len()).sum()
    }

    pub fn into_vec(self) -> Vec<DateGroup> {
        self.groups
    }
}

impl<'a> IntoIterator for &'a DateGroups {
    type Item = &'a DateGroup;
    type IntoIter = std::slice::Iter<'a, DateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `records` by date, preserving input order within and across groups.
pub fn group_by_date(records: &[Tournament]) -> DateGroups {
    let mut groups: Vec<DateGroup> = Vec::new();

    for tournament in records {
        match groups.iter_mut().find(|g| g.date == tournament.date) {
            Some(group) => group.tournaments.push(tournament.clone()),
            None => groups.push(DateGroup {
                date: tournament.date.clone(),
                tournaments: vec![tournament.clone()],
            }),
        }
    }

    DateGroups { groups }
}
