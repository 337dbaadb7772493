//! Loading the tournament list.
//!
//! The schedule ships with a bundled JSON dataset. A JSON file with the same
//! shape (an array of tournament objects) can be loaded instead.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ScheduleError, ScheduleResult};
use crate::tournament::Tournament;

const BUNDLED_JSON: &str = include_str!("../data/tournaments.json");

/// Where a dataset was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
    Inline,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => write!(f, "bundled schedule"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Inline => write!(f, "inline data"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    source: DatasetSource,
    tournaments: Vec<Tournament>,
}

impl Dataset {
    pub fn bundled() -> ScheduleResult<Self> {
        Self::parse(BUNDLED_JSON, DatasetSource::Bundled)
    }

    pub fn from_path(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, DatasetSource::File(path.to_path_buf()))
    }

    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        Self::parse(json, DatasetSource::Inline)
    }

    /// Load `path` when given, the bundled dataset otherwise.
    pub fn load(path: Option<&Path>) -> ScheduleResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    fn parse(json: &str, source: DatasetSource) -> ScheduleResult<Self> {
        let tournaments: Vec<Tournament> = serde_json::from_str(json)
            .map_err(|e| ScheduleError::Dataset(format!("{}: {}", source, e)))?;

        log::info!("Loaded {} tournaments from {}", tournaments.len(), source);
        warn_duplicate_ids(&tournaments);

        Ok(Dataset { source, tournaments })
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn into_tournaments(self) -> Vec<Tournament> {
        self.tournaments
    }
}

/// Ids are expected to be unique but the schedule still renders duplicates.
fn warn_duplicate_ids(tournaments: &[Tournament]) {
    let mut seen = HashSet::new();
    for t in tournaments {
        if !seen.insert(t.id.as_str()) {
            log::warn!("Duplicate tournament id '{}' ({})", t.id, t.name);
        }
    }
}
