//! Error types for the SPADIE schedule.

use thiserror::Error;

/// Errors that can occur while loading the schedule.
///
/// Filtering, grouping and label formatting never fail; only reading the
/// configuration and the dataset can.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
