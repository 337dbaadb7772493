//! Core types for the SPADIE tournament schedule.
//!
//! This crate provides everything the `spadie` CLI renders:
//! - `Tournament` records and the `Dataset` loader
//! - the filter engine, unique-date extraction and date grouping
//! - display labels and the name-derived `Category`
//! - `ScheduleView`, which owns the filter state and recomputes views

pub mod category;
pub mod config;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod filter;
pub mod group;
pub mod labels;
pub mod locale;
pub mod schedule;
pub mod tournament;

#[cfg(test)]
mod test_support;

pub use category::{Category, CategoryColor};
pub use dataset::Dataset;
pub use error::{ScheduleError, ScheduleResult};
pub use filter::FilterState;
pub use group::{DateGroup, DateGroups};
pub use locale::Locale;
pub use schedule::{ScheduleSnapshot, ScheduleView};
pub use tournament::Tournament;
