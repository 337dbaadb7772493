pub mod browse;
pub mod config;
pub mod dates;
pub mod list;
pub mod show;

use spadie_core::config::EventInfo;
use spadie_core::{Locale, ScheduleView};

/// Loaded schedule plus the display settings every command needs.
pub struct Context {
    pub view: ScheduleView,
    pub event: EventInfo,
    pub locale: Locale,
}
