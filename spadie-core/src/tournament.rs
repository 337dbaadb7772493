//! Tournament records as they appear in the schedule dataset.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Placeholder used by the dataset for "not applicable" fields.
pub const SENTINEL: &str = "-";

fn sentinel() -> String {
    SENTINEL.to_string()
}

/// Treat `null` like a missing field.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat `null` like a missing field that defaults to the sentinel.
fn nullable_sentinel<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(sentinel))
}

/// A single tournament on the schedule.
///
/// Records are never mutated after loading. Missing identity fields
/// (`id`, `name`, `date`) become empty strings, and missing detail fields
/// become the `"-"` sentinel so the label functions can render them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tournament {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Date label, compared by equality only
    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,

    #[serde(default = "sentinel", deserialize_with = "nullable_sentinel")]
    pub start_time: String,
    /// Registration close time
    #[serde(default = "sentinel", deserialize_with = "nullable_sentinel")]
    pub reg_close: String,
    /// `"-"` means free of charge
    #[serde(default = "sentinel", deserialize_with = "nullable_sentinel")]
    pub entry_fee: String,
    /// Starting stack, e.g. "30000 Chips"
    #[serde(default = "sentinel", deserialize_with = "nullable_sentinel")]
    pub chips: String,
}

impl Tournament {
    /// Create a record with every detail field set to the sentinel.
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: impl Into<String>) -> Self {
        Tournament {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            start_time: sentinel(),
            reg_close: sentinel(),
            entry_fee: sentinel(),
            chips: sentinel(),
        }
    }

    pub fn with_times(
        mut self,
        start_time: impl Into<String>,
        reg_close: impl Into<String>,
    ) -> Self {
        self.start_time = start_time.into();
        self.reg_close = reg_close.into();
        self
    }

    pub fn with_entry_fee(mut self, entry_fee: impl Into<String>) -> Self {
        self.entry_fee = entry_fee.into();
        self
    }

    pub fn with_chips(mut self, chips: impl Into<String>) -> Self {
        self.chips = chips.into();
        self
    }

    /// Case-insensitive match of `needle_lower` against name or id.
    ///
    /// The needle must already be lowercased.
    pub(crate) fn matches_search(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.id.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}
