//! Schedule configuration.
//!
//! Read from ~/.config/spadie/config.toml when present, with `SPADIE_*`
//! environment variables layered on top. Every key is optional.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::Deserialize;

use crate::error::{ScheduleError, ScheduleResult};
use crate::locale::Locale;

/// Festival details shown in the header, footer and detail view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    pub title: String,
    pub subtitle: String,
    pub dates: String,
    pub venue: String,
    pub website: String,
    pub x_account: String,
    /// Shown at the bottom of every tournament's detail view
    pub notes: Vec<String>,
}

impl Default for EventInfo {
    fn default() -> Self {
        EventInfo {
            title: "SPADIE 38th".to_string(),
            subtitle: "ポーカートーナメントスケジュール".to_string(),
            dates: "2025年8月8日〜17日".to_string(),
            venue: "ベルサール新宿セントラルパーク".to_string(),
            website: "pokerguild.jp".to_string(),
            x_account: "@SPADIE_FINAL_".to_string(),
            notes: vec![
                "ファーストエントリー時に別途ドリンク代1,000円が必要です".to_string(),
                "ルールはJOPT Official Ruleを採用します".to_string(),
                "詳細な構造やプライズ情報は公式PDFをご確認ください".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// JSON dataset to use instead of the bundled schedule
    pub data_file: Option<PathBuf>,

    pub locale: Locale,

    pub event: EventInfo,
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("spadie");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> ScheduleResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (which may not exist) plus the process environment.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like `load_from`, reading `SPADIE_*` variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> ScheduleResult<Self> {
        if path.exists() {
            log::debug!("Reading config from {}", path.display());
        }

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("SPADIE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Apply command-line choices, which win over file and environment.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, locale: Option<Locale>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = Some(data_file);
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }

    /// The dataset path with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file
            .as_ref()
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()))
    }

    /// Config file template with all options commented out.
    pub fn default_contents() -> String {
        let defaults = EventInfo::default();
        let notes = defaults
            .notes
            .iter()
            .map(|n| format!("\"{}\"", n))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "\
# spadie configuration

# JSON file with the tournament list (defaults to the bundled schedule):
# data_file = \"~/spadie/tournaments.json\"

# Display language, \"ja\" or \"en\":
# locale = \"{locale}\"

# [event]
# title = \"{title}\"
# subtitle = \"{subtitle}\"
# dates = \"{dates}\"
# venue = \"{venue}\"
# website = \"{website}\"
# x_account = \"{x_account}\"
# notes = [{notes}]
",
            locale = Locale::default(),
            title = defaults.title,
            subtitle = defaults.subtitle,
            dates = defaults.dates,
            venue = defaults.venue,
            website = defaults.website,
            x_account = defaults.x_account,
        )
    }

    /// Write the commented template to `path`, creating parent directories.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, Self::default_contents())
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScheduleConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.data_file, None);
        assert_eq!(config.event, EventInfo::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "locale = \"en\"\ndata_file = \"~/data/schedule.json\"\n\n[event]\ntitle = \"SPADIE 39th\"\n",
        )
        .unwrap();

        let config = ScheduleConfig::load_from(&path).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.event.title, "SPADIE 39th");
        assert_eq!(config.event.venue, EventInfo::default().venue);
        assert_eq!(config.data_file, Some(PathBuf::from("~/data/schedule.json")));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "locale = \"ja\"\n\n[event]\ntitle = \"From file\"\n").unwrap();

        let mut env = Map::new();
        env.insert("SPADIE_LOCALE".to_string(), "en".to_string());
        env.insert("SPADIE_EVENT__TITLE".to_string(), "From env".to_string());
        env.insert("SPADIE_DATA_FILE".to_string(), "/tmp/schedule.json".to_string());
        env.insert("OTHER_LOCALE".to_string(), "ja".to_string());

        let config = ScheduleConfig::load_with_env(&path, Some(env)).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.event.title, "From env");
        assert_eq!(config.event.venue, EventInfo::default().venue);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/schedule.json")));
    }

    #[test]
    fn test_empty_environment_leaves_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "locale = \"en\"\n").unwrap();

        let config = ScheduleConfig::load_with_env(&path, Some(Map::new())).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.event.title, EventInfo::default().title);
    }

    #[test]
    fn test_command_line_overrides_win() {
        let config = ScheduleConfig {
            data_file: Some(PathBuf::from("/from/config.json")),
            locale: Locale::En,
            ..Default::default()
        };

        let overridden = config
            .clone()
            .with_overrides(Some(PathBuf::from("/from/flag.json")), Some(Locale::Ja));
        assert_eq!(overridden.data_path(), Some(PathBuf::from("/from/flag.json")));
        assert_eq!(overridden.locale, Locale::Ja);

        let untouched = config.clone().with_overrides(None, None);
        assert_eq!(untouched, config);
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = ScheduleConfig {
            data_file: Some(PathBuf::from("~/schedule.json")),
            ..Default::default()
        };

        let path = config.data_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("schedule.json"));
    }

    #[test]
    fn test_default_template_is_valid_and_inert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ScheduleConfig::create_default_config(&path).unwrap();
        let config = ScheduleConfig::load_from(&path).unwrap();

        assert_eq!(config.data_file, None);
        assert_eq!(config.event, EventInfo::default());
    }

    #[test]
    fn test_invalid_locale_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "locale = \"fr\"\n").unwrap();

        let err = ScheduleConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }
}
