//! Display language for labels and UI text.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Supported display languages. Japanese is the schedule's native language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Fixed UI strings for one locale.
#[derive(Debug)]
pub struct Strings {
    pub free_of_charge: &'static str,
    pub chips_suffix: &'static str,

    pub all_dates: &'static str,
    pub search_prompt: &'static str,
    pub start: &'static str,
    pub reg_close: &'static str,
    pub no_results_title: &'static str,
    pub no_results_hint: &'static str,

    pub detail_subtitle: &'static str,
    pub basic_info: &'static str,
    pub entry_info: &'static str,
    pub id: &'static str,
    pub date: &'static str,
    pub start_time: &'static str,
    pub entry_fee: &'static str,
    pub starting_chips: &'static str,
    pub category: &'static str,
    pub notes: &'static str,

    pub official_site: &'static str,

    pub menu_filter_date: &'static str,
    pub menu_search: &'static str,
    pub menu_open: &'static str,
    pub menu_reset: &'static str,
    pub menu_quit: &'static str,
    pub back: &'static str,
}

const JA: Strings = Strings {
    free_of_charge: "無料",
    chips_suffix: "チップ",

    all_dates: "全ての日付",
    search_prompt: "トーナメント名またはIDで検索",
    start: "開始",
    reg_close: "受付終了",
    no_results_title: "トーナメントが見つかりません",
    no_results_hint: "検索条件を変更してお試しください",

    detail_subtitle: "トーナメント詳細情報",
    basic_info: "基本情報",
    entry_info: "参加情報",
    id: "ID",
    date: "日付",
    start_time: "開始時間",
    entry_fee: "参加費",
    starting_chips: "初期チップ",
    category: "種別",
    notes: "注意事項",

    official_site: "公式サイト",

    menu_filter_date: "日付で絞り込む",
    menu_search: "検索",
    menu_open: "トーナメント詳細を見る",
    menu_reset: "条件をリセット",
    menu_quit: "終了",
    back: "戻る",
};

const EN: Strings = Strings {
    free_of_charge: "Free",
    chips_suffix: "chips",

    all_dates: "All dates",
    search_prompt: "Search by tournament name or ID",
    start: "Start",
    reg_close: "Reg. close",
    no_results_title: "No tournaments found",
    no_results_hint: "Try changing your search criteria",

    detail_subtitle: "Tournament details",
    basic_info: "Basic info",
    entry_info: "Entry info",
    id: "ID",
    date: "Date",
    start_time: "Start time",
    entry_fee: "Entry fee",
    starting_chips: "Starting chips",
    category: "Type",
    notes: "Notes",

    official_site: "Official site",

    menu_filter_date: "Filter by date",
    menu_search: "Search",
    menu_open: "Open tournament details",
    menu_reset: "Reset filters",
    menu_quit: "Quit",
    back: "Back",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("Unknown locale '{}'. Expected 'ja' or 'en'", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}
