//! Tournament categories derived from the tournament name.

use std::fmt;

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MainEvent,
    Championship,
    Satellite,
    Final,
    Regular,
}

/// Badge color for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryColor {
    Red,
    Purple,
    Blue,
    Green,
    Gray,
}

/// Name keywords checked in order; the first contained keyword wins.
/// Matching is case-sensitive.
const RULES: &[(&str, Category)] = &[
    ("Main Event", Category::MainEvent),
    ("Championship", Category::Championship),
    ("Satellite", Category::Satellite),
    ("Final", Category::Final),
];

impl Category {
    pub fn from_name(name: &str) -> Self {
        RULES
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Regular)
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::MainEvent, Locale::Ja) => "メインイベント",
            (Category::Championship, Locale::Ja) => "チャンピオンシップ",
            (Category::Satellite, Locale::Ja) => "サテライト",
            (Category::Final, Locale::Ja) => "ファイナル",
            (Category::Regular, Locale::Ja) => "通常",
            (Category::MainEvent, Locale::En) => "Main Event",
            (Category::Championship, Locale::En) => "Championship",
            (Category::Satellite, Locale::En) => "Satellite",
            (Category::Final, Locale::En) => "Final",
            (Category::Regular, Locale::En) => "Regular",
        }
    }

    pub fn color(self) -> CategoryColor {
        match self {
            Category::MainEvent => CategoryColor::Red,
            Category::Championship => CategoryColor::Purple,
            Category::Satellite => CategoryColor::Blue,
            Category::Final => CategoryColor::Green,
            Category::Regular => CategoryColor::Gray,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Locale::En))
    }
}
