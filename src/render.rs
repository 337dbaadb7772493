//! Terminal rendering for schedule types.
//!
//! Extension traits that turn spadie-core values into colored text using
//! owo_colors. Callers print the returned strings.

use owo_colors::OwoColorize;
use spadie_core::config::EventInfo;
use spadie_core::labels::{format_chips, format_entry_fee, format_time};
use spadie_core::{Category, CategoryColor, DateGroup, Locale, ScheduleSnapshot, Tournament};

/// Extension trait for localized TUI rendering with colors.
pub trait Render {
    fn render(&self, locale: Locale) -> String;
}

impl Render for Category {
    fn render(&self, locale: Locale) -> String {
        let badge = format!(" {} ", self.label(locale));
        match Category::color(*self) {
            CategoryColor::Red => badge.white().on_red().to_string(),
            CategoryColor::Purple => badge.white().on_magenta().to_string(),
            CategoryColor::Blue => badge.white().on_blue().to_string(),
            CategoryColor::Green => badge.white().on_green().to_string(),
            CategoryColor::Gray => badge.white().on_bright_black().to_string(),
        }
    }
}

/// Card shown in the list view
impl Render for Tournament {
    fn render(&self, locale: Locale) -> String {
        let s = locale.strings();
        let category = Category::from_name(&self.name);
        let id = format!("#{}", self.id);

        let lines = [
            format!("{} {}", category.render(locale), id.magenta()),
            format!("{}", self.name.bold()),
            format!(
                "  {}",
                format!(
                    "{}: {} | {}: {}",
                    s.start,
                    format_time(&self.start_time),
                    s.reg_close,
                    format_time(&self.reg_close)
                )
                .magenta()
            ),
            format!("  {}", format_entry_fee(&self.entry_fee, locale).green()),
            format!("  {}", format_chips(&self.chips, locale).blue()),
        ];

        lines.map(|l| format!("  {}", l)).join("\n")
    }
}

impl Render for DateGroup {
    fn render(&self, locale: Locale) -> String {
        let mut lines = vec![format!("📅 {}", self.date.bold())];

        for tournament in &self.tournaments {
            lines.push(String::new());
            lines.push(tournament.render(locale));
        }

        lines.join("\n")
    }
}

pub fn render_header(event: &EventInfo) -> String {
    let title = format!("🏆 {}", event.title);
    [
        format!("{}", title.yellow().bold()),
        format!("   {}", event.subtitle.magenta()),
        format!("   {} | {}", event.dates, event.venue.dimmed()),
    ]
    .join("\n")
}

/// The "all dates" entry followed by each date, with the active one highlighted.
pub fn render_filter_bar(dates: &[String], selected_date: &str, locale: Locale) -> String {
    let all = std::iter::once((locale.strings().all_dates, selected_date.is_empty()));
    let entries = dates.iter().map(|d| (d.as_str(), d == selected_date));

    all.chain(entries)
        .map(|(label, active)| {
            if active {
                format!("[{}]", label).bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_search_term(search_term: &str) -> Option<String> {
    if search_term.is_empty() {
        return None;
    }
    Some(format!("🔍 {}", search_term.cyan()))
}

pub fn render_no_results(locale: Locale) -> String {
    let s = locale.strings();
    [
        "🏆".to_string(),
        s.no_results_title.bold().to_string(),
        s.no_results_hint.dimmed().to_string(),
    ]
    .map(|l| format!("   {}", l))
    .join("\n")
}

/// Grouped sections, or the "no results" block.
pub fn render_groups(snapshot: &ScheduleSnapshot, locale: Locale) -> String {
    if snapshot.is_empty() {
        return render_no_results(locale);
    }

    snapshot
        .groups
        .iter()
        .map(|group| group.render(locale))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_detail(tournament: &Tournament, event: &EventInfo, locale: Locale) -> String {
    let s = locale.strings();
    let category = Category::from_name(&tournament.name);

    let field = |label: &str, value: String| {
        format!("  {} {}", format!("{}:", label).dimmed(), value)
    };

    let mut lines = vec![
        tournament.name.magenta().bold().to_string(),
        s.detail_subtitle.dimmed().to_string(),
        String::new(),
        s.basic_info.magenta().to_string(),
        field(s.id, format!("#{}", tournament.id)),
        field(s.date, tournament.date.clone()),
        field(s.start_time, format_time(&tournament.start_time)),
        field(s.reg_close, format_time(&tournament.reg_close)),
        String::new(),
        s.entry_info.magenta().to_string(),
        field(s.entry_fee, format_entry_fee(&tournament.entry_fee, locale)),
        field(s.starting_chips, format_chips(&tournament.chips, locale)),
        field(s.category, category.render(locale)),
    ];

    if !event.notes.is_empty() {
        lines.push(String::new());
        lines.push(s.notes.magenta().to_string());
        lines.extend(event.notes.iter().map(|n| format!("  • {}", n.dimmed())));
    }

    lines.join("\n")
}

pub fn render_footer(event: &EventInfo, locale: Locale) -> String {
    let s = locale.strings();
    [
        event.title.bold().to_string(),
        format!("{} | {}", event.dates, event.venue).dimmed().to_string(),
        format!("{}: {}   X: {}", s.official_site, event.website, event.x_account)
            .dimmed()
            .to_string(),
    ]
    .join("\n")
}

/// One-line label used by interactive pickers.
pub fn render_picker_item(tournament: &Tournament, locale: Locale) -> String {
    let category = Category::from_name(&tournament.name);
    format!(
        "{}  #{} {} ({})",
        tournament.date,
        tournament.id,
        tournament.name,
        category.label(locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use spadie_core::ScheduleView;

    fn main_event() -> Tournament {
        Tournament::new("01", "Main Event Day1", "2025-08-08")
            .with_times("12:00", "-")
            .with_entry_fee("-")
            .with_chips("30000 Chips")
    }

    #[test]
    fn test_badge_background_follows_category() {
        let cases = [
            (Category::MainEvent, "\x1b[41m"),
            (Category::Championship, "\x1b[45m"),
            (Category::Satellite, "\x1b[44m"),
            (Category::Final, "\x1b[42m"),
            (Category::Regular, "\x1b[100m"),
        ];

        for (category, background) in cases {
            let badge = category.render(Locale::Ja);
            assert!(badge.contains(background), "{:?}: {:?}", category, badge);
            assert!(badge.contains(category.label(Locale::Ja)));
        }
    }

    #[test]
    fn test_card_contains_labels() {
        let card = main_event().render(Locale::Ja);

        assert!(card.contains("メインイベント"));
        assert!(card.contains("#01"));
        assert!(card.contains("Main Event Day1"));
        assert!(card.contains("開始: 12:00 | 受付終了: -"));
        assert!(card.contains("無料"));
        assert!(card.contains("30000 チップ"));
    }

    #[test]
    fn test_groups_render_in_snapshot_order() {
        let view = ScheduleView::new(vec![
            Tournament::new("1", "Late", "2025-08-10"),
            Tournament::new("2", "Early", "2025-08-08"),
        ]);

        let out = render_groups(&view.snapshot(), Locale::En);
        let late = out.find("2025-08-10").unwrap();
        let early = out.find("2025-08-08").unwrap();
        assert!(late < early);
    }

    #[test]
    fn test_empty_snapshot_renders_no_results() {
        let mut view = ScheduleView::new(vec![main_event()]);
        view.set_selected_date("2025-08-09");

        let out = render_groups(&view.snapshot(), Locale::Ja);
        assert!(out.contains("トーナメントが見つかりません"));
        assert!(out.contains("検索条件を変更してお試しください"));
    }

    #[test]
    fn test_filter_bar_marks_active_entry() {
        let dates = vec!["2025-08-08".to_string(), "2025-08-09".to_string()];

        let all = render_filter_bar(&dates, "", Locale::Ja);
        assert!(all.contains("[全ての日付]"));
        assert!(!all.contains("[2025-08-08]"));

        let one = render_filter_bar(&dates, "2025-08-09", Locale::Ja);
        assert!(one.contains("[2025-08-09]"));
        assert!(!one.contains("[全ての日付]"));
    }

    #[test]
    fn test_detail_lists_fields_and_notes() {
        let event = EventInfo::default();
        let out = render_detail(&main_event(), &event, Locale::Ja);

        assert!(out.contains("トーナメント詳細情報"));
        assert!(out.contains("#01"));
        assert!(out.contains("2025-08-08"));
        assert!(out.contains("無料"));
        assert!(out.contains("30000 チップ"));
        assert!(out.contains("メインイベント"));
        for note in &event.notes {
            assert!(out.contains(note.as_str()));
        }
    }

    #[test]
    fn test_english_labels() {
        let card = main_event().render(Locale::En);
        assert!(card.contains("Start: 12:00 | Reg. close: -"));
        assert!(card.contains("Free"));
        assert!(card.contains("30000 chips"));
    }

    #[test]
    fn test_search_term_line_only_when_searching() {
        assert!(render_search_term("").is_none());
        assert!(render_search_term("main").unwrap().contains("main"));
    }
}
