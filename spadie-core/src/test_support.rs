//! Fixtures and proptest strategies shared by the unit tests.

use proptest::prelude::*;

use crate::tournament::Tournament;

pub fn sample_schedule() -> Vec<Tournament> {
    vec![
        Tournament::new("01", "Main Event Day1", "2025-08-08")
            .with_times("12:00", "20:00")
            .with_entry_fee("25000")
            .with_chips("30000 Chips"),
        Tournament::new("02", "Opening Turbo", "2025-08-08")
            .with_times("13:00", "16:00")
            .with_entry_fee("8000")
            .with_chips("20000 Chips"),
        Tournament::new("11", "Main Event Satellite", "2025-08-09")
            .with_times("11:00", "14:00")
            .with_entry_fee("5000")
            .with_chips("15000 Chips"),
        Tournament::new("12", "Ladies Championship", "2025-08-09")
            .with_times("14:00", "18:00")
            .with_entry_fee("10000")
            .with_chips("25000 Chips"),
        Tournament::new("01", "Main Event Day2", "2025-08-10").with_times("12:00", "-"),
        Tournament::new("21", "Main Event Final", "2025-08-11").with_times("13:00", "-"),
        Tournament::new("22", "Freeroll", "2025-08-11").with_times("15:00", "15:30"),
    ]
}

prop_compose! {
    fn arb_tournament()(
        id in "[0-9]{1,2}|SAT-[0-9]",
        name in prop::sample::select(vec![
            "Main Event Day1",
            "Main Event Championship",
            "Satellite",
            "High Roller Final",
            "Deepstack",
            "TURBO",
        ]),
        date in prop::sample::select(vec!["2025-08-08", "2025-08-09", "2025-08-10"]),
    ) -> Tournament {
        Tournament::new(id, name, date)
    }
}

pub fn arb_tournaments() -> impl Strategy<Value = Vec<Tournament>> {
    prop::collection::vec(arb_tournament(), 0..24)
}

pub fn arb_search_term() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "main", "EVENT", "sat", "1", "final", "none"])
        .prop_map(str::to_string)
}
