//! Interactive schedule browser.
//!
//! Every change to the filters re-renders the whole page from the current
//! inputs.

use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use spadie_core::{ScheduleView, Tournament};

use super::Context;
use super::list::render_page;
use crate::render::{render_detail, render_no_results, render_picker_item};

/// A filter change or navigation step chosen from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    SelectDate(String),
    Search(String),
    /// The exact record picked, since ids may repeat
    Open(Tournament),
    Reset,
    Back,
    Quit,
}

/// Apply a filter action. Returns false when the browser should exit.
fn apply(view: &mut ScheduleView, action: &Action) -> bool {
    match action {
        Action::SelectDate(date) => view.set_selected_date(date.clone()),
        Action::Search(term) => view.set_search_term(term.clone()),
        Action::Reset => view.reset(),
        Action::Open(_) | Action::Back => {}
        Action::Quit => return false,
    }
    true
}

pub fn run(mut ctx: Context) -> Result<()> {
    loop {
        println!("{}", render_page(&ctx));
        println!();

        let action = prompt_action(&ctx)?;
        if let Action::Open(tournament) = &action {
            println!();
            println!("{}", render_detail(tournament, &ctx.event, ctx.locale));
            Input::<String>::new()
                .with_prompt(format!("  {}", ctx.locale.strings().back))
                .allow_empty(true)
                .interact_text()?;
        }

        if !apply(&mut ctx.view, &action) {
            return Ok(());
        }
        println!();
    }
}

fn prompt_action(ctx: &Context) -> Result<Action> {
    let s = ctx.locale.strings();
    let items = [
        s.menu_filter_date,
        s.menu_search,
        s.menu_open,
        s.menu_reset,
        s.menu_quit,
    ];

    let selection = Select::new().items(&items).default(0).interact()?;

    match selection {
        0 => prompt_date(ctx),
        1 => prompt_search(ctx),
        2 => prompt_tournament(ctx),
        3 => Ok(Action::Reset),
        _ => Ok(Action::Quit),
    }
}

fn prompt_date(ctx: &Context) -> Result<Action> {
    let dates = ctx.view.unique_dates();
    let selected = &ctx.view.filter_state().selected_date;

    let mut items = vec![ctx.locale.strings().all_dates.to_string()];
    items.extend(dates.iter().cloned());

    let current = dates.iter().position(|d| d == selected).map_or(0, |i| i + 1);

    let selection = Select::new()
        .with_prompt(format!("  {}", ctx.locale.strings().menu_filter_date))
        .items(&items)
        .default(current)
        .interact()?;

    let date = match selection {
        0 => String::new(),
        i => dates[i - 1].clone(),
    };

    Ok(Action::SelectDate(date))
}

fn prompt_search(ctx: &Context) -> Result<Action> {
    let term: String = Input::new()
        .with_prompt(format!("  {}", ctx.locale.strings().search_prompt))
        .with_initial_text(ctx.view.filter_state().search_term.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(Action::Search(term.trim().to_string()))
}

fn prompt_tournament(ctx: &Context) -> Result<Action> {
    let filtered = ctx.view.filtered();

    if filtered.is_empty() {
        println!("{}", render_no_results(ctx.locale));
        return Ok(Action::Back);
    }

    let mut items: Vec<String> = filtered
        .iter()
        .map(|t| render_picker_item(t, ctx.locale))
        .collect();
    items.push(ctx.locale.strings().back.dimmed().to_string());

    let selection = Select::new()
        .with_prompt(format!("  {}", ctx.locale.strings().menu_open))
        .items(&items)
        .default(0)
        .max_length(15)
        .interact()?;

    Ok(picked(filtered, selection))
}

/// Map a picker row to an action; the row past the last record is "back".
fn picked(mut filtered: Vec<Tournament>, selection: usize) -> Action {
    if selection < filtered.len() {
        Action::Open(filtered.swap_remove(selection))
    } else {
        Action::Back
    }
}
