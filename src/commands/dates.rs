use anyhow::Result;
use owo_colors::OwoColorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let tournaments = ctx.view.tournaments();

    for date in ctx.view.unique_dates() {
        let count = tournaments.iter().filter(|t| t.date == date).count();
        println!("{}  {}", date.bold(), format!("({})", count).dimmed());
    }

    Ok(())
}
