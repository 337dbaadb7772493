use anyhow::Result;

use super::Context;
use crate::render::{
    render_filter_bar, render_footer, render_groups, render_header, render_search_term,
};

pub fn run(ctx: &Context) -> Result<()> {
    println!("{}", render_page(ctx));
    Ok(())
}

/// Header, filter controls, grouped results and footer for the current filters.
pub fn render_page(ctx: &Context) -> String {
    let snapshot = ctx.view.snapshot();
    let filter = ctx.view.filter_state();

    let mut sections = vec![render_header(&ctx.event)];

    let mut controls = vec![render_filter_bar(&snapshot.dates, &filter.selected_date, ctx.locale)];
    controls.extend(render_search_term(&filter.search_term));
    sections.push(controls.join("\n"));

    sections.push(render_groups(&snapshot, ctx.locale));
    sections.push(render_footer(&ctx.event, ctx.locale));

    sections.join("\n\n")
}
