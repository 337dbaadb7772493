use anyhow::Result;

use super::Context;
use crate::render::render_detail;

pub fn run(ctx: &Context, id: &str) -> Result<()> {
    let Some(tournament) = ctx.view.find(id) else {
        anyhow::bail!(
            "Tournament '{}' not found.\n\n\
            Search by name or id with:\n  \
            spadie list --search <TERM>",
            id
        );
    };

    println!("{}", render_detail(tournament, &ctx.event, ctx.locale));

    Ok(())
}
