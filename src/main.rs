mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Context;
use spadie_core::config::ScheduleConfig;
use spadie_core::{Dataset, FilterState, Locale, ScheduleView};

#[derive(Parser)]
#[command(name = "spadie")]
#[command(about = "Browse the SPADIE poker tournament schedule")]
struct Cli {
    /// JSON file with the tournament list (overrides data_file from config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Display language: "ja" or "en" (overrides locale from config)
    #[arg(long, global = true)]
    lang: Option<Locale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule grouped by date
    List {
        /// Only show tournaments on this date (exact label, e.g. 2025-08-08)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show tournaments whose name or id contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List the dates on the schedule
    Dates,
    /// Show details for one tournament
    Show {
        /// Tournament id (e.g. 01)
        id: String,
    },
    /// Filter and open tournaments interactively
    Browse,
    /// Show the config file location and available options
    Config {
        /// Write a commented config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List {
        date: None,
        search: None,
    });

    match command {
        Commands::List { date, search } => {
            let mut ctx = load_context(cli.data, cli.lang)?;
            ctx.view = ctx.view.with_filter(FilterState::new(
                date.unwrap_or_default(),
                search.unwrap_or_default(),
            ));
            commands::list::run(&ctx)
        }
        Commands::Dates => commands::dates::run(&load_context(cli.data, cli.lang)?),
        Commands::Show { id } => commands::show::run(&load_context(cli.data, cli.lang)?, &id),
        Commands::Browse => commands::browse::run(load_context(cli.data, cli.lang)?),
        Commands::Config { init } => commands::config::run(init),
    }
}

/// Load config, then the dataset it (or `--data`) points to.
fn load_context(data: Option<PathBuf>, lang: Option<Locale>) -> Result<Context> {
    let config = ScheduleConfig::load()?.with_overrides(data, lang);

    let dataset = Dataset::load(config.data_path().as_deref())?;

    if dataset.tournaments().is_empty() {
        log::warn!("{} contains no tournaments", dataset.source());
    }

    Ok(Context {
        view: ScheduleView::new(dataset.into_tournaments()),
        event: config.event,
        locale: config.locale,
    })
}
