mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use bible_year::config::AppConfig;
use bible_year::{ErrorKind, PlanError};
use cli::args::{Cli, Commands};
use cli::handlers;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        match err.downcast_ref::<PlanError>() {
            // Rejected requests are reported, not treated as crashes.
            Some(e) if e.kind() == ErrorKind::Validation => {
                eprintln!("  ✗ {}", e);
                std::process::exit(2);
            }
            _ => {
                log::error!("{:#}", err);
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    let json = cli.json;

    match cli.command {
        None | Some(Commands::Today) => handlers::handle_today(&config, json),
        Some(Commands::Reading { date, year }) => {
            handlers::handle_reading(&config, &date, year, json)
        }
        Some(Commands::Week { date, days }) => {
            handlers::handle_week(&config, date.as_deref(), days, json)
        }
        Some(Commands::Plan { year, month }) => handlers::handle_plan(&config, year, month, json),
        Some(Commands::CatchUp { read, date }) => {
            handlers::handle_catch_up(&config, read, date.as_deref(), json)
        }
        Some(Commands::Config { init }) => handlers::handle_config(&config, init, json),
    }
}
