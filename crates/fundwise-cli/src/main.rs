//! Fundwise CLI - Goal feasibility and recommendation engine
//!
//! Usage:
//!   fundwise summary                   Budget summary
//!   fundwise goals                     Goal feasibility and recommendations
//!   fundwise afford --price 12000      Purchase affordability
//!   fundwise invest --monthly 5000     Investment growth projection
//!   fundwise plan --goal car           Financial plan for one goal

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let as_of = commands::resolve_as_of(cli.as_of.as_deref())?;
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Summary => {
            let profile = commands::load_profile(&cli.profile, as_of)?;
            commands::cmd_summary(catalog, &profile, cli.json)
        }
        Commands::Goals => {
            let profile = commands::load_profile(&cli.profile, as_of)?;
            commands::cmd_goals(catalog, &profile, as_of, cli.json)
        }
        Commands::Afford { price, item } => {
            let profile = commands::load_profile(&cli.profile, as_of)?;
            commands::cmd_afford(catalog, &profile, item.as_deref(), price, cli.json)
        }
        Commands::Invest {
            monthly,
            horizon,
            risk,
        } => {
            let risk = match risk {
                Some(label) => commands::parse_risk(&label)?,
                None => commands::load_profile(&cli.profile, as_of)?.risk_tolerance,
            };
            commands::cmd_invest(catalog, risk, monthly, horizon, cli.json)
        }
        Commands::Plan { goal } => {
            let profile = commands::load_profile(&cli.profile, as_of)?;
            commands::cmd_plan(catalog, &profile, &goal, as_of, cli.json)
        }
        Commands::Health { lessons, quizzes } => {
            let profile = commands::load_profile(&cli.profile, as_of)?;
            commands::cmd_health(catalog, &profile, as_of, lessons, quizzes, cli.json)
        }
        Commands::Catalog => commands::cmd_catalog(catalog, cli.json),
    }
}
