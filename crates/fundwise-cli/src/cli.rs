//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fundwise - Check whether your savings goals are within reach
#[derive(Parser)]
#[command(name = "fundwise")]
#[command(about = "Goal feasibility and recommendation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Profile file (JSON, TOML or YAML, picked by extension)
    #[arg(long, default_value = "profile.json", global = true)]
    pub profile: PathBuf,

    /// Catalog override file
    ///
    /// Defaults to <data dir>/fundwise/config/catalog.toml when present,
    /// otherwise the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the budget summary
    Summary,

    /// Evaluate every goal and show recommendations
    Goals,

    /// Check whether a purchase is affordable
    Afford {
        /// Purchase price
        #[arg(long)]
        price: f64,

        /// Item name
        #[arg(long)]
        item: Option<String>,
    },

    /// Project growth of a monthly investment
    Invest {
        /// Amount invested each month
        #[arg(long)]
        monthly: f64,

        /// Investment horizon in years
        #[arg(long, default_value = "5")]
        horizon: f64,

        /// Risk tier: conservative, moderate, aggressive (defaults to the profile's)
        #[arg(long)]
        risk: Option<String>,
    },

    /// Build a financial plan for one goal
    Plan {
        /// Goal id
        #[arg(long)]
        goal: String,
    },

    /// Compute a financial health score
    Health {
        /// Investment lessons completed
        #[arg(long)]
        lessons: Option<u32>,

        /// Investment quizzes taken
        #[arg(long)]
        quizzes: Option<u32>,
    },

    /// Print the active catalog
    Catalog,
}
