use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bible-year", version, author, about = "Read the whole Bible in a year, a few chapters a day")]
pub struct Cli {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's reading
    Today,
    /// Show the reading for a specific date
    Reading {
        /// Date in YYYY-MM-DD format
        date: String,
        /// Plan year (defaults to the date's year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Show the readings for the coming days
    Week {
        /// First day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Number of days to show (1-366)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=366))]
        days: Option<u32>,
    },
    /// Show the allocation table for a year or a single month
    Plan {
        /// Plan year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Restrict output to one month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Re-plan the rest of the year from the chapters already read
    CatchUp {
        /// Chapters finished before the date
        #[arg(long)]
        read: usize,
        /// Date to plan from (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}
