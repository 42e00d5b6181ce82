use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: peak travel times, popular stations, trip durations and users",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Defaults to `explore` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Explore,

    /// Print every statistic for one selection, without prompting
    Report {
        /// City: Chicago, New York City or Washington (any case)
        #[arg(long)]
        city: String,

        /// Month filter: All, Jan, Feb, Mar, Apr, May or Jun
        #[arg(long, default_value = "All")]
        month: String,

        /// Weekday filter: All, Mo, Tu, We, Th, Fr, Sa or Su
        #[arg(long = "day", default_value = "All")]
        day: String,

        /// Also print the top station and trip listings
        #[arg(long)]
        top: bool,
    },

    /// List the known cities and their data files
    Cities,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "init",
            help = "Write a default configuration file (never overwrites)"
        )]
        init: bool,
    },
}
