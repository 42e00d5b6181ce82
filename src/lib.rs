//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the building
//! blocks of the session: city registry, loader, reporters.

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod session;
pub mod stats;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Report { .. }) => cli::commands::report::handle(cmd, cfg),
        Some(Commands::Cities) => cli::commands::cities::handle(cfg),
        Some(Commands::Config { .. }) => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    log::debug!("effective configuration: {cfg:?}");

    dispatch(&cli, &cfg)
}
