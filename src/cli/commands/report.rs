use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{City, MonthFilter, Selection, WeekdayFilter};
use crate::session::console::{Console, Unattended};
use crate::session::{load_selection, report};
use crate::utils::formatting::rule;
use std::io::{self, Write};

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        city,
        month,
        day,
        top,
    } = cmd
    {
        let selection = Selection::new(
            City::from_input(city)?,
            MonthFilter::from_input(month)?,
            WeekdayFilter::from_input(day)?,
        );

        let mut console = Unattended::new(io::stdout().lock(), *top);
        writeln!(console.out(), "Report for\n{selection}")?;
        writeln!(console.out(), "{}", rule())?;

        let table = load_selection(&mut console, &cfg.data_dir(), &selection)?;
        report::full_report(&mut console, &table, selection.city, cfg)?;
        console.out().flush()?;
    }
    Ok(())
}
