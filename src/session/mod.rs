//! The interactive session: filters → load → preview → reporters → restart.

pub mod console;
pub mod filters;
pub mod pager;
pub mod report;

use crate::config::Config;
use crate::data;
use crate::errors::AppResult;
use crate::models::{Selection, TripTable};
use console::{Console, Prompter};
use std::io::{BufRead, Write};
use std::path::Path;

pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, cfg: &'a Config) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            cfg,
        }
    }

    /// Run iterations until the operator declines to restart.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.iteration()?;

            if !self
                .prompter
                .confirm("\nWould you like to restart? Enter yes or no.\n")?
            {
                writeln!(self.prompter.out(), "\nThank you! See you next time.\n")?;
                return Ok(());
            }
        }
    }

    fn iteration(&mut self) -> AppResult<()> {
        let selection = filters::collect_filters(&mut self.prompter)?;
        let table = load_selection(&mut self.prompter, &self.cfg.data_dir(), &selection)?;
        let p = &mut self.prompter;

        pager::preview(p, &table, self.cfg.page_size)?;

        if p.confirm(
            "\nWould you like to see the most common date/time of travel? (Enter yes or no.)\n",
        )? {
            report::time_report(p, &table, self.cfg)?;
        }
        if p.confirm("\nWould you like to see the most common stations? (Enter yes or no.)\n")? {
            report::station_report(p, &table, self.cfg)?;
        }
        if p.confirm("\nWould you like to see a summary of travel time? (Enter yes or no.)\n")? {
            report::duration_report(p, &table, self.cfg)?;
        }
        if p.confirm("\nWould you like to see a summary of user types? (Enter yes or no.)\n")? {
            report::user_report(p, &table, selection.city, self.cfg)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

/// Load the selection, telling the operator how many records matched.
pub fn load_selection(
    console: &mut dyn Console,
    data_dir: &Path,
    selection: &Selection,
) -> AppResult<TripTable> {
    writeln!(console.out(), "\nPreparing the dataset based on your selection...")?;
    let table = data::load(data_dir, selection)?;
    writeln!(console.out(), "\nOK, we can find {} records.", table.len())?;
    Ok(table)
}
