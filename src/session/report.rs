//! Reporter sections: heading, body, optional run time and a closing rule.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{City, TripTable};
use crate::session::console::Console;
use crate::stats::station::{
    render_top_pairs, render_top_stations, top_end_stations, top_start_stations,
    top_station_pairs,
};
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::utils::formatting::rule;
use std::io::Write;
use std::time::Instant;

fn section(
    console: &mut dyn Console,
    cfg: &Config,
    title: &str,
    body: impl FnOnce(&mut dyn Console) -> AppResult<()>,
) -> AppResult<()> {
    writeln!(console.out(), "\n{title}\n")?;
    let started = Instant::now();

    body(&mut *console)?;

    if cfg.show_run_time {
        writeln!(
            console.out(),
            "\nRun time: {} seconds.",
            started.elapsed().as_secs_f64()
        )?;
    }
    writeln!(console.out(), "{}", rule())?;
    Ok(())
}

pub fn time_report(console: &mut dyn Console, table: &TripTable, cfg: &Config) -> AppResult<()> {
    section(
        console,
        cfg,
        "Calculating The Most Frequent Times of Travel...",
        |c| Ok(TimeStats::compute(table).render(c.out())?),
    )
}

pub fn station_report(
    console: &mut dyn Console,
    table: &TripTable,
    cfg: &Config,
) -> AppResult<()> {
    let n = cfg.top_n;
    let question =
        format!("\nThere might be ties. Would you like to see the top {n}? (Enter yes or no)\n");

    section(
        console,
        cfg,
        "Calculating The Most Popular Stations and Trip...",
        |c| {
            let stats = StationStats::compute(table);

            stats.render_start(c.out())?;
            if stats.top_start.is_some() && c.confirm(&question)? {
                render_top_stations(c.out(), "Start Station", &top_start_stations(table, n))?;
            }

            writeln!(c.out())?;
            stats.render_end(c.out())?;
            if stats.top_end.is_some() && c.confirm(&question)? {
                render_top_stations(c.out(), "End Station", &top_end_stations(table, n))?;
            }

            writeln!(c.out())?;
            stats.render_pair(c.out())?;
            if stats.top_pair.is_some() && c.confirm(&question)? {
                render_top_pairs(c.out(), &top_station_pairs(table, n))?;
            }
            Ok(())
        },
    )
}

pub fn duration_report(
    console: &mut dyn Console,
    table: &TripTable,
    cfg: &Config,
) -> AppResult<()> {
    section(console, cfg, "Calculating Trip Duration...", |c| {
        Ok(DurationStats::compute(table).render(c.out())?)
    })
}

pub fn user_report(
    console: &mut dyn Console,
    table: &TripTable,
    city: City,
    cfg: &Config,
) -> AppResult<()> {
    section(console, cfg, "Calculating User Stats...", |c| {
        Ok(UserStats::compute(table, city).render(c.out())?)
    })
}

/// Every reporter in sequence, without asking which ones to run.
pub fn full_report(
    console: &mut dyn Console,
    table: &TripTable,
    city: City,
    cfg: &Config,
) -> AppResult<()> {
    time_report(console, table, cfg)?;
    station_report(console, table, cfg)?;
    duration_report(console, table, cfg)?;
    user_report(console, table, city, cfg)
}
