//! Most popular stations and trip.
//!
//! The top-N listings are plain functions so callers can offer them on demand,
//! independently of the headline figures.

use crate::models::TripTable;
use crate::stats::NO_DATA;
use crate::stats::tally::{mode_with_count, top_n};
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

pub type StationPair = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub top_start: Option<(String, usize)>,
    pub top_end: Option<(String, usize)>,
    pub top_pair: Option<(StationPair, usize)>,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            top_start: mode_with_count(start_stations(table)),
            top_end: mode_with_count(end_stations(table)),
            top_pair: mode_with_count(station_pairs(table)),
        }
    }

    pub fn render_start(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.top_start {
            Some((station, _)) => writeln!(out, "The most popular starting station: {station}"),
            None => writeln!(out, "{NO_DATA}"),
        }
    }

    pub fn render_end(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.top_end {
            Some((station, _)) => writeln!(out, "The most popular ending station: {station}"),
            None => writeln!(out, "{NO_DATA}"),
        }
    }

    pub fn render_pair(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.top_pair {
            Some(((from, to), _)) => writeln!(
                out,
                "The most popular start-end combination: {from} to {to}"
            ),
            None => writeln!(out, "{NO_DATA}"),
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.render_start(out)?;
        self.render_end(out)?;
        self.render_pair(out)
    }
}

// Blank station cells are missing values and never counted.
fn start_stations(table: &TripTable) -> impl Iterator<Item = String> + '_ {
    table.iter().filter_map(|t| t.start_station.clone())
}

fn end_stations(table: &TripTable) -> impl Iterator<Item = String> + '_ {
    table.iter().filter_map(|t| t.end_station.clone())
}

/// Only trips with both ends known form a pair.
fn station_pairs(table: &TripTable) -> impl Iterator<Item = StationPair> + '_ {
    table
        .iter()
        .filter_map(|t| Some((t.start_station.clone()?, t.end_station.clone()?)))
}

pub fn top_start_stations(table: &TripTable, n: usize) -> Vec<(String, usize)> {
    top_n(start_stations(table), n)
}

pub fn top_end_stations(table: &TripTable, n: usize) -> Vec<(String, usize)> {
    top_n(end_stations(table), n)
}

pub fn top_station_pairs(table: &TripTable, n: usize) -> Vec<(StationPair, usize)> {
    top_n(station_pairs(table), n)
}

pub fn render_top_stations(
    out: &mut dyn Write,
    header: &str,
    rows: &[(String, usize)],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{NO_DATA}");
    }

    let mut table = Table::new(vec![Column::left(header), Column::right("Trips")]);
    for (station, count) in rows {
        table.add_row(vec![station.clone(), count.to_string()]);
    }
    write!(out, "{}", table.render())
}

pub fn render_top_pairs(out: &mut dyn Write, rows: &[(StationPair, usize)]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{NO_DATA}");
    }

    let mut table = Table::new(vec![
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::right("Trips"),
    ]);
    for ((from, to), count) in rows {
        table.add_row(vec![from.clone(), to.clone(), count.to_string()]);
    }
    write!(out, "{}", table.render())
}
