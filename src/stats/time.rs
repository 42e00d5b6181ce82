//! Most frequent times of travel.

use crate::models::TripTable;
use crate::models::month::month_label;
use crate::models::weekday::weekday_name;
use crate::stats::NO_DATA;
use crate::stats::tally::{distinct_count, mode};
use chrono::Weekday;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub trips: usize,
    /// `None` when the table spans a single month (or is empty).
    pub peak_month: Option<u32>,
    /// `None` when the table spans a single weekday (or is empty).
    pub peak_weekday: Option<Weekday>,
    /// `None` only for an empty table.
    pub peak_hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Self {
        let peak_month = if distinct_count(table.iter().map(|t| t.month)) > 1 {
            mode(table.iter().map(|t| t.month))
        } else {
            None
        };

        let peak_weekday = if distinct_count(table.iter().map(|t| t.weekday)) > 1 {
            mode(table.iter().map(|t| t.weekday))
        } else {
            None
        };

        Self {
            trips: table.len(),
            peak_month,
            peak_weekday,
            peak_hour: mode(table.iter().map(|t| t.hour())),
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.trips == 0 {
            return writeln!(out, "{NO_DATA}");
        }

        if let Some(m) = self.peak_month {
            writeln!(out, "The month with the most trips: {}.", month_label(m))?;
        }
        if let Some(d) = self.peak_weekday {
            writeln!(out, "The day (of week) with the most trips: {}", weekday_name(d))?;
        }
        if let Some(h) = self.peak_hour {
            writeln!(
                out,
                "The hour with the most trips is between {}:00 and {}:00",
                h,
                h + 1
            )?;
        }
        Ok(())
    }
}
