//! Total and average trip duration.

use crate::models::TripTable;
use crate::stats::NO_DATA;
use crate::utils::secs2readable;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub trips: usize,
    /// Sum of all durations, truncated to whole seconds.
    pub total_secs: i64,
    /// Arithmetic mean, truncated to whole seconds. `None` for an empty table.
    pub mean_secs: Option<i64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Self {
        let sum: f64 = table.iter().map(|t| t.duration).sum();
        let trips = table.len();

        let mean_secs = if trips == 0 {
            None
        } else {
            Some((sum / trips as f64) as i64)
        };

        Self {
            trips,
            total_secs: sum as i64,
            mean_secs,
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(mean) = self.mean_secs else {
            return writeln!(out, "{NO_DATA}");
        };

        writeln!(out, "Total travel time: {}", secs2readable(self.total_secs))?;
        writeln!(out, "Average travel time: {}", secs2readable(mean))
    }
}
