//! Raw-data preview, one page at a time.

use crate::errors::AppResult;
use crate::models::weekday::weekday_name;
use crate::models::{Trip, TripTable};
use crate::session::console::Console;
use crate::utils::table::{Column, Table};
use std::io::Write;

/// Show pages of `page_size` rows while the operator keeps answering yes.
/// Stops on "no" or when no rows are left.
pub fn preview(console: &mut dyn Console, table: &TripTable, page_size: usize) -> AppResult<()> {
    if !console.confirm("\nWould you like to see a few lines of the data? (Enter yes or no.)\n")? {
        return Ok(());
    }
    if table.is_empty() {
        writeln!(console.out(), "There are no rows to show.")?;
        return Ok(());
    }

    let mut start = 0;
    write!(console.out(), "{}", render_page(table, start, page_size))?;

    while start + page_size < table.len() {
        if !console.confirm("\nWould you like to see more? (Enter yes or no)\n")? {
            break;
        }
        start += page_size;
        write!(console.out(), "{}", render_page(table, start, page_size))?;
    }

    Ok(())
}

/// Rows `[start, start + page_size)` with their source cells plus the derived
/// month and weekday.
pub fn render_page(table: &TripTable, start: usize, page_size: usize) -> String {
    let mut columns = vec![Column::right("#")];
    columns.extend(table.headers.iter().map(|h| Column::left(h.as_str())));
    columns.push(Column::right("Month"));
    columns.push(Column::left("Weekday"));

    let mut out = Table::new(columns);
    for (offset, trip) in table.page(start, page_size).iter().enumerate() {
        out.add_row(page_row(start + offset, trip));
    }
    out.render()
}

fn page_row(position: usize, trip: &Trip) -> Vec<String> {
    let mut row = vec![position.to_string()];
    row.extend(trip.fields.iter().cloned());
    row.push(trip.month.to_string());
    row.push(weekday_name(trip.weekday).to_string());
    row
}
