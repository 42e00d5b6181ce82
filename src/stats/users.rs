//! Bikeshare user statistics: user types, gender, birth years.
//!
//! Gender and birth-year sections depend on whether the dataset has the
//! column at all, not on which city it is.

use crate::models::{City, TripTable};
use crate::stats::tally::{grouped_counts, mode};
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

/// Outcome for an optional column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStat<T> {
    /// The dataset has no such column.
    Missing,
    /// The column exists but no filtered row carries a value.
    Empty,
    Present(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub oldest: i64,
    pub youngest: i64,
    pub most_common: i64,
}

impl BirthYears {
    /// `None` when there is no year at all.
    pub fn from_years(years: &[i64]) -> Option<Self> {
        Some(Self {
            oldest: *years.iter().min()?,
            youngest: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub city: City,
    pub user_types: Vec<(String, usize)>,
    pub genders: ColumnStat<Vec<(String, usize)>>,
    pub birth_years: ColumnStat<BirthYears>,
}

impl UserStats {
    pub fn compute(table: &TripTable, city: City) -> Self {
        let user_types = grouped_counts(table.iter().filter_map(|t| t.user_type.clone()));

        let genders = if table.has_gender {
            let counts = grouped_counts(table.iter().filter_map(|t| t.gender.clone()));
            if counts.is_empty() {
                ColumnStat::Empty
            } else {
                ColumnStat::Present(counts)
            }
        } else {
            ColumnStat::Missing
        };

        let birth_years = if table.has_birth_year {
            let years: Vec<i64> = table
                .iter()
                .filter_map(|t| t.birth_year)
                .map(|y| y as i64)
                .collect();
            BirthYears::from_years(&years).map_or(ColumnStat::Empty, ColumnStat::Present)
        } else {
            ColumnStat::Missing
        };

        Self {
            city,
            user_types,
            genders,
            birth_years,
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.user_types.is_empty() {
            writeln!(out, "There are no user type data for this selection.")?;
        } else {
            writeln!(out, "There are {} types of users:", self.user_types.len())?;
            write!(out, "{}", counts_table("User Type", &self.user_types))?;
        }

        writeln!(out)?;
        match &self.genders {
            ColumnStat::Present(counts) => {
                writeln!(out, "The gender distribution of the users:")?;
                write!(out, "{}", counts_table("Gender", counts))?;
            }
            ColumnStat::Empty => writeln!(out, "There are no gender data for this selection.")?,
            ColumnStat::Missing => writeln!(
                out,
                "There are no user gender data available for {}.",
                self.city
            )?,
        }

        writeln!(out)?;
        match &self.birth_years {
            ColumnStat::Present(b) => writeln!(
                out,
                "The youngest user was born in {} and oldest in {}, with {} being the most common birth year",
                b.youngest, b.oldest, b.most_common
            ),
            ColumnStat::Empty => writeln!(out, "There are no birth year data for this selection."),
            ColumnStat::Missing => writeln!(
                out,
                "There are no data about user birth years for {}.",
                self.city
            ),
        }
    }
}

fn counts_table(header: &str, counts: &[(String, usize)]) -> String {
    let mut table = Table::new(vec![Column::left(header), Column::right("Count")]);
    for (value, count) in counts {
        table.add_row(vec![value.clone(), count.to_string()]);
    }
    table.render()
}
