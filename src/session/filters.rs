//! Interactive collection of the (city, month, weekday) selection.

use crate::errors::AppResult;
use crate::models::{City, MonthFilter, Selection, WeekdayFilter};
use crate::session::console::{Console, Prompter};
use crate::utils::formatting::rule;
use std::io::{BufRead, Write};

const RETRY: &str = "Invalid input. Please try again: ";

pub fn collect_filters<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<Selection> {
    writeln!(p.out(), "\nHello! Let's explore some US bikeshare data!\n")?;

    let city = p.ask_until(
        "We have data for Chicago, New York City, and Washington. Which one would you like?\n",
        RETRY,
        City::from_input,
    )?;
    writeln!(p.out(), "\nOK, let's look at {city}.\n")?;

    let month = p.ask_until(
        "Which month would you like to see? (Select from: all, Jan, Feb, Mar, Apr, May, or Jun)\n",
        RETRY,
        MonthFilter::from_input,
    )?;
    if month.is_all() {
        writeln!(p.out(), "\nOK, let's look at {city} in all months.\n")?;
    } else {
        writeln!(p.out(), "\nOK, let's look at {city} in {month}.\n")?;
    }

    let weekday = p.ask_until(
        "And, pick a weekday? (Select from All, Mo, Tu, We, Th, Fr, Sa or Su)\n",
        RETRY,
        WeekdayFilter::from_input,
    )?;

    let selection = Selection::new(city, month, weekday);
    writeln!(p.out(), "\nOK, let's look at \n{selection}")?;
    writeln!(p.out(), "{}", rule())?;

    Ok(selection)
}
