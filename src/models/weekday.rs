use crate::errors::{AppError, AppResult};
use crate::utils::formatting::title_case;
use chrono::Weekday;
use std::fmt;

/// Weekday filter token: `All` or the first two letters of a weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayFilter {
    All,
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl WeekdayFilter {
    pub const ALL: [WeekdayFilter; 8] = [
        WeekdayFilter::All,
        WeekdayFilter::Mo,
        WeekdayFilter::Tu,
        WeekdayFilter::We,
        WeekdayFilter::Th,
        WeekdayFilter::Fr,
        WeekdayFilter::Sa,
        WeekdayFilter::Su,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            WeekdayFilter::All => "All",
            WeekdayFilter::Mo => "Mo",
            WeekdayFilter::Tu => "Tu",
            WeekdayFilter::We => "We",
            WeekdayFilter::Th => "Th",
            WeekdayFilter::Fr => "Fr",
            WeekdayFilter::Sa => "Sa",
            WeekdayFilter::Su => "Su",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        WeekdayFilter::ALL.into_iter().find(|w| w.token() == token)
    }

    pub fn from_input(input: &str) -> AppResult<Self> {
        Self::from_token(&title_case(input)).ok_or_else(|| AppError::InvalidSelection {
            kind: "weekday",
            value: input.trim().to_string(),
        })
    }

    pub fn is_all(&self) -> bool {
        matches!(self, WeekdayFilter::All)
    }

    /// Prefix match on the weekday's English name.
    pub fn matches(&self, day: Weekday) -> bool {
        self.is_all() || weekday_name(day).starts_with(self.token())
    }
}

impl fmt::Display for WeekdayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
