use crate::models::{City, MonthFilter, WeekdayFilter};
use std::fmt;

/// The (city, month, weekday) triple chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub weekday: WeekdayFilter,
}

impl Selection {
    pub fn new(city: City, month: MonthFilter, weekday: WeekdayFilter) -> Self {
        Self {
            city,
            month,
            weekday,
        }
    }

    /// Whole city dataset, no time filter.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, WeekdayFilter::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-city: {}\n-month: {}\n-day: {}",
            self.city, self.month, self.weekday
        )
    }
}
