use crate::errors::{AppError, AppResult};
use crate::utils::formatting::title_case;
use std::fmt;

/// Month filter token: `All` or one of the six months covered by the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthFilter {
    All,
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
}

impl MonthFilter {
    pub const ALL: [MonthFilter; 7] = [
        MonthFilter::All,
        MonthFilter::Jan,
        MonthFilter::Feb,
        MonthFilter::Mar,
        MonthFilter::Apr,
        MonthFilter::May,
        MonthFilter::Jun,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            MonthFilter::Jan => "Jan",
            MonthFilter::Feb => "Feb",
            MonthFilter::Mar => "Mar",
            MonthFilter::Apr => "Apr",
            MonthFilter::May => "May",
            MonthFilter::Jun => "Jun",
        }
    }

    /// 1-based month number (Jan = 1), `None` for `All`.
    pub fn number(&self) -> Option<u32> {
        MonthFilter::ALL
            .iter()
            .position(|m| m == self)
            .filter(|&i| i > 0)
            .map(|i| i as u32)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        MonthFilter::ALL.into_iter().find(|m| m.token() == token)
    }

    pub fn from_input(input: &str) -> AppResult<Self> {
        Self::from_token(&title_case(input)).ok_or_else(|| AppError::InvalidSelection {
            kind: "month",
            value: input.trim().to_string(),
        })
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }

    /// Does a derived month number pass this filter?
    pub fn matches(&self, month: u32) -> bool {
        self.number().is_none_or(|n| n == month)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

/// Three-letter label for a month number (1..=12), used by the reporters.
pub fn month_label(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_else(|| month.to_string())
}
