use crate::errors::{AppError, AppResult};
use crate::utils::formatting::title_case;
use std::fmt;

/// Cities with a trip dataset. The registry is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Display name, as typed by the user (after title-casing).
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city dataset, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Look up a city by its display name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        City::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Validate free-text input: title-case it, then look it up.
    pub fn from_input(input: &str) -> AppResult<Self> {
        Self::from_name(&title_case(input)).ok_or_else(|| AppError::InvalidSelection {
            kind: "city",
            value: input.trim().to_string(),
        })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
