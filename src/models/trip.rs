use chrono::{NaiveDateTime, Timelike, Weekday};

/// One row of a city dataset.
///
/// Typed fields are the ones the reporters need; `fields` keeps every source
/// cell untouched so the raw-data preview can show the row as it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Seconds.
    pub duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// Derived at load time, 1-based.
    pub month: u32,
    /// Derived at load time.
    pub weekday: Weekday,
    pub fields: Vec<String>,
}

impl Trip {
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Trips of one city after the month/weekday filters were applied.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    /// Source column names, in file order.
    pub headers: Vec<String>,
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Rows `[start, start + len)`, clamped to the table.
    pub fn page(&self, start: usize, len: usize) -> &[Trip] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }
}
