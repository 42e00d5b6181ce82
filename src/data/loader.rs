use crate::data::registry;
use crate::errors::{AppError, AppResult};
use crate::models::{MonthFilter, Selection, Trip, TripTable, WeekdayFilter};
use chrono::{Datelike, NaiveDateTime};
use csv::StringRecord;
use std::path::Path;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Column positions resolved from the header row.
struct Columns {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(path: &Path, headers: &[String]) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                file: path.to_path_buf(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            trip_duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

/// Load the selected city and narrow it to the selected month and weekday.
pub fn load(data_dir: &Path, selection: &Selection) -> AppResult<TripTable> {
    let path = registry::data_file(data_dir, selection.city);
    let table = read_trips(&path)?;
    let raw_rows = table.len();

    let filtered = apply_filters(table, selection.month, selection.weekday);
    log::debug!(
        "{}: {} rows read, {} rows after filters (month={}, weekday={})",
        path.display(),
        raw_rows,
        filtered.len(),
        selection.month,
        selection.weekday
    );

    Ok(filtered)
}

/// Read a whole dataset file and derive the month and weekday of every trip.
pub fn read_trips(path: &Path) -> AppResult<TripTable> {
    if !path.is_file() {
        return Err(AppError::DataFileNotFound(path.to_path_buf()));
    }
    log::debug!("reading trips from {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let cols = Columns::resolve(path, &headers)?;

    let mut trips = Vec::new();
    for result in reader.records() {
        let record = result?;
        trips.push(parse_trip(&record, &cols)?);
    }

    Ok(TripTable {
        headers,
        trips,
        has_gender: cols.gender.is_some(),
        has_birth_year: cols.birth_year.is_some(),
    })
}

/// Keep the trips whose derived month and weekday pass the filters.
pub fn apply_filters(table: TripTable, month: MonthFilter, weekday: WeekdayFilter) -> TripTable {
    if month.is_all() && weekday.is_all() {
        return table;
    }

    let TripTable {
        headers,
        trips,
        has_gender,
        has_birth_year,
    } = table;

    let trips = trips
        .into_iter()
        .filter(|t| month.matches(t.month) && weekday.matches(t.weekday))
        .collect();

    TripTable {
        headers,
        trips,
        has_gender,
        has_birth_year,
    }
}

fn parse_trip(record: &StringRecord, cols: &Columns) -> AppResult<Trip> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
    let optional = |idx: Option<usize>| {
        idx.map(cell)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    };

    let raw_start = cell(cols.start_time);
    let start_time = parse_timestamp(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
        line,
        value: raw_start.to_string(),
    })?;

    let duration = parse_number(cell(cols.trip_duration), line, COL_TRIP_DURATION)?;

    let birth_year = match optional(cols.birth_year) {
        Some(v) => Some(parse_number(&v, line, COL_BIRTH_YEAR)?),
        None => None,
    };

    Ok(Trip {
        start_time,
        start_station: optional(Some(cols.start_station)),
        end_station: optional(Some(cols.end_station)),
        duration,
        user_type: optional(Some(cols.user_type)),
        gender: optional(cols.gender),
        birth_year,
        month: start_time.month(),
        weekday: start_time.weekday(),
        fields: record.iter().map(|f| f.to_string()).collect(),
    })
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn parse_number(s: &str, line: u64, column: &str) -> AppResult<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            line,
            column: column.to_string(),
            value: s.to_string(),
        })
}
