mod common;
use bikeshare::data::{apply_filters, load, read_trips};
use bikeshare::errors::AppError;
use bikeshare::models::{City, MonthFilter, Selection, WeekdayFilter};
use chrono::Weekday;
use common::{CHICAGO_CSV, WASHINGTON_CSV, fixture_dir, load_fixture, temp_dir, write_city};

#[test]
fn test_unfiltered_load_keeps_every_row() {
    let dir = fixture_dir("loader_unfiltered");

    let table = load(&dir, &Selection::unfiltered(City::Chicago)).expect("load");

    assert_eq!(table.len(), 10);
    assert!(table.has_gender);
    assert!(table.has_birth_year);
    assert_eq!(table.headers[1], "Start Time");
}

#[test]
fn test_month_and_weekday_filters() {
    let dir = fixture_dir("loader_filters");

    let jan_mo = Selection::new(City::Chicago, MonthFilter::Jan, WeekdayFilter::Mo);
    let table = load(&dir, &jan_mo).expect("load");
    assert_eq!(table.len(), 6);
    assert!(table.iter().all(|t| t.month == 1 && t.weekday == Weekday::Mon));

    let feb = Selection::new(City::Chicago, MonthFilter::Feb, WeekdayFilter::All);
    let table = load(&dir, &feb).expect("load");
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());

    let mar = Selection::new(City::Chicago, MonthFilter::Mar, WeekdayFilter::All);
    assert_eq!(load(&dir, &mar).expect("load").len(), 4);

    let tue = Selection::new(City::Chicago, MonthFilter::All, WeekdayFilter::Tu);
    assert_eq!(load(&dir, &tue).expect("load").len(), 0);
}

#[test]
fn test_weekday_filter_is_a_prefix_match() {
    let table = load_fixture("loader_weekday_prefix", WASHINGTON_CSV);

    let sundays = apply_filters(table.clone(), MonthFilter::All, WeekdayFilter::Su);
    assert_eq!(sundays.len(), 2);

    let saturdays = apply_filters(table, MonthFilter::Jun, WeekdayFilter::Sa);
    assert_eq!(saturdays.len(), 1);
    assert_eq!(saturdays.trips[0].start_station.as_deref(), Some("A St"));
}

#[test]
fn test_derived_columns() {
    let table = load_fixture("loader_derived", CHICAGO_CSV);
    let first = &table.trips[0];

    assert_eq!(first.month, 1);
    assert_eq!(first.weekday, Weekday::Mon);
    assert_eq!(first.hour(), 8);
    assert_eq!(first.duration, 600.0);
    assert_eq!(first.birth_year, Some(1990.0));
    assert_eq!(first.fields.len(), table.headers.len());

    // empty cells are missing values
    assert_eq!(table.trips[2].gender, None);
    assert_eq!(table.trips[2].birth_year, None);
}

#[test]
fn test_optional_columns_follow_the_header() {
    let table = load_fixture("loader_no_gender", WASHINGTON_CSV);

    assert!(!table.has_gender);
    assert!(!table.has_birth_year);
    assert!(table.iter().all(|t| t.gender.is_none()));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = temp_dir("loader_missing_file");

    let err = load(&dir, &Selection::unfiltered(City::Washington)).unwrap_err();
    assert!(matches!(err, AppError::DataFileNotFound(_)));
}

#[test]
fn test_missing_required_column_is_an_error() {
    let dir = temp_dir("loader_missing_column");
    let path = write_city(
        &dir,
        City::Chicago,
        "Start Time,Start Station,End Station,User Type\n2017-01-02 08:10:00,A,B,Subscriber\n",
    );

    match read_trips(&path).unwrap_err() {
        AppError::MissingColumn { column, .. } => assert_eq!(column, "Trip Duration"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_timestamp_is_an_error() {
    let dir = temp_dir("loader_bad_timestamp");
    let path = write_city(
        &dir,
        City::Chicago,
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-02 08:10:00,60,A,B,Subscriber\n\
         yesterday,60,A,B,Subscriber\n",
    );

    match read_trips(&path).unwrap_err() {
        AppError::InvalidTimestamp { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_duration_is_an_error() {
    let dir = temp_dir("loader_bad_duration");
    let path = write_city(
        &dir,
        City::Chicago,
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-02 08:10:00,sixty,A,B,Subscriber\n",
    );

    assert!(matches!(
        read_trips(&path).unwrap_err(),
        AppError::InvalidNumber { .. }
    ));
}

#[test]
fn test_alternative_timestamp_formats() {
    let table = load_fixture(
        "loader_timestamp_formats",
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-02-07T07:30:00,60,A,B,Subscriber\n\
         2017-02-07 07:45:12.250,60,A,B,Subscriber\n\
         2017-02-07 23:59,60,A,B,Subscriber\n",
    );

    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|t| t.weekday == Weekday::Tue && t.month == 2));
    assert_eq!(table.trips[2].hour(), 23);
}
