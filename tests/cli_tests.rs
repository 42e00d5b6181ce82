use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bikeshare, fixture_dir, no_config, temp_dir};

#[test]
fn test_explore_is_the_default_command() {
    let dir = fixture_dir("cli_explore");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--data-dir", &data_dir, "--config", &no_config(&dir)])
        .write_stdin("Chicago\nfeb\nall\nyes\nyes\nno\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("OK, we can find 0 records."))
        .stdout(contains("There are no rows to show."))
        .stdout(contains("No data available for this selection."))
        .stdout(contains("Thank you! See you next time."));
}

#[test]
fn test_explore_fails_when_input_ends() {
    let dir = fixture_dir("cli_explore_eof");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args(["--data-dir", &data_dir, "--config", &no_config(&dir), "explore"])
        .write_stdin("chicago\n")
        .assert()
        .failure()
        .stderr(contains("Input closed"));
}

#[test]
fn test_report_for_city_without_demographics() {
    let dir = fixture_dir("cli_report_washington");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args([
            "--data-dir",
            &data_dir,
            "--config",
            &no_config(&dir),
            "report",
            "--city",
            "washington",
        ])
        .assert()
        .success()
        .stdout(contains("OK, we can find 3 records."))
        .stdout(contains("The day (of week) with the most trips: Sunday"))
        .stdout(contains("Total travel time: 0 days 0:06:00"))
        .stdout(contains("There are no user gender data available for Washington."))
        .stdout(contains("Run time:"))
        .stdout(contains("Start Station  Trips").not());
}

#[test]
fn test_report_with_filters_and_top_listings() {
    let dir = fixture_dir("cli_report_top");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args([
            "--data-dir",
            &data_dir,
            "--config",
            &no_config(&dir),
            "report",
            "--city",
            "CHICAGO",
            "--month",
            "mar",
            "--day",
            "mo",
            "--top",
        ])
        .assert()
        .success()
        .stdout(contains("Report for\n-city: Chicago\n-month: Mar"))
        .stdout(contains("OK, we can find 4 records."))
        .stdout(contains("The most popular starting station: State St"))
        .stdout(contains("Start Station  Trips"))
        .stdout(contains("End Station  Trips"));
}

#[test]
fn test_report_rejects_invalid_selection() {
    let dir = fixture_dir("cli_report_invalid");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args([
            "--data-dir",
            &data_dir,
            "--config",
            &no_config(&dir),
            "report",
            "--city",
            "Boston",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid city: 'Boston'"));

    bikeshare()
        .args([
            "--data-dir",
            &data_dir,
            "--config",
            &no_config(&dir),
            "report",
            "--city",
            "Chicago",
            "--month",
            "Dec",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 'Dec'"));
}

#[test]
fn test_report_fails_on_missing_dataset() {
    let dir = temp_dir("cli_report_missing");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .args([
            "--data-dir",
            &data_dir,
            "--config",
            &no_config(&dir),
            "report",
            "--city",
            "New York City",
        ])
        .assert()
        .failure()
        .stderr(contains("Data file not found").and(contains("new_york_city.csv")));
}

#[test]
fn test_cities_lists_registry() {
    let dir = fixture_dir("cli_cities");
    let data_dir = dir.to_string_lossy().to_string();

    bikeshare()
        .env("NO_COLOR", "1")
        .args(["--data-dir", &data_dir, "--config", &no_config(&dir), "cities"])
        .assert()
        .success()
        .stdout(contains("Chicago"))
        .stdout(contains("new_york_city.csv (missing)"))
        .stdout(contains("washington.csv (missing)").not());
}

#[test]
fn test_config_init_and_print() {
    let dir = temp_dir("cli_config_init");
    let cfg_path = dir.join("conf").join("bikeshare.yaml");
    let cfg_str = cfg_path.to_string_lossy().to_string();

    bikeshare()
        .env("NO_COLOR", "1")
        .args(["--config", &cfg_str, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));

    let content = fs::read_to_string(&cfg_path).expect("config written");
    assert!(content.contains("page_size: 5"));

    bikeshare()
        .env("NO_COLOR", "1")
        .args(["--config", &cfg_str, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    fs::write(&cfg_path, "top_n: 3\nshow_run_time: false\n").unwrap();

    bikeshare()
        .args(["--config", &cfg_str, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("top_n: 3"))
        .stdout(contains("page_size: 5"))
        .stdout(contains("show_run_time: false"));
}

#[test]
fn test_config_file_drives_report() {
    let dir = fixture_dir("cli_config_report");
    let cfg_path = dir.join("bikeshare.yaml");
    fs::write(
        &cfg_path,
        format!(
            "data_dir: {}\nshow_run_time: false\n",
            dir.to_string_lossy()
        ),
    )
    .unwrap();

    bikeshare()
        .args([
            "--config",
            &cfg_path.to_string_lossy(),
            "report",
            "--city",
            "chicago",
        ])
        .assert()
        .success()
        .stdout(contains("OK, we can find 10 records."))
        .stdout(contains("Run time:").not());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = temp_dir("cli_config_malformed");
    let cfg_path = dir.join("bikeshare.yaml");
    fs::write(&cfg_path, "page_size: [not a number\n").unwrap();

    bikeshare()
        .args(["--config", &cfg_path.to_string_lossy(), "cities"])
        .assert()
        .failure()
        .stderr(contains("Configuration parse error"));
}
