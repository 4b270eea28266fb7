use std::{fs, io::Cursor, path::Path};

use bikeshare_explorer::{
    Availability, City, Config, DataSourceError, DayFilter, Month, MonthFilter, Selection,
    UserType,
    cli::{shell::Shell, style::Style},
    explore, filter, load, next_page,
    stats::{duration_stats, station_stats, time_stats, user_stats},
};
use chrono::{TimeDelta, Weekday};
use tempfile::TempDir;

const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:00:00,2017-01-02 08:01:00,60,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1985.0
2,2017-01-03 09:00:00,2017-01-03 09:02:00,120,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1990.0
3,2017-02-06 08:30:00,2017-02-06 08:33:00,180,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Subscriber,Male,1985.0
";

/// 12 trips, every one on a Wednesday in March 2017.
fn washington() -> String {
    let mut csv = String::from(",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n");
    for i in 0..12 {
        let day = [1, 8, 15, 22, 29][i % 5];
        csv.push_str(&format!(
            "{i},2017-03-{day:02} 17:{i:02}:00,2017-03-{day:02} 17:{:02}:00,600,Station {i},Union Station,{}\n",
            i + 10,
            if i % 3 == 0 { "Customer" } else { "Subscriber" },
        ));
    }
    csv
}

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "chicago.csv", CHICAGO);
    write(dir.path(), "washington.csv", &washington());
    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn config(dir: &TempDir) -> Config {
    Config::builder().data_dir(dir.path()).build().unwrap()
}

#[test]
fn test_three_subscriber_trips_end_to_end() {
    let dir = data_dir();
    let selection = Selection::parse("Chicago", "all", "all").unwrap();
    let (ds, summary) = explore(&selection, &config(&dir)).unwrap();
    assert_eq!(ds.len(), 3);

    let stations = summary.stations.unwrap();
    assert_eq!(stations.start_station.value, "Canal St & Adams St");
    assert_eq!(stations.start_station.trips, 2);

    let users = summary.users.unwrap();
    assert_eq!(users.user_types.len(), 1);
    assert_eq!(users.user_types[&UserType::Subscriber], 3);

    let duration = summary.duration.unwrap();
    assert_eq!(duration.total_duration, TimeDelta::seconds(360));
    assert!((duration.average_minutes - 2.0).abs() < f64::EPSILON);

    let time = summary.time.unwrap();
    assert_eq!(time.month_name(), Some(Month::January));
    assert_eq!(time.weekday(), Some(Weekday::Mon));
    assert_eq!(time.hour, 8);
}

#[test]
fn test_filters_compose_and_preserve_order() {
    let dir = data_dir();
    let ds = load(City::Chicago, &config(&dir)).unwrap();

    let mondays = filter(&ds, MonthFilter::All, DayFilter::Only(Weekday::Mon));
    let starts: Vec<_> = mondays.iter().map(|t| t.start_time.to_string()).collect();
    assert_eq!(starts, ["2017-01-02 08:00:00", "2017-02-06 08:30:00"]);

    let jan_mondays = filter(
        &ds,
        MonthFilter::Only(Month::January),
        DayFilter::Only(Weekday::Mon),
    );
    assert_eq!(jan_mondays.len(), 1);
    assert_eq!(filter(&ds, MonthFilter::All, DayFilter::All), ds);
}

#[test]
fn test_empty_selection_degrades_gracefully() {
    let dir = data_dir();
    let selection = Selection::parse("chicago", "june", "sunday").unwrap();
    let (ds, summary) = explore(&selection, &config(&dir)).unwrap();
    assert!(ds.is_empty());
    assert!(summary.time.is_err());
    assert!(summary.stations.is_err());
    assert!(summary.duration.is_err());
    assert!(summary.users.is_err());
    assert!(next_page(&ds, 0).is_empty());
}

#[test]
fn test_washington_has_no_demographics() {
    let dir = data_dir();
    let ds = load(City::Washington, &config(&dir)).unwrap();
    let users = user_stats(&ds).unwrap();
    assert!(matches!(users.genders, Availability::NotAvailable { .. }));
    assert!(matches!(users.birth_years, Availability::NotAvailable { .. }));
    assert_eq!(users.user_types[&UserType::Customer], 4);
    assert_eq!(users.user_types[&UserType::Subscriber], 8);

    // the other reports still work on a reduced schema
    assert!(time_stats(&ds).is_ok());
    assert!(station_stats(&ds).is_ok());
    assert_eq!(duration_stats(&ds).unwrap().trips, 12);
}

#[test]
fn test_missing_city_file() {
    let dir = data_dir();
    let err = load(City::NewYorkCity, &config(&dir)).unwrap_err();
    assert!(matches!(err, DataSourceError::Open { .. }));
}

#[test]
fn test_paging_twelve_rows() {
    let dir = data_dir();
    let ds = load(City::Washington, &config(&dir)).unwrap();
    let mut cursor = 0;
    let mut seen = vec![];
    loop {
        let page = next_page(&ds, cursor);
        if page.is_empty() {
            break;
        }
        seen.push((page.rows.len(), page.cursor));
        cursor = page.cursor;
    }
    assert_eq!(seen, [(5, 5), (5, 10), (2, 12)]);
}

#[test]
fn test_interactive_session_with_raw_rows() {
    let dir = data_dir();
    let script = "\
washington
march
wednesday
yes
yes
yes
no
";
    let mut shell = Shell::new(
        Cursor::new(script),
        Vec::new(),
        config(&dir),
        Style::plain(120),
    );
    shell.run().unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();

    assert!(out.contains("Computing along 12 trips"));
    assert!(out.contains("No Gender data is available for this city."));
    assert!(out.contains("Station 0"));
    assert!(out.contains("Station 11"));
    assert!(out.contains("That was the last trip."));
    assert_eq!(out.matches("Would you like to see more?").count(), 2);
    assert_eq!(out.matches("Would you like to restart?").count(), 1);
}
