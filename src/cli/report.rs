//! Text rendering of the structured reports and raw-row pages.

use std::{
    io::{self, Write},
    time::Instant,
};

use chrono::TimeDelta;

use crate::{
    cli::style::Style,
    core::{
        data::{Availability, Dataset, Schema, Trip},
        error::EmptyResultError,
        selection::weekday_name,
    },
    stats::{
        BirthYearStats, DurationStats, Page, StationStats, TimeStats, UserStats, duration_stats,
        station_stats, time_stats, user_stats,
    },
};

const NO_DATA: &str = "No trips match this selection.";

// --- Sections ---

/// Heading, timed computation, body (or the no-data line), footer.
fn section<W: Write, T>(
    out: &mut W,
    style: &Style,
    title: &str,
    compute: impl FnOnce() -> Result<T, EmptyResultError>,
    body: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "\n{}\n", style.heading(title))?;
    let t0 = Instant::now();
    let result = compute();
    let elapsed = t0.elapsed();
    log::debug!("{title}: {} µs", elapsed.as_micros());
    match result {
        Ok(stats) => body(out, &stats)?,
        Err(EmptyResultError) => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", style.rule())
}

/// All four reports in order.
pub fn write_reports<W: Write>(out: &mut W, dataset: &Dataset, style: &Style) -> io::Result<()> {
    section(
        out,
        style,
        "Most Frequent Times of Travel",
        || time_stats(dataset),
        write_time,
    )?;
    section(
        out,
        style,
        "Most Popular Stations and Trip",
        || station_stats(dataset),
        write_stations,
    )?;
    section(
        out,
        style,
        "Trip Duration",
        || duration_stats(dataset),
        write_duration,
    )?;
    section(
        out,
        style,
        "User Stats",
        || user_stats(dataset),
        write_users,
    )
}

pub fn write_time<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    match stats.month_name() {
        Some(m) => writeln!(out, "Most common month: {m}")?,
        None => writeln!(out, "Most common month: {}", stats.month)?,
    }
    match stats.weekday() {
        Some(d) => writeln!(out, "Most common day of week: {}", weekday_name(d))?,
        None => writeln!(out, "Most common day of week: {}", stats.day_of_week)?,
    }
    writeln!(out, "Most common start hour: {:02}:00", stats.hour)
}

pub fn write_stations<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(
        out,
        "Most common start station: {} ({} trips)",
        stats.start_station.value, stats.start_station.trips
    )?;
    writeln!(
        out,
        "Most common stop station: {} ({} trips)",
        stats.stop_station.value, stats.stop_station.trips
    )?;
    let (from, to) = &stats.route.value;
    writeln!(
        out,
        "Most common trip: {from} -> {to} ({} trips)",
        stats.route.trips
    )
}

pub fn write_duration<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(
        out,
        "Total travel time: {} over {} trips",
        format_duration(stats.total_duration),
        stats.trips
    )?;
    writeln!(
        out,
        "Average trip duration: {:.2} minutes",
        stats.average_minutes
    )
}

pub fn write_users<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "User types:")?;
    if stats.user_types.is_empty() {
        writeln!(out, "  none recorded")?;
    }
    for (kind, n) in &stats.user_types {
        writeln!(out, "  {kind}: {n}")?;
    }

    match &stats.genders {
        Availability::Available(counts) => {
            writeln!(out, "Genders:")?;
            if counts.is_empty() {
                writeln!(out, "  none recorded")?;
            }
            for (gender, n) in counts {
                writeln!(out, "  {gender}: {n}")?;
            }
        }
        Availability::NotAvailable { column } => {
            writeln!(out, "No {column} data is available for this city.")?;
        }
    }

    match &stats.birth_years {
        Availability::Available(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }) => {
            writeln!(out, "Earliest birth year: {earliest}")?;
            writeln!(out, "Most recent birth year: {most_recent}")?;
            writeln!(out, "Most common birth year: {most_common}")
        }
        Availability::NotAvailable { column } => {
            writeln!(out, "No {column} data is available for this selection.")
        }
    }
}

/// `3 days 04:05:06`; whole seconds only.
#[must_use]
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().unsigned_abs();
    let (days, rem) = (secs / 86_400, secs % 86_400);
    format!(
        "{sign}{days} days {:02}:{:02}:{:02}",
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    )
}

// --- Raw rows ---

const TIME_W: usize = 19;
const INDEX_W: usize = 7;
const USER_W: usize = 10;
const GENDER_W: usize = 6;
const YEAR_W: usize = 10;
const GAP: &str = "  ";
const MIN_STATION_W: usize = 8;

/// Column widths for one table, fitted to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    schema: Schema,
    station_w: usize,
}

impl TableLayout {
    #[must_use]
    pub fn fit(width: usize, schema: Schema) -> Self {
        let mut fixed = INDEX_W + 2 * TIME_W + USER_W + 5 * GAP.len();
        if schema.has_gender {
            fixed += GENDER_W + GAP.len();
        }
        if schema.has_birth_year {
            fixed += YEAR_W + GAP.len();
        }
        let station_w = (width.saturating_sub(fixed) / 2).max(MIN_STATION_W);
        Self { schema, station_w }
    }

    fn header(&self) -> String {
        let mut line = format!(
            "{:>INDEX_W$}{GAP}{:<TIME_W$}{GAP}{:<TIME_W$}{GAP}{:<sw$}{GAP}{:<sw$}{GAP}{:<USER_W$}",
            "",
            "Start Time",
            "End Time",
            "Start Station",
            "End Station",
            "User Type",
            sw = self.station_w,
        );
        if self.schema.has_gender {
            line.push_str(&format!("{GAP}{:<GENDER_W$}", "Gender"));
        }
        if self.schema.has_birth_year {
            line.push_str(&format!("{GAP}{:<YEAR_W$}", "Birth Year"));
        }
        line.trim_end().to_owned()
    }

    fn row(&self, index: usize, trip: &Trip) -> String {
        let user = trip.user_type.map_or("", |u| u.as_str());
        let mut line = format!(
            "{index:>INDEX_W$}{GAP}{:<TIME_W$}{GAP}{:<TIME_W$}{GAP}{:<sw$}{GAP}{:<sw$}{GAP}{user:<USER_W$}",
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            truncate(&trip.start_station, self.station_w),
            truncate(&trip.end_station, self.station_w),
            sw = self.station_w,
        );
        if self.schema.has_gender {
            let gender = trip.gender.map_or("", |g| g.as_str());
            line.push_str(&format!("{GAP}{gender:<GENDER_W$}"));
        }
        if self.schema.has_birth_year {
            let year = trip.birth_year.map(|y| y.to_string()).unwrap_or_default();
            line.push_str(&format!("{GAP}{year:<YEAR_W$}"));
        }
        line.trim_end().to_owned()
    }
}

/// Cut to `width` characters, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn write_page<W: Write>(out: &mut W, page: &Page<'_>, layout: &TableLayout) -> io::Result<()> {
    writeln!(out, "{}", layout.header())?;
    for (offset, trip) in page.rows.iter().enumerate() {
        writeln!(out, "{}", layout.row(page.start + offset, trip))?;
    }
    Ok(())
}
