//! Canonical city / month / day values and the pure validators that produce
//! them from user text.
//!
//! Every validator is case-insensitive and ignores surrounding whitespace.
//! A rejected input comes back as a [`SelectionError`] carrying the accepted
//! spellings, so a prompt can simply print it and ask again.

use std::{fmt, str::FromStr};

use chrono::Weekday;
use itertools::Itertools;

use crate::core::error::SelectionError;

const ALL: &str = "all";

// --- City ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case spelling accepted at the prompt.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's export inside the data directory.
    #[must_use]
    pub const fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `new_york_city` is the file stem, accept it too
        let key = normalize(s).replace('_', " ");
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| SelectionError::UnknownCity {
                input: s.trim().to_owned(),
                expected: City::ALL.iter().map(|c| c.key()).join(", "),
            })
    }
}

// --- Month ---

/// The reference exports only cover the first half of the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar number, January = 1.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize).copied())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl FromStr for MonthFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key == ALL {
            return Ok(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&key))
            .map(MonthFilter::Only)
            .ok_or_else(|| SelectionError::UnknownMonth {
                input: s.trim().to_owned(),
                expected: std::iter::once(ALL.to_owned())
                    .chain(Month::ALL.iter().map(|m| m.name().to_lowercase()))
                    .join(", "),
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

// --- Day ---

/// Monday-first, matching the derived day-of-week index.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
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

/// Inverse of `Weekday::num_days_from_monday`.
#[must_use]
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    WEEKDAYS.get(index as usize).copied()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl FromStr for DayFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key == ALL {
            return Ok(DayFilter::All);
        }
        // full names only; chrono's own parser also takes "mon", "tue", ...
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(&key))
            .map(DayFilter::Only)
            .ok_or_else(|| SelectionError::UnknownDay {
                input: s.trim().to_owned(),
                expected: std::iter::once(ALL.to_owned())
                    .chain(WEEKDAYS.iter().map(|d| weekday_name(*d).to_lowercase()))
                    .join(", "),
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

// --- Selection ---

/// One validated (city, month, day) request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    #[must_use]
    pub const fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Validate all three raw inputs at once.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, SelectionError> {
        Ok(Self::new(city.parse()?, month.parse()?, day.parse()?))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / month: {} / day: {}", self.city, self.month, self.day)
    }
}

#[inline]
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
