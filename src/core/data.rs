//! In-memory trip table: one [`Trip`] per CSV row plus the per-city schema.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};

use crate::core::selection::weekday_from_index;

// --- Categories ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserType {
    Customer,
    Dependent,
    Subscriber,
}

impl UserType {
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "Customer" => Some(Self::Customer),
            "Dependent" => Some(Self::Dependent),
            "Subscriber" => Some(Self::Subscriber),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Dependent => "Dependent",
            Self::Subscriber => "Subscriber",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared in sort order so grouped output lists Female first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "Female" => Some(Self::Female),
            "Male" => Some(Self::Male),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Row ---

/// One trip with its derived time columns.
///
/// `gender` and `birth_year` are `None` both for blank cells and for cities
/// whose export lacks the column; [`Schema`] tells the two apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<UserType>,
    pub gender: Option<Gender>,
    pub birth_year: Option<u16>,
    /// 1 = January.
    pub month: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u32,
    /// 0..=23
    pub hour: u32,
}

impl Trip {
    /// Build a row and compute the derived columns from `start_time`.
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
        }
    }

    #[must_use]
    pub fn with_user_type(mut self, user_type: Option<UserType>) -> Self {
        self.user_type = user_type;
        self
    }
    #[must_use]
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }
    #[must_use]
    pub fn with_birth_year(mut self, birth_year: Option<u16>) -> Self {
        self.birth_year = birth_year;
        self
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        weekday_from_index(self.day_of_week).unwrap_or(Weekday::Mon)
    }

    /// End minus start; negative if the source row is inverted.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

// --- Schema ---

/// Optional columns the source file provided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    /// Every optional column present (Chicago, New York City).
    pub const FULL: Schema = Schema {
        has_gender: true,
        has_birth_year: true,
    };
}

/// A per-column value that only exists for some cities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable { column: &'static str },
}

impl<T> Availability<T> {
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            Self::NotAvailable { .. } => None,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

// --- Table ---

/// Trips in file order plus the schema they were read with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub trips: Vec<Trip>,
    pub schema: Schema,
}

impl Dataset {
    #[must_use]
    pub fn new(trips: Vec<Trip>, schema: Schema) -> Self {
        Self { trips, schema }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
