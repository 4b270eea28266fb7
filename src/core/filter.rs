//! Month / day-of-week narrowing of a loaded [`Dataset`].

use crate::core::{
    data::{Dataset, Trip},
    selection::{DayFilter, MonthFilter},
};

impl MonthFilter {
    #[inline]
    #[must_use]
    pub fn matches(self, trip: &Trip) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => trip.month == m.number(),
        }
    }
}

impl DayFilter {
    #[inline]
    #[must_use]
    pub fn matches(self, trip: &Trip) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => trip.day_of_week == d.num_days_from_monday(),
        }
    }
}

/// Keep the trips matching both filters, in their original order.
///
/// The input is left untouched; the result shares its schema. An empty result
/// is valid.
#[must_use]
pub fn filter(dataset: &Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    match month {
        MonthFilter::All => log::debug!("no month filter"),
        MonthFilter::Only(m) => log::debug!("keeping trips started in {m}"),
    }
    match day {
        DayFilter::All => log::debug!("no day-of-week filter"),
        DayFilter::Only(_) => log::debug!("keeping trips started on {day}s"),
    }

    let trips: Vec<Trip> = dataset
        .iter()
        .filter(|t| month.matches(t) && day.matches(t))
        .cloned()
        .collect();

    log::info!("computing along {} of {} trips", trips.len(), dataset.len());
    if trips.is_empty() {
        log::warn!("no trips match month {month} / day {day}");
    }
    Dataset::new(trips, dataset.schema)
}
