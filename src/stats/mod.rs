//! Descriptive statistics over a (filtered) [`Dataset`].
//!
//! Every reporter takes a read-only view and returns a structured result, or
//! [`EmptyResultError`] when there are no trips to describe.

pub mod duration;
pub mod pager;
pub mod station;
pub mod time;
pub mod users;

use std::{collections::BTreeMap, hash::Hash};

use indexmap::IndexMap;

pub use duration::{DurationStats, duration_stats};
pub use pager::{Page, Pages, next_page, pages};
pub use station::{Popular, StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use users::{BirthYearStats, UserStats, user_stats};

use crate::core::{data::Dataset, error::EmptyResultError};

/// All four reports for one pipeline pass, computed in display order.
#[derive(Debug, Clone)]
pub struct Summary {
    pub time: Result<TimeStats, EmptyResultError>,
    pub stations: Result<StationStats, EmptyResultError>,
    pub duration: Result<DurationStats, EmptyResultError>,
    pub users: Result<UserStats, EmptyResultError>,
}

impl Summary {
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            time: time_stats(dataset),
            stations: station_stats(dataset),
            duration: duration_stats(dataset),
            users: user_stats(dataset),
        }
    }
}

#[inline]
pub(crate) fn non_empty(dataset: &Dataset) -> Result<(), EmptyResultError> {
    if dataset.is_empty() {
        Err(EmptyResultError)
    } else {
        Ok(())
    }
}

/// Key with the highest count; the earliest key in iteration order wins ties.
pub(crate) fn first_max<K>(counts: impl IntoIterator<Item = (K, usize)>) -> Option<(K, usize)> {
    counts.into_iter().fold(None, |best, (key, n)| match best {
        Some((_, top)) if top >= n => best,
        _ => Some((key, n)),
    })
}

/// Occurrences per value, keys sorted.
pub(crate) fn sorted_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Occurrences per value, keys in first-appearance order.
pub(crate) fn counts_in_order<T: Hash + Eq>(
    values: impl IntoIterator<Item = T>,
) -> IndexMap<T, usize> {
    let mut counts = IndexMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value; ties go to the lowest.
pub(crate) fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<(T, usize)> {
    first_max(sorted_counts(values))
}
