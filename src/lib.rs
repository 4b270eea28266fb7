//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod stats;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    data::{Availability, Dataset, Gender, Schema, Trip, UserType},
    error::{ConfigError, DataSourceError, EmptyResultError, ExploreError, SelectionError},
    filter::filter,
    loader::{load, read_trips},
    selection::{City, DayFilter, Month, MonthFilter, Selection},
};

pub use stats::{
    DurationStats, Page, StationStats, Summary, TimeStats, UserStats, next_page, pages,
};

/// Load, filter and summarise one selection. Returns the filtered trips
/// alongside the reports so callers can page through them afterwards.
pub fn explore(
    selection: &Selection,
    config: &Config,
) -> Result<(Dataset, Summary), DataSourceError> {
    let dataset = load(selection.city, config)?;
    let filtered = filter(&dataset, selection.month, selection.day);
    let summary = Summary::of(&filtered);
    Ok((filtered, summary))
}
