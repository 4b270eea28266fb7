//! Total and average trip duration.

use chrono::TimeDelta;

use crate::{
    core::{data::Dataset, error::EmptyResultError},
    stats::non_empty,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    /// Sum of per-trip travel time; may span several days.
    pub total_duration: TimeDelta,
    /// Mean trip length in minutes.
    pub average_minutes: f64,
}

pub fn duration_stats(dataset: &Dataset) -> Result<DurationStats, EmptyResultError> {
    non_empty(dataset)?;
    let trips = dataset.len();

    // travel time from epoch offsets
    let total_micros: i64 = dataset
        .iter()
        .map(|t| {
            t.end_time.and_utc().timestamp_micros() - t.start_time.and_utc().timestamp_micros()
        })
        .sum();
    let total_duration = TimeDelta::microseconds(total_micros);

    // trip time from direct subtraction
    let elapsed = dataset
        .iter()
        .fold(TimeDelta::zero(), |acc, t| acc + t.duration());
    #[allow(clippy::cast_precision_loss)]
    let mean_seconds = elapsed.num_milliseconds() as f64 / 1000.0 / trips as f64;

    Ok(DurationStats {
        trips,
        total_duration,
        average_minutes: mean_seconds / 60.0,
    })
}
