//! Most frequent times of travel.

use chrono::Weekday;

use crate::{
    core::{
        data::{Dataset, Trip},
        error::EmptyResultError,
        selection::{Month, weekday_from_index},
    },
    stats::{mode, non_empty},
};

/// Modes of the derived start-time columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1 = January.
    pub month: u32,
    /// 0 = Monday.
    pub day_of_week: u32,
    pub hour: u32,
}

impl TimeStats {
    #[must_use]
    pub fn month_name(&self) -> Option<Month> {
        Month::from_number(self.month)
    }

    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        weekday_from_index(self.day_of_week)
    }
}

pub fn time_stats(dataset: &Dataset) -> Result<TimeStats, EmptyResultError> {
    non_empty(dataset)?;
    let column = |f: fn(&Trip) -> u32| {
        mode(dataset.iter().map(f))
            .map(|(v, _)| v)
            .ok_or(EmptyResultError)
    };
    Ok(TimeStats {
        month: column(|t| t.month)?,
        day_of_week: column(|t| t.day_of_week)?,
        hour: column(|t| t.hour)?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::loader::read_trips;

    #[test]
    fn test_modes() {
        // Mon 9h (Jan), Mon 9h (Feb), Tue 17h (Feb)
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-01-02 09:10:00,2017-01-02 09:20:00,A,B,Subscriber
2017-02-06 09:30:00,2017-02-06 09:40:00,A,B,Subscriber
2017-02-07 17:00:00,2017-02-07 17:15:00,A,B,Customer
";
        let stats = time_stats(&read_trips(csv.as_bytes()).unwrap()).unwrap();
        assert_eq!(stats.month_name(), Some(Month::February));
        assert_eq!(stats.weekday(), Some(Weekday::Mon));
        assert_eq!(stats.hour, 9);
    }

    #[test]
    fn test_ties_pick_lowest_value() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-03-03 22:00:00,2017-03-03 22:05:00,A,B,Subscriber
2017-01-06 06:00:00,2017-01-06 06:05:00,A,B,Subscriber
";
        let ds = read_trips(csv.as_bytes()).unwrap();
        let first = time_stats(&ds).unwrap();
        assert_eq!(first, TimeStats { month: 1, day_of_week: 4, hour: 6 });
        assert_eq!(time_stats(&ds).unwrap(), first);
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(time_stats(&Dataset::default()), Err(EmptyResultError));
    }
}
