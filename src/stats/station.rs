//! Most popular stations and trip.

use crate::{
    core::{data::Dataset, error::EmptyResultError},
    stats::{counts_in_order, first_max, mode, non_empty, sorted_counts},
};

/// A winning value and how many trips it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub trips: usize,
}

impl<T> From<(T, usize)> for Popular<T> {
    fn from((value, trips): (T, usize)) -> Self {
        Self { value, trips }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Popular<String>,
    /// Counted over the *start* station column, as the historical report
    /// did. Ties go to the station seen first.
    pub stop_station: Popular<String>,
    /// (start, end); ties go to the lowest pair.
    pub route: Popular<(String, String)>,
}

pub fn station_stats(dataset: &Dataset) -> Result<StationStats, EmptyResultError> {
    non_empty(dataset)?;

    let start_station = mode(dataset.iter().map(|t| t.start_station.as_str()))
        .ok_or(EmptyResultError)?;
    let stop_station = first_max(counts_in_order(
        dataset.iter().map(|t| t.start_station.as_str()),
    ))
    .ok_or(EmptyResultError)?;
    let route = first_max(sorted_counts(
        dataset
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    ))
    .ok_or(EmptyResultError)?;

    Ok(StationStats {
        start_station: Popular::from((start_station.0.to_owned(), start_station.1)),
        stop_station: Popular::from((stop_station.0.to_owned(), stop_station.1)),
        route: Popular::from((
            (route.0.0.to_owned(), route.0.1.to_owned()),
            route.1,
        )),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::loader::read_trips;

    fn dataset(rows: &[(&str, &str)]) -> Dataset {
        let mut csv = String::from("Start Time,End Time,Start Station,End Station,User Type\n");
        for (start, end) in rows {
            csv.push_str(&format!(
                "2017-04-03 08:00:00,2017-04-03 08:12:00,{start},{end},Subscriber\n"
            ));
        }
        read_trips(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_most_common_stations_and_route() {
        let ds = dataset(&[
            ("Canal St", "Clark St"),
            ("Union Sq", "Canal St"),
            ("Canal St", "Clark St"),
            ("Union Sq", "Clark St"),
            ("Canal St", "Union Sq"),
        ]);
        let stats = station_stats(&ds).unwrap();
        assert_eq!(stats.start_station, Popular { value: "Canal St".into(), trips: 3 });
        assert_eq!(stats.stop_station.value, "Canal St");
        assert_eq!(
            stats.route.value,
            ("Canal St".to_owned(), "Clark St".to_owned())
        );
        assert_eq!(stats.route.trips, 2);
    }

    #[test]
    fn test_stop_station_reads_start_column() {
        // every trip ends at "Dock", which the stop statistic never sees
        let ds = dataset(&[("Pier", "Dock"), ("Mall", "Dock"), ("Pier", "Dock")]);
        let stats = station_stats(&ds).unwrap();
        assert_eq!(stats.stop_station.value, "Pier");
    }

    #[test]
    fn test_tie_breaks() {
        let ds = dataset(&[("Zoo", "B"), ("Arena", "A"), ("Zoo", "A"), ("Arena", "B")]);
        let stats = station_stats(&ds).unwrap();
        // mode: lowest value
        assert_eq!(stats.start_station.value, "Arena");
        // value counts: first seen
        assert_eq!(stats.stop_station.value, "Zoo");
        // grouped pairs: lowest pair
        assert_eq!(stats.route.value, ("Arena".to_owned(), "A".to_owned()));
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(station_stats(&Dataset::default()), Err(EmptyResultError));
    }
}
