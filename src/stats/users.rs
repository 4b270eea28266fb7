//! Rider demographics.
//!
//! User type exists in every export; gender and birth year only where the
//! schema says so. Missing columns come back as
//! [`Availability::NotAvailable`], never as zero counts.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{
    core::{
        constants::{BIRTH_YEAR, GENDER},
        data::{Availability, Dataset, Gender, UserType},
        error::EmptyResultError,
    },
    stats::{counts_in_order, mode, non_empty, sorted_counts},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: u16,
    pub most_recent: u16,
    pub most_common: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// First-appearance order; blank cells are not counted.
    pub user_types: IndexMap<UserType, usize>,
    pub genders: Availability<BTreeMap<Gender, usize>>,
    pub birth_years: Availability<BirthYearStats>,
}

pub fn user_stats(dataset: &Dataset) -> Result<UserStats, EmptyResultError> {
    non_empty(dataset)?;

    let user_types = counts_in_order(dataset.iter().filter_map(|t| t.user_type));

    let genders = if dataset.schema.has_gender {
        Availability::Available(sorted_counts(dataset.iter().filter_map(|t| t.gender)))
    } else {
        Availability::NotAvailable { column: GENDER }
    };

    let birth_years = if dataset.schema.has_birth_year {
        birth_year_stats(dataset).map_or(
            Availability::NotAvailable { column: BIRTH_YEAR },
            Availability::Available,
        )
    } else {
        Availability::NotAvailable { column: BIRTH_YEAR }
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

/// `None` when every cell in the column is blank.
fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years = || dataset.iter().filter_map(|t| t.birth_year);
    Some(BirthYearStats {
        earliest: years().min()?,
        most_recent: years().max()?,
        most_common: mode(years())?.0,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::loader::read_trips;

    const HEADER_FULL: &str =
        "Start Time,End Time,Start Station,End Station,User Type,Gender,Birth Year\n";
    const HEADER_SHORT: &str = "Start Time,End Time,Start Station,End Station,User Type\n";

    fn row(user: &str, extra: &str) -> String {
        format!("2017-06-01 08:00:00,2017-06-01 08:20:00,A,B,{user}{extra}\n")
    }

    #[test]
    fn test_full_schema() {
        let csv = [
            HEADER_FULL.to_owned(),
            row("Subscriber", ",Male,1980.0"),
            row("Customer", ",,"),
            row("Subscriber", ",Female,1991.0"),
            row("Dependent", ",Male,1991.0"),
            row("Subscriber", ",Male,1975.0"),
        ]
        .concat();
        let stats = user_stats(&read_trips(csv.as_bytes()).unwrap()).unwrap();

        let types: Vec<_> = stats.user_types.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            types,
            [
                (UserType::Subscriber, 3),
                (UserType::Customer, 1),
                (UserType::Dependent, 1)
            ]
        );

        let genders = stats.genders.as_option().unwrap();
        let genders: Vec<_> = genders.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(genders, [(Gender::Female, 1), (Gender::Male, 3)]);

        assert_eq!(
            stats.birth_years,
            Availability::Available(BirthYearStats {
                earliest: 1975,
                most_recent: 1991,
                most_common: 1991,
            })
        );
    }

    #[test]
    fn test_missing_columns_are_flagged() {
        let csv = [HEADER_SHORT.to_owned(), row("Subscriber", "")].concat();
        let stats = user_stats(&read_trips(csv.as_bytes()).unwrap()).unwrap();
        assert_eq!(stats.genders, Availability::NotAvailable { column: GENDER });
        assert_eq!(
            stats.birth_years,
            Availability::NotAvailable { column: BIRTH_YEAR }
        );
    }

    #[test]
    fn test_blank_birth_years_are_not_available() {
        let csv = [HEADER_FULL.to_owned(), row("Customer", ",,")].concat();
        let stats = user_stats(&read_trips(csv.as_bytes()).unwrap()).unwrap();
        assert!(stats.genders.as_option().unwrap().is_empty());
        assert!(!stats.birth_years.is_available());
    }

    #[test]
    fn test_birth_year_mode_tie_picks_earliest() {
        let csv = [
            HEADER_FULL.to_owned(),
            row("Subscriber", ",Male,1990"),
            row("Subscriber", ",Male,1985"),
        ]
        .concat();
        let stats = user_stats(&read_trips(csv.as_bytes()).unwrap()).unwrap();
        let years = stats.birth_years.as_option().unwrap();
        assert_eq!(years.most_common, 1985);
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(user_stats(&Dataset::default()), Err(EmptyResultError));
    }
}
