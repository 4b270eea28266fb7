//! CSV ingest for one city's trip export.
//!
//! Columns are looked up by header name, so extra columns (an unnamed row
//! index, `Trip Duration`) and column order do not matter. `Gender` and
//! `Birth Year` are optional; their presence is recorded in [`Schema`].

use std::{collections::HashMap, fs::File, io::Read};

use chrono::NaiveDateTime;

use crate::core::{
    config::Config,
    constants::{
        BIRTH_YEAR, DATETIME_FORMAT, DATETIME_FORMAT_ISO, END_STATION, END_TIME, GENDER,
        START_STATION, START_TIME, USER_TYPE,
    },
    data::{Dataset, Gender, Schema, Trip, UserType},
    error::DataSourceError,
    selection::City,
};

/// Resolved column indices for one file.
struct Columns {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &HashMap<String, usize>) -> Result<Self, DataSourceError> {
        let required = |name: &'static str| {
            headers
                .get(name)
                .copied()
                .ok_or(DataSourceError::MissingColumn(name))
        };
        Ok(Self {
            start_time: required(START_TIME)?,
            end_time: required(END_TIME)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: required(USER_TYPE)?,
            gender: headers.get(GENDER).copied(),
            birth_year: headers.get(BIRTH_YEAR).copied(),
        })
    }

    fn schema(&self) -> Schema {
        Schema {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }
}

// --- Helpers ---

fn header_lookup<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<HashMap<String, usize>, DataSourceError> {
    let headers = reader
        .headers()
        .map_err(|source| DataSourceError::Csv { line: 1, source })?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(idx, col)| (col.trim().to_owned(), idx))
        .collect())
}

fn parse_timestamp(
    text: &str,
    line: u64,
    column: &'static str,
) -> Result<NaiveDateTime, DataSourceError> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, DATETIME_FORMAT_ISO))
        .map_err(|_| DataSourceError::BadTimestamp {
            line,
            column,
            text: text.to_owned(),
        })
}

/// Blank cells are missing values; anything else must be a known category.
fn parse_category<T>(
    text: &str,
    line: u64,
    column: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, DataSourceError> {
    if text.is_empty() {
        return Ok(None);
    }
    parse(text).map(Some).ok_or_else(|| DataSourceError::BadValue {
        line,
        column,
        text: text.to_owned(),
    })
}

/// The exports store years as floats (`1989.0`) because of blank cells.
fn parse_birth_year(text: &str, line: u64) -> Result<Option<u16>, DataSourceError> {
    if text.is_empty() {
        return Ok(None);
    }
    let bad = || DataSourceError::BadValue {
        line,
        column: BIRTH_YEAR,
        text: text.to_owned(),
    };
    let val = lexical_core::parse::<f64>(text.as_bytes()).map_err(|_| bad())?;
    if val.is_nan() {
        return Ok(None);
    }
    if !val.is_finite() || val.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&val) {
        return Err(bad());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let year = val as u16;
    Ok(Some(year))
}

fn parse_row(
    record: &csv::StringRecord,
    cols: &Columns,
    line: u64,
) -> Result<Trip, DataSourceError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let start = parse_timestamp(field(cols.start_time), line, START_TIME)?;
    let end = parse_timestamp(field(cols.end_time), line, END_TIME)?;
    let user_type = parse_category(field(cols.user_type), line, USER_TYPE, UserType::parse)?;
    let gender = match cols.gender {
        Some(idx) => parse_category(field(idx), line, GENDER, Gender::parse)?,
        None => None,
    };
    let birth_year = match cols.birth_year {
        Some(idx) => parse_birth_year(field(idx), line)?,
        None => None,
    };

    Ok(Trip::new(
        start,
        end,
        field(cols.start_station),
        field(cols.end_station),
    )
    .with_user_type(user_type)
    .with_gender(gender)
    .with_birth_year(birth_year))
}

// --- Ingest ---

/// Parse a whole trip export from any reader.
pub fn read_trips<R: Read>(src: R) -> Result<Dataset, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(src);
    let headers = header_lookup(&mut reader)?;
    let cols = Columns::resolve(&headers)?;

    let mut trips = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // header is line 1
        let fallback_line = idx as u64 + 2;
        let record = row.map_err(|source| DataSourceError::Csv {
            line: fallback_line,
            source,
        })?;
        let line = record.position().map_or(fallback_line, csv::Position::line);
        trips.push(parse_row(&record, &cols, line)?);
    }
    Ok(Dataset::new(trips, cols.schema()))
}

/// Load the export configured for `city`.
pub fn load(city: City, config: &Config) -> Result<Dataset, DataSourceError> {
    let path = config.path_for(city);
    log::info!("loading {city} trips from {}", path.display());
    let file = File::open(&path).map_err(|source| DataSourceError::Open {
        path: path.clone(),
        source,
    })?;
    let dataset = read_trips(file)?;
    log::info!("loaded {} trips for {city}", dataset.len());
    if !dataset.schema.has_gender {
        log::warn!("{city} export has no `{GENDER}` column");
    }
    if !dataset.schema.has_birth_year {
        log::warn!("{city} export has no `{BIRTH_YEAR}` column");
    }
    Ok(dataset)
}
