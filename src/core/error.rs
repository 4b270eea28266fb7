//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use crate::core::selection::City;

/// Precise configuration faults.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("configuration has an empty data file name for {0}")]
    EmptyFileName(City),
}

/// The trip file for a city could not be read or understood.
#[derive(thiserror::Error, Debug)]
pub enum DataSourceError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read csv on line {line}: {source}")]
    Csv { line: u64, source: csv::Error },
    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),
    #[error("line {line}: invalid {column} timestamp '{text}'")]
    BadTimestamp {
        line: u64,
        column: &'static str,
        text: String,
    },
    #[error("line {line}: invalid {column} value '{text}'")]
    BadValue {
        line: u64,
        column: &'static str,
        text: String,
    },
}

/// Filters left nothing to summarise.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no trips match the selected filters")]
pub struct EmptyResultError;

/// User text that names no known city, month or day.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{input}' is not a city we have data for (expected one of: {expected})")]
    UnknownCity { input: String, expected: String },
    #[error("'{input}' is not a month we have data for (expected one of: {expected})")]
    UnknownMonth { input: String, expected: String },
    #[error("'{input}' is not a day of the week (expected one of: {expected})")]
    UnknownDay { input: String, expected: String },
}

/// Top-level error type bubbled up by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum ExploreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}
