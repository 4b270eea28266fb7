//! Aggregates the data layer: model, ingest, selection and filtering.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod filter;
pub mod loader;
pub mod selection;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::PAGE_SIZE;
pub use data::{Availability, Dataset, Gender, Schema, Trip, UserType};
pub use error::{ConfigError, DataSourceError, EmptyResultError, ExploreError, SelectionError};
pub use filter::filter;
pub use loader::{load, read_trips};
pub use selection::{City, DayFilter, Month, MonthFilter, Selection};
