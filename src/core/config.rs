//! Run-time configuration object + fluent builder.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::core::{error::ConfigError, selection::City};

/// Immutable city-to-file lookup handed to the loader.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub city_files: IndexMap<City, String>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Full path of the export backing `city`.
    #[must_use]
    pub fn path_for(&self, city: City) -> PathBuf {
        let file = self
            .city_files
            .get(&city)
            .map_or(city.default_file(), String::as_str);
        self.data_dir.join(file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            city_files: City::ALL
                .into_iter()
                .map(|c| (c, c.default_file().to_owned()))
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    overrides: Vec<(City, String)>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }
    #[inline]
    pub fn city_file(mut self, city: City, file: impl Into<String>) -> Self {
        self.overrides.push((city, file.into()));
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        for (city, file) in self.overrides {
            if file.trim().is_empty() {
                return Err(ConfigError::EmptyFileName(city));
            }
            config.city_files.insert(city, file);
        }
        Ok(config)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::builder().data_dir("/data").build().unwrap();
        assert_eq!(
            config.path_for(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
        assert_eq!(config.city_files.len(), 3);
    }

    #[test]
    fn test_override_city_file() {
        let config = Config::builder()
            .city_file(City::Washington, "dc_2017.csv")
            .build()
            .unwrap();
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("./dc_2017.csv")
        );
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let result: Result<Config, ConfigError> =
            Config::builder().city_file(City::Chicago, "  ").into();
        assert!(matches!(result, Err(ConfigError::EmptyFileName(City::Chicago))));
    }
}
