//! Dashboard configuration.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dataset::Columns;
use crate::file::FromJsonFile;

/// Sidebar selections. These are echoed back on the dashboard and take no part in any
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selections {
    pub wager: u32,
    pub away_square: u32,
    pub home_square: u32,
}
impl Default for Selections {
    fn default() -> Self {
        Self {
            wager: 10,
            away_square: 3,
            home_square: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub home_column: String,
    pub away_column: String,
    pub selections: Selections,
}
impl Default for DashboardConfig {
    fn default() -> Self {
        let Columns { home, away } = Columns::default();
        Self {
            home_column: home,
            away_column: away,
            selections: Selections::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("column names must be non-empty and distinct")]
    Columns,
}

impl DashboardConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("reading config from {}", path.display());
        let config = Self::from_json_file(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_column.is_empty() || self.away_column.is_empty() || self.home_column == self.away_column {
            return Err(ConfigError::Columns);
        }
        Ok(())
    }

    pub fn columns(&self) -> Columns {
        Columns {
            home: self.home_column.clone(),
            away: self.away_column.clone(),
        }
    }
}
