//! Maps written by hand, stored as TOML.
//!
//! ```toml
//! rows = 4
//! cols = 4
//! agent = [3, 3]
//! resource = [0, 0]
//! capacity = 1
//! enemies = [[3, 2]]
//! blocked = []
//!
//! [costs]
//! move = 5
//! pickup = 6
//! kill = 4
//! ```

use crate::quest::{Cell, Grid, GridError, QuestCosts};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read map file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid map: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub agent: (usize, usize),
    pub resource: (usize, usize),
    pub capacity: usize,
    #[serde(default)]
    pub enemies: Vec<(usize, usize)>,
    #[serde(default)]
    pub blocked: Vec<(usize, usize)>,
    #[serde(default)]
    pub costs: QuestCosts,
}

impl GridConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the grid described by the file, together with its costs.
    pub fn build(&self) -> Result<(Grid, QuestCosts), ConfigError> {
        let grid = Grid::new(
            self.rows,
            self.cols,
            self.agent.into(),
            self.resource.into(),
            self.blocked.iter().map(|&cell| Cell::from(cell)),
            self.enemies.iter().map(|&cell| Cell::from(cell)),
            self.capacity,
        )?;
        Ok((grid, self.costs))
    }
}
