//! Configuration
//!
//! Typed configuration layered by the `config` crate. Precedence, lowest
//! first: built-in defaults, `$XDG_CONFIG_HOME/navtree/config.toml`, an
//! explicit file given on the command line, `NAVTREE__SECTION__KEY`
//! environment variables.

pub mod columns;
pub mod facade;

pub mod merge {
    pub mod service;
}

pub mod paths {
    pub mod xdg_root;
}

pub mod sources {
    pub mod environment;
    pub mod global_file;
}

pub use columns::{default_column_attributes, make_consistent, ColumnAttribute};
pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::view::{ColumnType, SortOrder};
use serde::{Deserialize, Serialize};

/// Settings of the navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Show the percentage bar next to the folder name
    #[serde(default = "default_true")]
    pub show_percentage: bool,

    #[serde(default = "default_sort_column")]
    pub sort_column: ColumnType,

    #[serde(default)]
    pub sort_ascending: bool,

    #[serde(default = "default_column_attributes")]
    pub columns: Vec<ColumnAttribute>,
}

fn default_true() -> bool {
    true
}

fn default_sort_column() -> ColumnType {
    ColumnType::Bytes
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            show_percentage: default_true(),
            sort_column: default_sort_column(),
            sort_ascending: false,
            columns: default_column_attributes(),
        }
    }
}

impl NavigationConfig {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder {
            column: self.sort_column,
            ascending: self.sort_ascending,
        }
    }

    /// Columns after [`make_consistent`].
    pub fn consistent_columns(&self) -> Vec<ColumnAttribute> {
        let mut columns = self.columns.clone();
        make_consistent(&mut columns);
        columns
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavtreeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl NavtreeConfig {
    /// Render as TOML, the format of the configuration file.
    pub fn to_toml(&self) -> Result<String, crate::error::ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::ApiError::SerializationError(format!("Failed to serialize config: {}", e)))
    }
}
