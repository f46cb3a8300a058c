//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::paths::xdg_root;
use super::NavtreeConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the user wide config file (`$XDG_CONFIG_HOME/navtree/config.toml`).
    pub fn global_config_path() -> Result<PathBuf, ApiError> {
        xdg_root::global_config_file()
    }

    /// Load configuration from the global file, `explicit` and environment.
    pub fn load(explicit: Option<&Path>) -> Result<NavtreeConfig, ApiError> {
        let mut config = MergeService::load(explicit)?;
        super::make_consistent(&mut config.navigation.columns);
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<NavtreeConfig, ApiError> {
        let mut config = MergeService::load_from_file(path)?;
        super::make_consistent(&mut config.navigation.columns);
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> NavtreeConfig {
        NavtreeConfig::default()
    }
}
