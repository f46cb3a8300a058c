//! MergeService: orchestrates sources and deserializes to NavtreeConfig.

use crate::config::sources::{environment, global_file};
use crate::config::NavtreeConfig;
use config::{Config, ConfigError, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: global file (lowest) -> explicit file -> environment (highest).
    /// Missing keys fall back to the serde defaults of [`NavtreeConfig`].
    pub fn load(explicit: Option<&Path>) -> Result<NavtreeConfig, ConfigError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay, ignoring the
    /// global file.
    pub fn load_from_file(path: &Path) -> Result<NavtreeConfig, ConfigError> {
        let builder = Config::builder().add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
