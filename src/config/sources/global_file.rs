//! User wide configuration file source.

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};

/// Add `$XDG_CONFIG_HOME/navtree/config.toml` when it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Ok(path) = xdg_root::global_config_file() else {
        return Ok(builder);
    };
    Ok(builder.add_source(
        File::from(path)
            .format(FileFormat::Toml)
            .required(false),
    ))
}
