//! Configuration file discovery and parsing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, TileConfig};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "tile-config.toml";

/// Load the configuration.
///
/// An explicit path must exist. Without one, `tile-config.toml` in
/// `working_dir` is used when present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<TileConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = working_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                debug!(path = %candidate.display(), "no config file, using defaults");
                return Ok(TileConfig::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<TileConfig, AppError> {
    let config: TileConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
