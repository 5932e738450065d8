//! Generation settings loaded from `tile-config.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::template::{DEFAULT_SIZE_OF_COLLECTIONS, TemplateOptions};

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileConfig {
    /// `[generate]` table.
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl TileConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generate.validate()
    }
}

/// Defaults for the `generate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Write directly under `<output>/<product-name>`.
    #[serde(default)]
    pub exclude_version: bool,
    /// Emit `errand-config` and errand variables.
    #[serde(default = "default_true")]
    pub include_errands: bool,
    /// Largest collection size offered as an optional ops-file.
    #[serde(default = "default_size_of_collections")]
    pub size_of_collections: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            exclude_version: false,
            include_errands: default_true(),
            size_of_collections: default_size_of_collections(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.size_of_collections == 0 {
            return Err(AppError::config_error("size_of_collections must be greater than 0"));
        }
        Ok(())
    }

    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            include_errands: self.include_errands,
            size_of_collections: self.size_of_collections,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_size_of_collections() -> usize {
    DEFAULT_SIZE_OF_COLLECTIONS
}
