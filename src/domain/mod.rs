pub mod configuration;
pub mod error;
pub mod metadata;
pub mod template;

pub use configuration::{CONFIG_FILE_NAME, GenerateConfig, TileConfig};
pub use error::AppError;
pub use metadata::{Metadata, MetadataError};
pub use template::{TemplateArtifacts, TemplateError, TemplateOptions};
