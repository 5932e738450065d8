//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FileMetadataProvider, FilesystemArtifactStore};
use crate::app::AppContext;
use crate::app::commands::{generate, inspect};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::inspect::{InspectFormat, InspectOptions, InspectTarget};
pub use crate::domain::AppError;

/// Create an `AppContext` reading `metadata` and writing relative to `root`.
fn create_context(
    metadata: &Path,
    root: PathBuf,
) -> AppContext<FileMetadataProvider, FilesystemArtifactStore> {
    AppContext::new(FileMetadataProvider::new(metadata), FilesystemArtifactStore::new(root))
}

/// Generate the template tree for the product described by `metadata`.
pub fn generate(metadata: &Path, options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(metadata, std::env::current_dir()?, options)
}

/// Generate with relative paths resolved against `root`.
pub fn generate_at(
    metadata: &Path,
    root: impl Into<PathBuf>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(metadata, root.into());
    generate::execute(&ctx, options)
}

/// Render the required variables or feature ops-files for `metadata`.
pub fn inspect(metadata: &Path, options: InspectOptions) -> Result<String, AppError> {
    inspect::execute(&FileMetadataProvider::new(metadata), options)
}
