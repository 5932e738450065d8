use std::path::Path;

use crate::domain::AppError;

/// Port for persisting generated template artifacts.
pub trait ArtifactStore {
    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
