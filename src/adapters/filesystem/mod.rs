//! Filesystem adapter for the artifact store port.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-backed artifact store. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        fs::create_dir_all(full_path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %full_path.display(), bytes = content.len(), "writing artifact");
        fs::write(full_path, content)?;
        Ok(())
    }
}
