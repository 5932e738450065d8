//! `MetadataProvider` backed by a local metadata file.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::MetadataProvider;

/// Reads metadata from a YAML or JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileMetadataProvider {
    path: PathBuf,
}

impl FileMetadataProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataProvider for FileMetadataProvider {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn metadata_bytes(&self) -> Result<Vec<u8>, AppError> {
        fs::read(&self.path).map_err(|err| AppError::MetadataSource {
            origin: self.source(),
            details: err.to_string(),
        })
    }
}
