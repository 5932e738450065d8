use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::metadata::MetadataError;
use crate::domain::template::TemplateError;

/// Library-wide error type for tile-config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or flag issue.
    #[error("{0}")]
    Configuration(String),

    /// Metadata could not be read from its source.
    #[error("error getting metadata from {origin}: {details}")]
    MetadataSource { origin: String, details: String },

    /// Metadata was read but could not be understood.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Template derivation failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Target directory for generated templates is missing.
    #[error("output-directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on I/O outcomes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::OutputDirectoryMissing(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_)
            | AppError::Metadata(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::MetadataSource { .. } | AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}
