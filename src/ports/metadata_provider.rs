use crate::domain::AppError;

/// Port for fetching raw product metadata bytes.
pub trait MetadataProvider {
    /// Human-readable origin used in error messages.
    fn source(&self) -> String;

    /// Read the metadata document.
    fn metadata_bytes(&self) -> Result<Vec<u8>, AppError>;
}
