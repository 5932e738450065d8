use crate::domain::AppError;
use crate::ports::MetadataProvider;

/// Metadata provider serving fixed bytes, or failing on demand.
#[derive(Debug, Clone)]
pub struct MockMetadataProvider {
    source: String,
    bytes: Option<Vec<u8>>,
}

impl MockMetadataProvider {
    pub fn new(content: &str) -> Self {
        Self { source: "mock-metadata.yml".to_string(), bytes: Some(content.as_bytes().to_vec()) }
    }

    pub fn failing(source: &str) -> Self {
        Self { source: source.to_string(), bytes: None }
    }
}

impl MetadataProvider for MockMetadataProvider {
    fn source(&self) -> String {
        self.source.clone()
    }

    fn metadata_bytes(&self) -> Result<Vec<u8>, AppError> {
        self.bytes.clone().ok_or_else(|| AppError::MetadataSource {
            origin: self.source.clone(),
            details: "mock metadata unavailable".to_string(),
        })
    }
}
