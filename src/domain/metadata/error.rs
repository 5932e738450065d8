/// Metadata capability error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("malformed metadata: {0}")]
    Malformed(String),

    #[error("could not find property blueprint for reference '{reference}'")]
    BlueprintNotFound { reference: String },
}

impl MetadataError {
    pub(crate) fn not_found<S: Into<String>>(reference: S) -> Self {
        MetadataError::BlueprintNotFound { reference: reference.into() }
    }
}
