use crate::domain::metadata::MetadataError;

/// Template generation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("could not create required vars: {0}")]
    RequiredVariables(#[source] MetadataError),

    #[error("could not create feature ops files: {0}")]
    FeatureOps(#[source] MetadataError),

    #[error("could not create product properties: {0}")]
    ProductProperties(#[source] MetadataError),

    #[error("could not render {what}: {details}")]
    Render { what: String, details: String },
}
