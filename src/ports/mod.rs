mod artifact_store;
mod metadata_provider;

pub use artifact_store::ArtifactStore;
pub use metadata_provider::MetadataProvider;
