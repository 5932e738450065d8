mod memory_artifact_store;
mod mock_metadata_provider;

pub use memory_artifact_store::MemoryArtifactStore;
pub use mock_metadata_provider::MockMetadataProvider;
