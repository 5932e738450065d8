use crate::ports::{ArtifactStore, MetadataProvider};

/// Application context holding dependencies for command execution.
pub struct AppContext<M: MetadataProvider, S: ArtifactStore> {
    metadata: M,
    store: S,
}

impl<M: MetadataProvider, S: ArtifactStore> AppContext<M, S> {
    /// Create a new application context.
    pub fn new(metadata: M, store: S) -> Self {
        Self { metadata, store }
    }

    /// Get a reference to the metadata provider.
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
