pub mod file_metadata_provider;
pub mod filesystem;

pub use file_metadata_provider::FileMetadataProvider;
pub use filesystem::FilesystemArtifactStore;
