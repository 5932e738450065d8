pub mod generate;
pub mod inspect;

use tracing::debug;

use crate::domain::{AppError, Metadata};
use crate::ports::MetadataProvider;

/// Fetch and parse metadata from a provider.
pub(crate) fn load_metadata(provider: &impl MetadataProvider) -> Result<Metadata, AppError> {
    let bytes = provider.metadata_bytes()?;
    let metadata = Metadata::parse(&bytes)?;
    debug!(
        source = %provider.source(),
        product = metadata.product_name(),
        version = metadata.product_version(),
        "parsed metadata"
    );
    Ok(metadata)
}
