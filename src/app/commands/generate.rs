//! `generate`: write the full template tree for one product.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::commands::load_metadata;
use crate::domain::AppError;
use crate::domain::template::{
    OpsCategory, TemplateOptions, build_template, product_directory, render_artifacts,
};
use crate::ports::{ArtifactStore, MetadataProvider};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_directory: PathBuf,
    pub exclude_version: bool,
    pub template: TemplateOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub product_directory: PathBuf,
    pub files_written: Vec<PathBuf>,
}

pub fn execute<M: MetadataProvider, S: ArtifactStore>(
    ctx: &AppContext<M, S>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let store = ctx.store();
    if !store.exists(&options.output_directory) {
        return Err(AppError::OutputDirectoryMissing(options.output_directory.clone()));
    }

    let metadata = load_metadata(ctx.metadata())?;
    let artifacts = build_template(&metadata, &options.template)?;
    let target = product_directory(&options.output_directory, &metadata, options.exclude_version)?;
    let files = render_artifacts(&artifacts)?;

    info!(
        product = metadata.product_name(),
        version = metadata.product_version(),
        directory = %target.display(),
        "generating template"
    );

    store.create_dir_all(&target)?;
    for category in OpsCategory::ALL {
        store.create_dir_all(&target.join(category.dir_name()))?;
    }

    let mut files_written = Vec::with_capacity(files.len());
    for file in files {
        let path = target.join(&file.path);
        store.write_file(&path, &file.content)?;
        debug!(path = %path.display(), "wrote artifact");
        files_written.push(path);
    }

    Ok(GenerateOutcome { product_directory: target, files_written })
}
