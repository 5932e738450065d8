//! On-disk layout of a generated template.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::metadata::Metadata;
use crate::domain::template::TemplateError;
use crate::domain::template::artifacts::{OpsCategory, TemplateArtifacts};

pub const PRODUCT_FILE: &str = "product.yml";
pub const REQUIRED_VARS_FILE: &str = "required-vars.yml";
pub const DEFAULT_VARS_FILE: &str = "default-vars.yml";
pub const RESOURCE_VARS_FILE: &str = "resource-vars.yml";
pub const ERRAND_VARS_FILE: &str = "errand-vars.yml";

/// A rendered file, relative to the product directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub path: PathBuf,
    pub content: String,
}

/// `<output>/<name>/<version>`, or `<output>/<name>` without the version.
pub fn product_directory(
    output_dir: &Path,
    metadata: &Metadata,
    exclude_version: bool,
) -> Result<PathBuf, TemplateError> {
    let name = metadata.product_name();
    if name.is_empty() {
        return Err(TemplateError::Render {
            what: "product directory".into(),
            details: "product name is empty".into(),
        });
    }
    let product_dir = output_dir.join(name);
    if exclude_version {
        Ok(product_dir)
    } else {
        Ok(product_dir.join(metadata.product_version()))
    }
}

/// Serialize every artifact to YAML. Nothing is written here, so a rendering
/// failure leaves storage untouched.
pub fn render_artifacts(artifacts: &TemplateArtifacts) -> Result<Vec<ArtifactFile>, TemplateError> {
    let mut files = vec![
        render(PathBuf::from(PRODUCT_FILE), &artifacts.product)?,
        render(PathBuf::from(REQUIRED_VARS_FILE), &artifacts.required_variables)?,
        render(PathBuf::from(DEFAULT_VARS_FILE), &artifacts.default_variables)?,
        render(PathBuf::from(RESOURCE_VARS_FILE), &artifacts.resource_variables)?,
        render(PathBuf::from(ERRAND_VARS_FILE), &artifacts.errand_variables)?,
    ];

    for category in OpsCategory::ALL {
        let Some(ops_files) = artifacts.ops(category) else {
            continue;
        };
        for (key, ops) in ops_files {
            let path = Path::new(category.dir_name()).join(format!("{}.yml", key.replace('/', "-")));
            files.push(render(path, ops)?);
        }
    }
    Ok(files)
}

fn render<T: Serialize>(path: PathBuf, value: &T) -> Result<ArtifactFile, TemplateError> {
    let content = serde_yaml::to_string(value).map_err(|err| TemplateError::Render {
        what: path.display().to_string(),
        details: err.to_string(),
    })?;
    Ok(ArtifactFile { path, content })
}
