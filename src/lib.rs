//! tile-config: Generate configuration templates, variable tables, and
//! ops-files from platform product metadata.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, InspectFormat, InspectOptions, InspectTarget, generate,
    generate_at, inspect,
};
pub use domain::metadata::Metadata;
pub use domain::template::{
    Ops, OpsCategory, OpsFiles, OpsType, OpsValue, RequiredVariables, TemplateArtifacts,
    TemplateOptions, build_template, feature_ops_files, required_variables,
};
pub use domain::{AppError, MetadataError, TemplateError};
