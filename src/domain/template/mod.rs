//! Template generation: turns parsed metadata into the product document,
//! variable tables, and ops-files.

pub mod artifacts;
pub mod error;
pub mod feature_ops;
pub mod layout;
pub mod network;
pub mod ops;
pub mod product_properties;
pub mod required_vars;
pub mod resources;

pub use artifacts::{
    DEFAULT_SIZE_OF_COLLECTIONS, OpsCategory, TemplateArtifacts, TemplateOptions, build_template,
};
pub use error::TemplateError;
pub use feature_ops::{OpsFiles, feature_ops_files};
pub use layout::{ArtifactFile, product_directory, render_artifacts};
pub use ops::{Ops, OpsType, OpsValue};
pub use product_properties::{DefaultVariables, ProductProperties, product_properties};
pub use required_vars::{RequiredVariables, required_variables};
pub use resources::VariableTable;
