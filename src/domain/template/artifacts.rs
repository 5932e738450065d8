//! Assembly of the full template artifact set for one product.

use std::collections::BTreeMap;
use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::domain::metadata::Metadata;
use crate::domain::template::TemplateError;
use crate::domain::template::feature_ops::{OpsFiles, feature_ops_files};
use crate::domain::template::network::{network_ops, network_properties};
use crate::domain::template::product_properties::{DefaultVariables, product_properties};
use crate::domain::template::required_vars::{RequiredVariables, required_variables};
use crate::domain::template::resources::{
    VariableTable, errand_config, resource_config, resource_ops,
};

pub const DEFAULT_SIZE_OF_COLLECTIONS: usize = 10;

/// Knobs that shape the generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    pub include_errands: bool,
    pub size_of_collections: usize,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self { include_errands: true, size_of_collections: DEFAULT_SIZE_OF_COLLECTIONS }
    }
}

/// Ops-file directory an ops-file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpsCategory {
    Features,
    Network,
    Optional,
    Resource,
}

impl OpsCategory {
    pub const ALL: [OpsCategory; 4] =
        [OpsCategory::Features, OpsCategory::Network, OpsCategory::Optional, OpsCategory::Resource];

    pub fn dir_name(&self) -> &'static str {
        match self {
            OpsCategory::Features => "features",
            OpsCategory::Network => "network",
            OpsCategory::Optional => "optional",
            OpsCategory::Resource => "resource",
        }
    }
}

impl fmt::Display for OpsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Everything written for one product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateArtifacts {
    pub product: Mapping,
    pub required_variables: RequiredVariables,
    pub default_variables: DefaultVariables,
    pub resource_variables: VariableTable,
    pub errand_variables: VariableTable,
    pub ops_files: BTreeMap<OpsCategory, OpsFiles>,
}

impl TemplateArtifacts {
    pub fn ops(&self, category: OpsCategory) -> Option<&OpsFiles> {
        self.ops_files.get(&category)
    }
}

/// Derive every artifact from parsed metadata without touching storage.
pub fn build_template(
    metadata: &Metadata,
    options: &TemplateOptions,
) -> Result<TemplateArtifacts, TemplateError> {
    let required = required_variables(metadata).map_err(TemplateError::RequiredVariables)?;
    let properties = product_properties(metadata, options.size_of_collections)
        .map_err(TemplateError::ProductProperties)?;
    let features = feature_ops_files(metadata)?;
    let (resources, resource_variables) = resource_config(metadata);
    let (errands, errand_variables) = errand_config(metadata, options.include_errands);

    let mut product = Mapping::new();
    product.insert("product-name".into(), metadata.product_name().into());
    product.insert("product-properties".into(), Value::Mapping(properties.properties));
    product.insert("network-properties".into(), Value::Mapping(network_properties(metadata)));
    product.insert("resource-config".into(), Value::Mapping(resources));
    if options.include_errands && !errands.is_empty() {
        product.insert("errand-config".into(), Value::Mapping(errands));
    }

    let mut ops_files = BTreeMap::new();
    ops_files.insert(OpsCategory::Features, features);
    ops_files.insert(OpsCategory::Network, network_ops());
    ops_files.insert(OpsCategory::Optional, properties.optional_ops);
    ops_files.insert(OpsCategory::Resource, resource_ops(metadata));

    Ok(TemplateArtifacts {
        product,
        required_variables: required,
        default_variables: properties.default_variables,
        resource_variables,
        errand_variables,
        ops_files,
    })
}
