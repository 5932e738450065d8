//! Parse product metadata bytes (YAML or JSON) into the schema model.

use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::metadata::error::MetadataError;
use crate::domain::metadata::model::{
    Errand, FormType, JobType, PropertyBlueprint, PropertyInput, find_blueprint, nullable,
};

/// Blueprint types whose presence means the product deploys onto a service network.
pub const SERVICE_NETWORK_TYPES: [&str; 2] =
    ["service_network_az_multi_select", "service_network_az_single_select"];

/// Parsed product metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub product_version: String,
    pub property_blueprints: Vec<PropertyBlueprint>,
    pub form_types: Vec<FormType>,
    pub job_types: Vec<JobType>,
    pub post_deploy_errands: Vec<Errand>,
    pub pre_delete_errands: Vec<Errand>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default)]
    product_version: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    property_blueprints: Vec<PropertyBlueprint>,
    #[serde(default, deserialize_with = "nullable")]
    form_types: Vec<FormType>,
    #[serde(default, deserialize_with = "nullable")]
    job_types: Vec<JobType>,
    #[serde(default, deserialize_with = "nullable")]
    post_deploy_errands: Vec<Errand>,
    #[serde(default, deserialize_with = "nullable")]
    pre_delete_errands: Vec<Errand>,
}

impl Metadata {
    /// Decode metadata bytes.
    ///
    /// Input that opens with `{` and is valid JSON is read as JSON; everything
    /// else (including YAML flow mappings) is read as YAML.
    pub fn parse(bytes: &[u8]) -> Result<Self, MetadataError> {
        let raw = match decode_json(bytes) {
            Some(raw) => raw,
            None => serde_yaml::from_slice::<RawMetadata>(bytes)
                .map_err(|e| MetadataError::Malformed(e.to_string()))?,
        };

        let product_version = match raw.product_version {
            None | Some(Value::Null) => {
                return Err(MetadataError::Malformed("missing product_version".into()));
            }
            Some(Value::String(text)) => text,
            Some(Value::Number(number)) => number.to_string(),
            Some(other) => {
                return Err(MetadataError::Malformed(format!(
                    "product_version must be a string, found {other:?}"
                )));
            }
        };
        if product_version.trim().is_empty() {
            return Err(MetadataError::Malformed("product_version must not be empty".into()));
        }

        Ok(Self {
            name: raw.name,
            product_version,
            property_blueprints: raw.property_blueprints,
            form_types: raw.form_types,
            job_types: raw.job_types,
            post_deploy_errands: raw.post_deploy_errands,
            pre_delete_errands: raw.pre_delete_errands,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.name
    }

    pub fn product_version(&self) -> &str {
        &self.product_version
    }

    /// Whether any product- or job-level blueprint places the product on a
    /// service network.
    pub fn uses_service_network(&self) -> bool {
        self.property_blueprints
            .iter()
            .chain(self.job_types.iter().flat_map(|job| job.property_blueprints.iter()))
            .any(|blueprint| SERVICE_NETWORK_TYPES.contains(&blueprint.property_type.as_str()))
    }

    pub fn job_type(&self, name: &str) -> Option<&JobType> {
        self.job_types.iter().find(|job| job.name == name)
    }

    /// Top-level property inputs of every form type, in declaration order.
    pub fn property_inputs(&self) -> impl Iterator<Item = &PropertyInput> {
        self.form_types.iter().flat_map(|form| form.property_inputs.iter())
    }

    /// Resolve a dotted reference to its blueprint.
    ///
    /// `.properties.<name>...` walks product blueprints and `.<job>.<name>...`
    /// walks that job's blueprints. Below a selector the next segment names an
    /// option template and the one after it a property of that option.
    pub fn lookup_blueprint(&self, reference: &str) -> Result<&PropertyBlueprint, MetadataError> {
        let not_found = || MetadataError::not_found(reference);

        let mut segments = reference.strip_prefix('.').ok_or_else(not_found)?.split('.');
        let scope = segments.next().ok_or_else(not_found)?;
        let blueprints = if scope == "properties" {
            &self.property_blueprints
        } else {
            &self.job_type(scope).ok_or_else(not_found)?.property_blueprints
        };

        let first = segments.next().ok_or_else(not_found)?;
        let mut current = find_blueprint(blueprints, first).ok_or_else(not_found)?;
        while let Some(segment) = segments.next() {
            current = if current.is_selector() {
                let option = current.option_template(segment).ok_or_else(not_found)?;
                let property = segments.next().ok_or_else(not_found)?;
                find_blueprint(&option.property_blueprints, property).ok_or_else(not_found)?
            } else {
                current.child(segment).ok_or_else(not_found)?
            };
        }
        Ok(current)
    }
}

fn decode_json(bytes: &[u8]) -> Option<RawMetadata> {
    let first = bytes.iter().find(|byte| !byte.is_ascii_whitespace())?;
    if *first != b'{' {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}
