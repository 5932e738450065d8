//! Feature ops-file generation.
//!
//! Each feature key maps to the operations that, applied together, switch on
//! exactly one optional feature: a non-default selector option or a single
//! multi-select value.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::metadata::reference::{
    child_reference, ops_path, placeholder, scope_prefix, variable_name,
};
use crate::domain::metadata::{
    Metadata, MetadataError, PropertyBlueprint, PropertyInput, PropertyType,
};
use crate::domain::template::TemplateError;
use crate::domain::template::ops::{Ops, OpsValue};

/// Feature key → ordered operations.
pub type OpsFiles = BTreeMap<String, Vec<Ops>>;

/// Build one ops-file per selector alternative and per multi-select value.
pub fn feature_ops_files(metadata: &Metadata) -> Result<OpsFiles, TemplateError> {
    let mut builder = FeatureOpsBuilder::default();
    for input in metadata.property_inputs() {
        let blueprint =
            metadata.lookup_blueprint(&input.reference).map_err(TemplateError::FeatureOps)?;
        builder
            .visit(blueprint, input, &input.reference, &scope_prefix(&input.reference))
            .map_err(TemplateError::FeatureOps)?;
    }
    Ok(builder.files)
}

#[derive(Default)]
struct FeatureOpsBuilder {
    files: OpsFiles,
}

impl FeatureOpsBuilder {
    fn visit(
        &mut self,
        blueprint: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        prefix: &str,
    ) -> Result<(), MetadataError> {
        match blueprint.property_type {
            PropertyType::Selector => self.visit_selector(blueprint, input, reference, prefix),
            PropertyType::MultiSelectOptions => {
                self.add_multi_select(blueprint, reference, prefix);
                Ok(())
            }
            PropertyType::Collection | PropertyType::Other(_) => {
                if blueprint.property_blueprints.is_empty() {
                    return Ok(());
                }
                // Nested features carry their parent's name so that members
                // with the same name under different parents stay distinct.
                let nested_prefix = format!("{prefix}{}-", blueprint.name);
                for child_input in &input.property_inputs {
                    let child_ref = child_reference(reference, child_input.name());
                    let child = blueprint
                        .child(child_input.name())
                        .ok_or_else(|| MetadataError::not_found(child_ref.as_str()))?;
                    self.visit(child, child_input, &child_ref, &nested_prefix)?;
                }
                Ok(())
            }
        }
    }

    fn visit_selector(
        &mut self,
        selector: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        prefix: &str,
    ) -> Result<(), MetadataError> {
        let default_option = selector.default_option();
        if default_option.is_none() && !selector.default.is_empty() {
            debug!(selector = %reference, "selector default matches no option template");
        }

        for selector_input in &input.selector_property_inputs {
            let option = selector.option_template(selector_input.name()).ok_or_else(|| {
                MetadataError::not_found(child_reference(reference, selector_input.name()))
            })?;
            if default_option.is_some_and(|default| default.name == option.name) {
                continue;
            }

            let feature = format!("{prefix}{}-{}", selector.name, option.name);
            let mut ops = vec![Ops::replace(
                ops_path(reference),
                OpsValue::Selection {
                    value: option.select_value.clone(),
                    selected_option: option.name.clone(),
                },
            )];

            // Properties of the default option are already in the base
            // document and must go when another option is chosen.
            if let Some(default) = default_option {
                let default_ref = child_reference(reference, &default.name);
                ops.extend(default.property_blueprints.iter().map(|property| {
                    Ops::remove(ops_path(&child_reference(&default_ref, &property.name)))
                }));
            }

            let option_ref = child_reference(reference, &option.name);
            let nested_prefix = format!("{feature}-");
            for property in &option.property_blueprints {
                let property_ref = child_reference(&option_ref, &property.name);
                match property.property_type {
                    PropertyType::MultiSelectOptions => {
                        self.add_multi_select(property, &property_ref, &nested_prefix);
                    }
                    PropertyType::Selector => {
                        let nested_input = selector_input
                            .property_inputs
                            .iter()
                            .find(|nested| nested.name() == property.name);
                        match nested_input {
                            Some(nested_input) => self.visit_selector(
                                property,
                                nested_input,
                                &property_ref,
                                &nested_prefix,
                            )?,
                            None => debug!(selector = %property_ref, "nested selector not exposed"),
                        }
                    }
                    _ if property.is_required() => ops.push(Ops::replace(
                        ops_path(&property_ref),
                        OpsValue::Simple { value: placeholder(&variable_name(&property_ref)) },
                    )),
                    _ => {}
                }
            }

            self.files.insert(feature, ops);
        }
        Ok(())
    }

    /// One single-operation file per option, appending that option's name.
    fn add_multi_select(&mut self, blueprint: &PropertyBlueprint, reference: &str, prefix: &str) {
        let path = format!("{}/value/-", ops_path(reference));
        for option in &blueprint.options {
            self.files.insert(
                format!("{prefix}{}_{}", blueprint.name, option.name),
                vec![Ops::replace(path.clone(), OpsValue::Literal(option.name.clone()))],
            );
        }
    }
}
