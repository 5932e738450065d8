//! Required-variable resolution.
//!
//! Walks each form type's inputs together with the blueprints they expose and
//! collects the variables an operator must supply for the base configuration.

use std::collections::BTreeMap;

use crate::domain::metadata::reference::{child_reference, variable_name};
use crate::domain::metadata::{Metadata, MetadataError, PropertyBlueprint, PropertyInput, PropertyType};

/// Variable name → empty placeholder.
pub type RequiredVariables = BTreeMap<String, String>;

/// Collect the variables that have no usable default.
///
/// Of a selector only the default option is walked, since it is part of the
/// base document; the other options' variables appear as placeholders inside
/// feature ops-files. Multi-selects never contribute, even without a default,
/// because their values are added through feature ops-files.
pub fn required_variables(metadata: &Metadata) -> Result<RequiredVariables, MetadataError> {
    let mut resolver = RequiredVariableResolver::default();
    for input in metadata.property_inputs() {
        let blueprint = metadata.lookup_blueprint(&input.reference)?;
        resolver.visit(blueprint, input, &input.reference, &variable_name(&input.reference))?;
    }
    Ok(resolver.variables)
}

#[derive(Default)]
struct RequiredVariableResolver {
    variables: RequiredVariables,
}

impl RequiredVariableResolver {
    fn visit(
        &mut self,
        blueprint: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        key: &str,
    ) -> Result<(), MetadataError> {
        match blueprint.property_type {
            PropertyType::Selector => self.visit_default_option(blueprint, input, reference, key),
            PropertyType::MultiSelectOptions => Ok(()),
            PropertyType::Collection => self.visit_collection(blueprint, input, reference, key),
            PropertyType::Other(_)
                if blueprint.property_blueprints.is_empty() || input.property_inputs.is_empty() =>
            {
                if blueprint.is_required() {
                    self.variables.insert(key.to_string(), String::new());
                }
                Ok(())
            }
            PropertyType::Other(_) => {
                for child_input in &input.property_inputs {
                    let child_ref = child_reference(reference, child_input.name());
                    let child = blueprint
                        .child(child_input.name())
                        .ok_or_else(|| MetadataError::not_found(child_ref.as_str()))?;
                    self.visit(child, child_input, &child_ref, &format!("{key}/{}", child.name))?;
                }
                Ok(())
            }
        }
    }

    fn visit_default_option(
        &mut self,
        selector: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        key: &str,
    ) -> Result<(), MetadataError> {
        let Some(option) = selector.default_option() else {
            return Ok(());
        };
        let Some(option_input) =
            input.selector_property_inputs.iter().find(|exposed| exposed.name() == option.name)
        else {
            return Ok(());
        };

        let option_ref = child_reference(reference, &option.name);
        for property in &option.property_blueprints {
            let property_ref = child_reference(&option_ref, &property.name);
            let property_input = option_input
                .property_inputs
                .iter()
                .find(|nested| nested.name() == property.name)
                .cloned()
                .unwrap_or_else(|| PropertyInput::new(property_ref.as_str()));
            let property_key = format!("{key}/{}/{}", option.name, property.name);
            self.visit(property, &property_input, &property_ref, &property_key)?;
        }
        Ok(())
    }

    /// Members of the first collection element are keyed `<collection>_0/<member>`.
    fn visit_collection(
        &mut self,
        blueprint: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        key: &str,
    ) -> Result<(), MetadataError> {
        if !blueprint.is_configurable() {
            return Ok(());
        }
        for member_input in &input.property_inputs {
            let member = blueprint.child(member_input.name()).ok_or_else(|| {
                MetadataError::not_found(child_reference(reference, member_input.name()))
            })?;
            if member.is_required() {
                self.variables.insert(format!("{key}_0/{}", member.name), String::new());
            }
        }
        Ok(())
    }
}
