//! `product-properties` section of the base document, default variables, and
//! optional ops-files.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::domain::metadata::reference::{child_reference, ops_path, placeholder, variable_name};
use crate::domain::metadata::{
    Metadata, MetadataError, OptionTemplate, PropertyBlueprint, PropertyInput, PropertyType,
};
use crate::domain::template::feature_ops::OpsFiles;
use crate::domain::template::ops::{Ops, OpsValue};

/// Variable name → default value.
pub type DefaultVariables = BTreeMap<String, Value>;

/// Output of the product-properties pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductProperties {
    pub properties: Mapping,
    pub default_variables: DefaultVariables,
    pub optional_ops: OpsFiles,
}

/// Build the base property values for every visible configurable property.
pub fn product_properties(
    metadata: &Metadata,
    size_of_collections: usize,
) -> Result<ProductProperties, MetadataError> {
    let mut builder = ProductPropertiesBuilder { size_of_collections, output: Default::default() };
    for input in metadata.property_inputs() {
        let blueprint = metadata.lookup_blueprint(&input.reference)?;
        if blueprint.is_configurable() {
            builder.visit(blueprint, input, &input.reference)?;
        }
    }
    Ok(builder.output)
}

struct ProductPropertiesBuilder {
    size_of_collections: usize,
    output: ProductProperties,
}

impl ProductPropertiesBuilder {
    fn visit(
        &mut self,
        blueprint: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
    ) -> Result<(), MetadataError> {
        let variable = variable_name(reference);

        match blueprint.property_type {
            PropertyType::Selector => {
                if let Some(option) = blueprint.default_option() {
                    let mut value = Mapping::new();
                    value.insert("value".into(), option.select_value.clone().into());
                    value.insert("selected_option".into(), option.name.clone().into());
                    self.output.properties.insert(reference.into(), Value::Mapping(value));
                    self.visit_default_option(option, input, reference)?;
                }
            }
            PropertyType::Collection => self.visit_collection(blueprint, input, reference, &variable)?,
            PropertyType::MultiSelectOptions => {
                if let Some(default) = usable_default(blueprint) {
                    self.output.default_variables.insert(variable.clone(), default);
                    self.insert_placeholder(reference, &variable);
                }
            }
            PropertyType::Other(_)
                if !blueprint.property_blueprints.is_empty() && !input.property_inputs.is_empty() =>
            {
                for child_input in &input.property_inputs {
                    let child_ref = child_reference(reference, child_input.name());
                    let child = blueprint
                        .child(child_input.name())
                        .ok_or_else(|| MetadataError::not_found(child_ref.as_str()))?;
                    if child.is_configurable() {
                        self.visit(child, child_input, &child_ref)?;
                    }
                }
            }
            PropertyType::Other(_) => {
                if let Some(default) = usable_default(blueprint) {
                    self.output.default_variables.insert(variable.clone(), default);
                    self.insert_placeholder(reference, &variable);
                } else if blueprint.is_required() {
                    self.insert_placeholder(reference, &variable);
                } else {
                    self.output.optional_ops.insert(
                        format!("add-{}", variable.replace('/', "-")),
                        vec![Ops::replace(
                            ops_path(reference),
                            OpsValue::Simple { value: placeholder(&variable) },
                        )],
                    );
                }
            }
        }
        Ok(())
    }

    /// The default option is the baseline, so its properties belong in the
    /// base document under `<selector>.<option>.<property>`.
    fn visit_default_option(
        &mut self,
        option: &OptionTemplate,
        input: &PropertyInput,
        reference: &str,
    ) -> Result<(), MetadataError> {
        let Some(option_input) =
            input.selector_property_inputs.iter().find(|exposed| exposed.name() == option.name)
        else {
            return Ok(());
        };

        let option_ref = child_reference(reference, &option.name);
        for property in option.property_blueprints.iter().filter(|property| property.is_configurable()) {
            let property_ref = child_reference(&option_ref, &property.name);
            let property_input = option_input
                .property_inputs
                .iter()
                .find(|nested| nested.name() == property.name)
                .cloned()
                .unwrap_or_else(|| PropertyInput::new(property_ref.as_str()));
            self.visit(property, &property_input, &property_ref)?;
        }
        Ok(())
    }

    fn visit_collection(
        &mut self,
        blueprint: &PropertyBlueprint,
        input: &PropertyInput,
        reference: &str,
        variable: &str,
    ) -> Result<(), MetadataError> {
        let mut members = Vec::new();
        for member_input in &input.property_inputs {
            let member = blueprint.child(member_input.name()).ok_or_else(|| {
                MetadataError::not_found(child_reference(reference, member_input.name()))
            })?;
            if member.is_configurable() {
                members.push(member);
            }
        }
        if members.is_empty() {
            return Ok(());
        }

        let mut first = Mapping::new();
        for member in &members {
            let member_variable = format!("{variable}_0/{}", member.name);
            if let Some(default) = usable_default(member) {
                self.output.default_variables.insert(member_variable.clone(), default);
            } else if !member.is_required() {
                continue;
            }
            first.insert(member.name.clone().into(), placeholder(&member_variable).into());
        }
        if !first.is_empty() {
            self.output.properties.insert(reference.into(), value_wrapper(vec![Value::Mapping(first)]));
        }

        for count in 2..=self.size_of_collections {
            let elements = (0..count)
                .map(|index| {
                    let mut element = Mapping::new();
                    for member in &members {
                        element.insert(
                            member.name.clone().into(),
                            placeholder(&format!("{variable}_{index}/{}", member.name)).into(),
                        );
                    }
                    Value::Mapping(element)
                })
                .collect::<Vec<_>>();
            self.output.optional_ops.insert(
                format!("add-{count}-{}", variable.replace('/', "-")),
                vec![Ops::replace(ops_path(reference), OpsValue::Structured(value_wrapper(elements)))],
            );
        }
        Ok(())
    }

    fn insert_placeholder(&mut self, reference: &str, variable: &str) {
        let mut value = Mapping::new();
        value.insert("value".into(), placeholder(variable).into());
        self.output.properties.insert(reference.into(), Value::Mapping(value));
    }
}

fn usable_default(blueprint: &PropertyBlueprint) -> Option<Value> {
    if blueprint.default.is_empty() {
        return None;
    }
    blueprint.default.to_value()
}

fn value_wrapper(items: Vec<Value>) -> Value {
    let mut value = Mapping::new();
    value.insert("value".into(), Value::Sequence(items));
    Value::Mapping(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = r#"
name: example-product
product_version: 1.1.1
property_blueprints:
  - name: required_string
    type: string
    configurable: true
  - name: defaulted_port
    type: port
    configurable: true
    default: 8443
  - name: optional_string
    type: string
    configurable: true
    optional: true
  - name: fixed
    type: string
    default: x
  - name: zones
    type: multi_select_options
    configurable: true
    default: [z1]
    options: [{name: z1}, {name: z2}]
  - name: features
    type: multi_select_options
    configurable: true
    optional: true
    options: [{name: a}]
  - name: mode
    type: selector
    configurable: true
    default: Internal
    option_templates:
      - name: internal
        select_value: Internal
      - name: external
        select_value: External
  - name: users
    type: collection
    configurable: true
    property_blueprints:
      - name: username
        type: string
        configurable: true
      - name: role
        type: string
        configurable: true
        default: viewer
      - name: note
        type: string
        configurable: true
        optional: true
form_types:
  - name: config
    property_inputs:
      - reference: .properties.required_string
      - reference: .properties.defaulted_port
      - reference: .properties.optional_string
      - reference: .properties.fixed
      - reference: .properties.zones
      - reference: .properties.features
      - reference: .properties.mode
        selector_property_inputs:
          - reference: .properties.mode.internal
          - reference: .properties.mode.external
      - reference: .properties.users
        property_inputs:
          - reference: username
          - reference: role
          - reference: note
"#;

    fn build(size_of_collections: usize) -> ProductProperties {
        let metadata = Metadata::parse(METADATA.as_bytes()).unwrap();
        product_properties(&metadata, size_of_collections).unwrap()
    }

    fn value_of(properties: &Mapping, reference: &str) -> Value {
        properties.get(reference).and_then(|entry| entry.get("value")).cloned().unwrap_or(Value::Null)
    }

    #[test]
    fn required_and_defaulted_properties_use_placeholders() {
        let output = build(2);
        assert_eq!(value_of(&output.properties, ".properties.required_string"), Value::from("((required_string))"));
        assert_eq!(value_of(&output.properties, ".properties.defaulted_port"), Value::from("((defaulted_port))"));
        assert_eq!(output.default_variables["defaulted_port"], Value::from(8443u64));
    }

    #[test]
    fn fixed_properties_are_left_out() {
        let output = build(2);
        assert!(output.properties.get(".properties.fixed").is_none());
    }

    #[test]
    fn optional_properties_become_optional_ops() {
        let output = build(2);
        assert!(output.properties.get(".properties.optional_string").is_none());
        assert_eq!(
            output.optional_ops["add-optional_string"],
            vec![Ops::replace(
                "/product-properties/.properties.optional_string?",
                OpsValue::Simple { value: "((optional_string))".into() },
            )]
        );
    }

    #[test]
    fn multi_select_default_goes_to_default_variables() {
        let output = build(2);
        assert_eq!(value_of(&output.properties, ".properties.zones"), Value::from("((zones))"));
        assert_eq!(output.default_variables["zones"], Value::Sequence(vec![Value::from("z1")]));
        assert!(output.properties.get(".properties.features").is_none());
        assert!(!output.optional_ops.contains_key("add-features"));
    }

    #[test]
    fn selector_uses_default_option() {
        let output = build(2);
        let mode = output.properties.get(".properties.mode").unwrap();
        assert_eq!(mode.get("value"), Some(&Value::from("Internal")));
        assert_eq!(mode.get("selected_option"), Some(&Value::from("internal")));
    }

    #[test]
    fn collection_first_element_holds_required_and_defaulted_members() {
        let output = build(2);
        let Value::Sequence(elements) = value_of(&output.properties, ".properties.users") else {
            panic!("users should hold a list");
        };
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].get("username"), Some(&Value::from("((users_0/username))")));
        assert_eq!(elements[0].get("role"), Some(&Value::from("((users_0/role))")));
        assert!(elements[0].get("note").is_none());
        assert_eq!(output.default_variables["users_0/role"], Value::from("viewer"));
    }

    #[test]
    fn collection_sizes_become_optional_ops() {
        let output = build(3);
        assert!(output.optional_ops.contains_key("add-2-users"));
        assert!(output.optional_ops.contains_key("add-3-users"));
        assert!(!output.optional_ops.contains_key("add-4-users"));

        let op = &output.optional_ops["add-3-users"][0];
        let Some(OpsValue::Structured(value)) = &op.value else {
            panic!("collection ops carry structured values");
        };
        let elements = value.get("value").and_then(Value::as_sequence).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[2].get("note"), Some(&Value::from("((users_2/note))")));
    }

    #[test]
    fn single_element_collections_have_no_size_ops() {
        let output = build(1);
        assert!(output.optional_ops.keys().all(|key| !key.ends_with("-users")));
    }

    const SELECTOR_METADATA: &str = r#"
name: example-product
product_version: 1.1.1
property_blueprints:
  - name: opsman
    type: selector
    configurable: true
    default: enable
    option_templates:
      - name: enable
        select_value: enable
        property_blueprints:
          - name: url
            type: string
            configurable: true
          - name: timeout
            type: integer
            configurable: true
            default: 30
          - name: label
            type: string
      - name: disable
        select_value: disable
form_types:
  - name: config
    property_inputs:
      - reference: .properties.opsman
        selector_property_inputs:
          - reference: .properties.opsman.enable
            property_inputs:
              - reference: .properties.opsman.enable.url
              - reference: .properties.opsman.enable.timeout
          - reference: .properties.opsman.disable
"#;

    #[test]
    fn default_option_properties_are_part_of_the_base_document() {
        let metadata = Metadata::parse(SELECTOR_METADATA.as_bytes()).unwrap();
        let output = product_properties(&metadata, 2).unwrap();

        assert_eq!(
            value_of(&output.properties, ".properties.opsman.enable.url"),
            Value::from("((opsman/enable/url))")
        );
        assert_eq!(
            value_of(&output.properties, ".properties.opsman.enable.timeout"),
            Value::from("((opsman/enable/timeout))")
        );
        assert_eq!(output.default_variables["opsman/enable/timeout"], Value::from(30u64));
        assert!(output.properties.get(".properties.opsman.enable.label").is_none());

        let required = crate::domain::template::required_vars::required_variables(&metadata).unwrap();
        assert_eq!(required.keys().collect::<Vec<_>>(), vec!["opsman/enable/url"]);
    }

    #[test]
    fn unexposed_default_option_adds_only_the_selection() {
        let mut metadata = Metadata::parse(SELECTOR_METADATA.as_bytes()).unwrap();
        metadata.form_types[0].property_inputs[0].selector_property_inputs.remove(0);
        let output = product_properties(&metadata, 2).unwrap();

        assert_eq!(output.properties.len(), 1);
        assert!(output.properties.get(".properties.opsman").is_some());
    }

    #[test]
    fn compound_properties_use_child_placeholders() {
        let metadata = Metadata::parse(
            r#"
name: example-product
product_version: 1.1.1
property_blueprints:
  - name: ldap
    type: ldap_group
    configurable: true
    property_blueprints:
      - name: host
        type: string
        configurable: true
      - name: port
        type: port
        configurable: true
        default: 389
form_types:
  - name: config
    property_inputs:
      - reference: .properties.ldap
        property_inputs:
          - reference: host
          - reference: port
"#
            .as_bytes(),
        )
        .unwrap();
        let output = product_properties(&metadata, 2).unwrap();

        assert!(output.properties.get(".properties.ldap").is_none());
        assert_eq!(value_of(&output.properties, ".properties.ldap.host"), Value::from("((ldap/host))"));
        assert_eq!(value_of(&output.properties, ".properties.ldap.port"), Value::from("((ldap/port))"));
        assert_eq!(output.default_variables["ldap/port"], Value::from(389u64));

        let required = crate::domain::template::required_vars::required_variables(&metadata).unwrap();
        assert_eq!(required.keys().collect::<Vec<_>>(), vec!["ldap/host"]);
    }
}
