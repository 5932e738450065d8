//! Product metadata schema model.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::domain::metadata::reference::last_segment;

/// Blueprint type.
///
/// Only the types the generator reasons about get their own variant; every
/// other type is carried verbatim and treated as an opaque leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Selector,
    MultiSelectOptions,
    Collection,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Selector => "selector",
            PropertyType::MultiSelectOptions => "multi_select_options",
            PropertyType::Collection => "collection",
            PropertyType::Other(name) => name,
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other(String::new())
    }
}

impl From<&str> for PropertyType {
    fn from(value: &str) -> Self {
        match value {
            "selector" => PropertyType::Selector,
            "multi_select_options" => PropertyType::MultiSelectOptions,
            "collection" => PropertyType::Collection,
            other => PropertyType::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(PropertyType::from).unwrap_or_default())
    }
}

/// Whether the operator may set a property.
///
/// Metadata writes this as a bool, as `"true"`/`"false"`, or as a templated
/// expression evaluated by the appliance; only `Yes` counts as configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Configurable {
    Yes,
    #[default]
    No,
    Expression(String),
}

impl<'de> Deserialize<'de> for Configurable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Configurable::No,
            Some(Raw::Flag(true)) => Configurable::Yes,
            Some(Raw::Flag(false)) => Configurable::No,
            Some(Raw::Text(text)) => match text.as_str() {
                "true" => Configurable::Yes,
                "false" | "" => Configurable::No,
                _ => Configurable::Expression(text),
            },
        })
    }
}

/// Declared default of a blueprint.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultValue {
    #[default]
    Absent,
    Scalar(Value),
    List(Vec<Value>),
}

impl DefaultValue {
    /// A default that leaves nothing usable: absent, empty string or empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            DefaultValue::Absent => true,
            DefaultValue::Scalar(Value::String(text)) => text.is_empty(),
            DefaultValue::Scalar(_) => false,
            DefaultValue::List(items) => items.is_empty(),
        }
    }

    /// Scalar default rendered as text, used to match selector options.
    pub fn as_text(&self) -> Option<String> {
        match self {
            DefaultValue::Scalar(Value::String(text)) => Some(text.clone()),
            DefaultValue::Scalar(Value::Number(number)) => Some(number.to_string()),
            DefaultValue::Scalar(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// The default as a document value; `None` when absent.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            DefaultValue::Absent => None,
            DefaultValue::Scalar(value) => Some(value.clone()),
            DefaultValue::List(items) => Some(Value::Sequence(items.clone())),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Scalar(Value::String(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => DefaultValue::Absent,
            Some(Value::Sequence(items)) => DefaultValue::List(items),
            Some(other) => DefaultValue::Scalar(other),
        })
    }
}

/// A configurable property definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyBlueprint {
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
    #[serde(default, deserialize_with = "nullable")]
    pub optional: bool,
    #[serde(default)]
    pub configurable: Configurable,
    #[serde(default)]
    pub default: DefaultValue,
    #[serde(default, deserialize_with = "nullable")]
    pub options: Vec<MultiSelectOption>,
    #[serde(default, deserialize_with = "nullable")]
    pub option_templates: Vec<OptionTemplate>,
    #[serde(default, deserialize_with = "nullable")]
    pub property_blueprints: Vec<PropertyBlueprint>,
}

impl PropertyBlueprint {
    pub fn is_configurable(&self) -> bool {
        self.configurable == Configurable::Yes
    }

    /// Configurable, not optional, and without a usable default.
    pub fn is_required(&self) -> bool {
        self.is_configurable() && !self.optional && self.default.is_empty()
    }

    pub fn is_selector(&self) -> bool {
        self.property_type == PropertyType::Selector
    }

    pub fn is_multi_select(&self) -> bool {
        self.property_type == PropertyType::MultiSelectOptions
    }

    pub fn is_collection(&self) -> bool {
        self.property_type == PropertyType::Collection
    }

    pub fn child(&self, name: &str) -> Option<&PropertyBlueprint> {
        find_blueprint(&self.property_blueprints, name)
    }

    pub fn option_template(&self, name: &str) -> Option<&OptionTemplate> {
        self.option_templates.iter().find(|option| option.name == name)
    }

    /// Option template selected when the operator makes no choice.
    ///
    /// The scalar default is matched against each option's select value,
    /// then against option names.
    pub fn default_option(&self) -> Option<&OptionTemplate> {
        let default = self.default.as_text()?;
        self.option_templates
            .iter()
            .find(|option| option.select_value == default)
            .or_else(|| self.option_template(&default))
    }
}

/// A named value of a multi-select property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MultiSelectOption {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
}

/// One alternative of a selector, with its own nested properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptionTemplate {
    pub name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub select_value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_blueprints: Vec<PropertyBlueprint>,
}

/// A group of property inputs presented together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormType {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_inputs: Vec<PropertyInput>,
}

/// Exposure of a blueprint to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyInput {
    pub reference: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_inputs: Vec<PropertyInput>,
    #[serde(default, deserialize_with = "nullable")]
    pub selector_property_inputs: Vec<SelectorPropertyInput>,
}

impl PropertyInput {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self { reference: reference.into(), ..Self::default() }
    }

    /// Name of the blueprint this input exposes.
    pub fn name(&self) -> &str {
        last_segment(&self.reference)
    }
}

/// Exposure of one selector option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SelectorPropertyInput {
    pub reference: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_inputs: Vec<PropertyInput>,
}

impl SelectorPropertyInput {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self { reference: reference.into(), ..Self::default() }
    }

    /// Name of the option template this input exposes.
    pub fn name(&self) -> &str {
        last_segment(&self.reference)
    }
}

/// A deployable job with its own properties and resource settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobType {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_blueprints: Vec<PropertyBlueprint>,
    #[serde(default)]
    pub instance_definition: Option<InstanceDefinition>,
    #[serde(default, deserialize_with = "nullable")]
    pub resource_definitions: Vec<ResourceDefinition>,
}

impl JobType {
    pub fn has_configurable_instances(&self) -> bool {
        self.instance_definition.as_ref().is_some_and(|definition| definition.configurable)
    }

    pub fn has_persistent_disk(&self) -> bool {
        self.resource_definitions
            .iter()
            .any(|definition| definition.name == "persistent_disk" && definition.configurable)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstanceDefinition {
    #[serde(default, deserialize_with = "nullable")]
    pub configurable: bool,
    #[serde(default)]
    pub default: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceDefinition {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub configurable: bool,
    #[serde(default)]
    pub default: Option<Value>,
}

/// An errand run after deploy or before delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Errand {
    pub name: String,
}

pub(crate) fn find_blueprint<'a>(
    blueprints: &'a [PropertyBlueprint],
    name: &str,
) -> Option<&'a PropertyBlueprint> {
    blueprints.iter().find(|blueprint| blueprint.name == name)
}

/// Treat an explicit YAML `null` like a missing key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept strings, numbers and bools where metadata means a plain name.
pub(crate) fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        Some(other) => {
            Err(serde::de::Error::custom(format!("expected a scalar value, found {other:?}")))
        }
    }
}
