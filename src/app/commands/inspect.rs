//! `inspect`: print one derived table without writing anything.

use serde::Serialize;

use crate::app::commands::load_metadata;
use crate::domain::AppError;
use crate::domain::template::{TemplateError, feature_ops_files, required_variables};
use crate::ports::MetadataProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectTarget {
    RequiredVars,
    Features,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct InspectOptions {
    pub target: InspectTarget,
    pub format: InspectFormat,
}

/// Render the requested table as text.
pub fn execute(provider: &impl MetadataProvider, options: InspectOptions) -> Result<String, AppError> {
    let metadata = load_metadata(provider)?;
    match options.target {
        InspectTarget::RequiredVars => {
            let variables =
                required_variables(&metadata).map_err(TemplateError::RequiredVariables)?;
            render(&variables, options.format, "required vars")
        }
        InspectTarget::Features => render(&feature_ops_files(&metadata)?, options.format, "feature ops"),
    }
}

fn render<T: Serialize>(value: &T, format: InspectFormat, what: &str) -> Result<String, AppError> {
    let rendered = match format {
        InspectFormat::Yaml => serde_yaml::to_string(value).map_err(|err| err.to_string()),
        InspectFormat::Json => serde_json::to_string_pretty(value).map_err(|err| err.to_string()),
    };
    rendered.map_err(|details| TemplateError::Render { what: what.to_string(), details }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMetadataProvider;

    const METADATA: &str = r#"
name: example-product
product_version: 1.1.1
property_blueprints:
  - name: hostname
    type: string
    configurable: true
  - name: mode
    type: selector
    configurable: true
    default: A
    option_templates:
      - name: a
        select_value: A
      - name: b
        select_value: B
form_types:
  - name: config
    property_inputs:
      - reference: .properties.hostname
      - reference: .properties.mode
        selector_property_inputs:
          - reference: .properties.mode.a
          - reference: .properties.mode.b
"#;

    #[test]
    fn required_vars_as_json() {
        let output = execute(
            &MockMetadataProvider::new(METADATA),
            InspectOptions { target: InspectTarget::RequiredVars, format: InspectFormat::Json },
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!({ "hostname": "" }));
    }

    #[test]
    fn features_as_yaml() {
        let output = execute(
            &MockMetadataProvider::new(METADATA),
            InspectOptions { target: InspectTarget::Features, format: InspectFormat::Yaml },
        )
        .unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        let ops = parsed["mode-b"].as_sequence().unwrap();
        assert_eq!(ops[0]["path"], serde_yaml::Value::from("/product-properties/.properties.mode?"));
        assert_eq!(ops[0]["value"]["selected_option"], serde_yaml::Value::from("b"));
    }

    #[test]
    fn malformed_metadata_is_reported() {
        let err = execute(
            &MockMetadataProvider::new("name: example-product\n"),
            InspectOptions { target: InspectTarget::Features, format: InspectFormat::Yaml },
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("malformed metadata:"));
    }
}
