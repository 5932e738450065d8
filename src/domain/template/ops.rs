//! Patch operations written to ops-files.

use serde::Serialize;
use serde_yaml::Value;

/// Operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpsType {
    /// Part of the ops-file vocabulary; generated files only use `replace`
    /// and `remove`.
    Add,
    Replace,
    Remove,
}

/// Operation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OpsValue {
    /// A bare string, e.g. one multi-select option appended to a list.
    Literal(String),
    /// A product property value wrapper: `{value: ...}`.
    Simple { value: String },
    /// A selector assignment: `{value, selected_option}`.
    Selection { value: String, selected_option: String },
    /// Any other document fragment.
    Structured(Value),
}

/// One JSON-Patch style operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ops {
    #[serde(rename = "type")]
    pub op_type: OpsType,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OpsValue>,
}

impl Ops {
    pub fn replace<S: Into<String>>(path: S, value: OpsValue) -> Self {
        Self { op_type: OpsType::Replace, path: path.into(), value: Some(value) }
    }

    pub fn remove<S: Into<String>>(path: S) -> Self {
        Self { op_type: OpsType::Remove, path: path.into(), value: None }
    }
}
