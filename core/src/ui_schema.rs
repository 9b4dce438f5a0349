//! UI schema vocabulary
//!
//! A UI schema is a JSON array of [`UiField`] objects written in camelCase
//! (`jsonKey`, `uiType`, `subParameters`). Every member except `jsonKey` is
//! optional; absent members simply switch the matching feature off.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Field Kind
// ============================================================================

/// Kind of a UI field. Unknown names are kept verbatim in [`UiType::Other`];
/// a `uiType` that is not a string at all lands there too, rendered as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum UiType {
    Input,
    Group,
    Radio,
    Ignore,
    Select,
    Switch,
    Other(String),
}

impl UiType {
    pub fn as_str(&self) -> &str {
        match self {
            UiType::Input => "Input",
            UiType::Group => "Group",
            UiType::Radio => "Radio",
            UiType::Ignore => "Ignore",
            UiType::Select => "Select",
            UiType::Switch => "Switch",
            UiType::Other(name) => name,
        }
    }
}

impl Default for UiType {
    fn default() -> Self {
        UiType::Other(String::new())
    }
}

impl From<String> for UiType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Input" => UiType::Input,
            "Group" => UiType::Group,
            "Radio" => UiType::Radio,
            "Ignore" => UiType::Ignore,
            "Select" => UiType::Select,
            "Switch" => UiType::Switch,
            _ => UiType::Other(name),
        }
    }
}

impl From<Value> for UiType {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => UiType::from(name),
            other => UiType::Other(other.to_string()),
        }
    }
}

impl From<&str> for UiType {
    fn from(name: &str) -> Self {
        UiType::from(name.to_string())
    }
}

impl From<UiType> for String {
    fn from(ui_type: UiType) -> Self {
        match ui_type {
            UiType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Validation Block
// ============================================================================

/// One choice of a `Select` or `Radio` field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiOption {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl UiOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

/// The `validate` block of a field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Validate {
    /// Read with JSON truthiness, so `1` or `"yes"` also count as required
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<UiOption>>,
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// JSON truthiness: `false`, `null`, `0`, `NaN` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// Field
// ============================================================================

/// A node of the UI schema tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiField {
    /// Property name in the compiled schema
    pub json_key: String,
    #[serde(default)]
    pub ui_type: UiType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validate>,
    /// Nested fields of an `Ignore` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<UiField>>,
    /// Nested fields of a `Group` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_parameters: Option<Vec<UiField>>,
}

impl UiField {
    pub fn new(json_key: impl Into<String>, ui_type: impl Into<UiType>) -> Self {
        Self {
            json_key: json_key.into(),
            ui_type: ui_type.into(),
            label: None,
            description: None,
            validate: None,
            conditions: None,
            sub_parameters: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.validate.get_or_insert_with(Validate::default).required = true;
        self
    }

    pub fn with_options(mut self, options: Vec<UiOption>) -> Self {
        self.validate.get_or_insert_with(Validate::default).options = Some(options);
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<UiField>) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn with_sub_parameters(mut self, sub_parameters: Vec<UiField>) -> Self {
        self.sub_parameters = Some(sub_parameters);
        self
    }
}
