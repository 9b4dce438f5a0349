//! Compiled schema document
//!
//! The JSON Schema subset handed to the form renderer. Optional members are
//! left out of the serialized JSON when absent, and `properties` keeps the
//! order in which fields were compiled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `type` of a compiled node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Boolean,
    Object,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
        }
    }
}

/// A node of the compiled schema tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompiledField {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl CompiledField {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            title: None,
            description: None,
            min_length: None,
            enum_values: None,
            properties: None,
        }
    }

    /// Look up a direct child by property name
    pub fn property(&self, name: &str) -> Option<&CompiledField> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Property map of an object node, in compile order.
///
/// `insert` on an existing key replaces its schema in place, so the key keeps
/// the position of its first occurrence.
pub type Properties = IndexMap<String, CompiledField>;
