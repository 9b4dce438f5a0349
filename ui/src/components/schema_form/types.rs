//! Core types for the schema-driven form renderer

use leptos::prelude::*;
use serde_json::{Map, Value};
use std::fmt;
use uiform_core::ValidationError;

use super::templates::{default_field_template, default_object_template};

// ============================================================================
// Property Path
// ============================================================================

/// Path to a field inside the answer tree (e.g., "address.city")
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Create a root path (empty)
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Push a property segment
    pub fn push_property(&self, name: &str) -> Self {
        let mut new = self.clone();
        new.segments.push(name.to_string());
        new
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// DOM id for the field's input: "root_address_city"
    pub fn to_id(&self) -> String {
        std::iter::once("root")
            .chain(self.segments())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for PropertyPath {
    /// Dot notation, matching the paths carried by validation errors
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

// ============================================================================
// Answer Tree Access
// ============================================================================

/// Read the value at `path`
pub fn value_at<'a>(data: &'a Value, path: &PropertyPath) -> Option<&'a Value> {
    path.segments().try_fold(data, |node, segment| node.get(segment))
}

/// Write `value` at `path`, creating intermediate objects. `None` removes the
/// key, which is how an emptied input is reported.
pub fn set_value_at(data: &mut Value, path: &PropertyPath, value: Option<Value>) {
    let Some((last, parents)) = path.segments.split_last() else {
        if let Some(value) = value {
            *data = value;
        }
        return;
    };

    let mut node = data;
    for segment in parents {
        node = ensure_object(node)
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let object = ensure_object(node);
    match value {
        Some(value) => {
            object.insert(last.clone(), value);
        }
        None => {
            object.remove(last);
        }
    }
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced with an object"),
    }
}

// ============================================================================
// Template Override Points
// ============================================================================

/// Everything a field wrapper needs to lay out one field
pub struct FieldTemplateProps {
    /// DOM id of the rendered input
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    /// False for widgets that render their own label (checkboxes)
    pub display_label: bool,
    pub required: bool,
    /// The rendered input
    pub children: AnyView,
    pub errors: Signal<Vec<String>>,
    pub help: Option<String>,
}

pub struct ObjectTemplateProps {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Children in schema order, each already rendered
    pub properties: Vec<AnyView>,
}

/// Presentation hooks accepted by [`super::SchemaForm`]. Swapping either
/// callback changes layout only; values and validation are unaffected.
#[derive(Clone, Copy)]
pub struct FormTemplates {
    pub field: Callback<FieldTemplateProps, AnyView>,
    pub object: Callback<ObjectTemplateProps, AnyView>,
}

impl Default for FormTemplates {
    fn default() -> Self {
        Self {
            field: Callback::new(default_field_template),
            object: Callback::new(default_object_template),
        }
    }
}

// ============================================================================
// Form Context
// ============================================================================

/// Shared handles every rendered field needs
#[derive(Clone, Copy)]
pub struct FormContext {
    pub form_data: Signal<Value>,
    pub on_change: Callback<Value>,
    pub errors: RwSignal<Vec<ValidationError>>,
    pub templates: FormTemplates,
}

impl FormContext {
    /// Tracked read of the value at `path`
    pub fn read(&self, path: &PropertyPath) -> Option<Value> {
        self.form_data.with(|data| value_at(data, path).cloned())
    }

    /// Report a new answer tree with `path` updated
    pub fn write(&self, path: &PropertyPath, value: Option<Value>) {
        let mut next = self.form_data.get_untracked();
        set_value_at(&mut next, path, value);
        self.on_change.run(next);
    }

    /// Messages of the last validation run that belong to `path`
    pub fn errors_for(&self, path: &PropertyPath) -> Signal<Vec<String>> {
        let errors = self.errors;
        let key = path.to_string();
        Signal::derive(move || {
            errors.with(|all| {
                all.iter()
                    .filter(|e| e.path == key)
                    .map(|e| e.message.clone())
                    .collect()
            })
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_path_building() {
        let path = PropertyPath::root()
            .push_property("address")
            .push_property("city");

        assert_eq!(path.to_string(), "address.city");
        assert_eq!(path.to_id(), "root_address_city");
        assert!(!path.is_root());
        assert!(PropertyPath::root().is_root());
    }

    fn path(dotted: &str) -> PropertyPath {
        dotted
            .split('.')
            .fold(PropertyPath::root(), |path, name| path.push_property(name))
    }

    #[test]
    fn test_value_at_nested() {
        let data = json!({ "address": { "city": "Oslo" } });
        let city = path("address.city");
        assert_eq!(value_at(&data, &city), Some(&json!("Oslo")));
        assert_eq!(value_at(&data, &path("address.zip")), None);
    }

    #[test]
    fn test_set_value_creates_intermediate_objects() {
        let mut data = json!({});
        set_value_at(&mut data, &path("a.b"), Some(json!(true)));
        assert_eq!(data, json!({ "a": { "b": true } }));
    }

    #[test]
    fn test_set_value_replaces_non_object_parent() {
        let mut data = json!({ "a": "text" });
        set_value_at(&mut data, &path("a.b"), Some(json!("x")));
        assert_eq!(data, json!({ "a": { "b": "x" } }));
    }

    #[test]
    fn test_set_none_removes_key() {
        let mut data = json!({ "name": "Ada", "age": "36" });
        set_value_at(&mut data, &path("name"), None);
        assert_eq!(data, json!({ "age": "36" }));
    }
}
