//! UI schema to JSON Schema compiler
//!
//! Compilation is a single pure tree map. What each `uiType` produces is
//! described by one row of [`RULES`]; unknown kinds fall back to
//! [`FALLBACK_RULE`] and compile as plain strings.

use serde_json::Value;
use tracing::debug;

use crate::compiled::{CompiledField, Properties, SchemaType};
use crate::error::SchemaError;
use crate::ui_schema::{UiField, UiType};

// ============================================================================
// Rule Table
// ============================================================================

/// Which child list of a [`UiField`] becomes `properties`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildList {
    Conditions,
    SubParameters,
}

impl ChildList {
    fn of(self, field: &UiField) -> Option<&[UiField]> {
        match self {
            ChildList::Conditions => field.conditions.as_deref(),
            ChildList::SubParameters => field.sub_parameters.as_deref(),
        }
    }
}

/// Output shape of one `uiType`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiTypeRule {
    pub schema_type: SchemaType,
    /// `validate.options` become `enum`
    pub accepts_options: bool,
    pub children: Option<ChildList>,
}

impl UiTypeRule {
    const fn leaf(schema_type: SchemaType, accepts_options: bool) -> Self {
        Self {
            schema_type,
            accepts_options,
            children: None,
        }
    }

    const fn container(children: ChildList) -> Self {
        Self {
            schema_type: SchemaType::Object,
            accepts_options: false,
            children: Some(children),
        }
    }
}

pub const RULES: &[(&str, UiTypeRule)] = &[
    ("Input", UiTypeRule::leaf(SchemaType::String, false)),
    ("Select", UiTypeRule::leaf(SchemaType::String, true)),
    ("Radio", UiTypeRule::leaf(SchemaType::String, true)),
    ("Switch", UiTypeRule::leaf(SchemaType::Boolean, false)),
    ("Group", UiTypeRule::container(ChildList::SubParameters)),
    ("Ignore", UiTypeRule::container(ChildList::Conditions)),
];

pub const FALLBACK_RULE: UiTypeRule = UiTypeRule::leaf(SchemaType::String, false);

impl UiType {
    pub fn rule(&self) -> &'static UiTypeRule {
        if let UiType::Other(_) = self {
            return &FALLBACK_RULE;
        }
        RULES
            .iter()
            .find(|(name, _)| *name == self.as_str())
            .map(|(_, rule)| rule)
            .unwrap_or(&FALLBACK_RULE)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse raw UI schema text into fields
pub fn parse_ui_schema(text: &str) -> Result<Vec<UiField>, SchemaError> {
    let document: Value = serde_json::from_str(text)?;
    parse_ui_schema_value(document)
}

/// Read fields out of an already-parsed document (JSON or YAML sources)
pub fn parse_ui_schema_value(document: Value) -> Result<Vec<UiField>, SchemaError> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(SchemaError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| SchemaError::InvalidField {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile a UI schema into the root `{type: "object", properties}` document
pub fn compile(fields: &[UiField]) -> CompiledField {
    let mut root = CompiledField::new(SchemaType::Object);
    root.properties = Some(compile_properties(fields));
    root
}

/// Compile a single field and its children
pub fn compile_field(field: &UiField) -> CompiledField {
    let rule = field.ui_type.rule();

    let mut compiled = CompiledField::new(rule.schema_type);
    compiled.title = field.label.clone();
    compiled.description = field.description.clone();

    if let Some(validate) = &field.validate {
        // Only signal for "required", kept for every type
        if validate.required {
            compiled.min_length = Some(1);
        }

        if rule.accepts_options {
            if let Some(options) = &validate.options {
                compiled.enum_values =
                    Some(options.iter().map(|option| option.value.clone()).collect());
            }
        }
    }

    if let Some(children) = rule.children.and_then(|list| list.of(field)) {
        compiled.properties = Some(compile_properties(children));
    }

    compiled
}

fn compile_properties(fields: &[UiField]) -> Properties {
    let mut properties = Properties::new();
    for field in fields {
        properties.insert(field.json_key.clone(), compile_field(field));
    }
    properties
}

/// Parse and compile raw UI schema text in one step
pub fn compile_text(text: &str) -> Result<CompiledField, SchemaError> {
    let fields = parse_ui_schema(text)?;
    let schema = compile(&fields);
    debug!(fields = fields.len(), "Compiled UI schema");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_schema::UiOption;
    use serde_json::json;

    #[test]
    fn test_rule_table_covers_known_kinds() {
        for ui_type in [
            UiType::Input,
            UiType::Group,
            UiType::Radio,
            UiType::Ignore,
            UiType::Select,
            UiType::Switch,
        ] {
            assert!(
                RULES.iter().any(|(name, _)| *name == ui_type.as_str()),
                "no rule for {}",
                ui_type
            );
        }
    }

    #[test]
    fn test_other_named_like_a_rule_still_falls_back() {
        // Only reachable by constructing the variant directly
        let rule = UiType::Other("Switch".to_string()).rule();
        assert_eq!(*rule, FALLBACK_RULE);
    }

    #[test]
    fn test_group_ignores_conditions() {
        let field = UiField::new("g", UiType::Group)
            .with_conditions(vec![UiField::new("c", UiType::Input)]);
        assert!(compile_field(&field).properties.is_none());
    }

    #[test]
    fn test_ignore_ignores_sub_parameters() {
        let field = UiField::new("i", UiType::Ignore)
            .with_sub_parameters(vec![UiField::new("s", UiType::Input)]);
        assert!(compile_field(&field).properties.is_none());
    }

    #[test]
    fn test_input_options_do_not_produce_enum() {
        let field = UiField::new("f", UiType::Input).with_options(vec![UiOption::new("a", "A")]);
        assert!(compile_field(&field).enum_values.is_none());
    }

    #[test]
    fn test_required_on_switch_still_sets_min_length() {
        let field = UiField::new("agree", UiType::Switch).required();
        let compiled = compile_field(&field);
        assert_eq!(compiled.schema_type, SchemaType::Boolean);
        assert_eq!(compiled.min_length, Some(1));
    }

    #[test]
    fn test_empty_child_list_yields_empty_properties() {
        let field = UiField::new("g", UiType::Group).with_sub_parameters(vec![]);
        assert_eq!(
            serde_json::to_value(compile_field(&field)).unwrap(),
            json!({ "type": "object", "properties": {} })
        );
    }

    #[test]
    fn test_not_an_array_is_reported() {
        let err = parse_ui_schema(r#"{"jsonKey":"a"}"#).unwrap_err();
        assert_eq!(err, SchemaError::NotAnArray { found: "an object" });
    }

    #[test]
    fn test_element_without_json_key_is_reported_with_index() {
        let err = parse_ui_schema(r#"[{"jsonKey":"a"},{"uiType":"Input"}]"#).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { index: 1, .. }));
    }

    #[test]
    fn test_invalid_json_carries_position() {
        let err = parse_ui_schema("[\n  {").unwrap_err();
        match err {
            SchemaError::InvalidJson { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
