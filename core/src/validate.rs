//! Answer validation against a compiled schema
//!
//! Covers the keywords the compiler emits: `type`, `minLength`, `enum` and
//! nested `properties`. Errors carry a dotted path such as `address.city`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::compiled::{CompiledField, SchemaType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    Type,
    MinLength,
    Enum,
}

/// One failed check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub code: ValidationCode,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate `data` against `schema`, collecting every error
pub fn validate_value(schema: &CompiledField, data: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_properties(schema, data, "", &mut errors);
    errors
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn validate_properties(
    schema: &CompiledField,
    data: &Value,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(properties) = &schema.properties else {
        return;
    };
    for (name, child) in properties.iter() {
        let child_path = join_path(path, name);
        validate_node(child, data.get(name.as_str()), &child_path, errors);
    }
}

fn validate_node(
    schema: &CompiledField,
    value: Option<&Value>,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    let value = value.filter(|v| !v.is_null());

    match schema.schema_type {
        SchemaType::String => match value {
            // Keywords only constrain values that are present
            None => {}
            Some(Value::String(text)) => {
                if let Some(min) = schema.min_length {
                    if (text.chars().count() as u64) < min {
                        errors.push(ValidationError {
                            path: path.to_string(),
                            message: format!("must NOT have fewer than {} characters", min),
                            code: ValidationCode::MinLength,
                        });
                    }
                }
            }
            Some(_) => {
                errors.push(type_error(path, schema.schema_type));
                return;
            }
        },
        SchemaType::Boolean => {
            if value.is_some_and(|v| !v.is_boolean()) {
                errors.push(type_error(path, schema.schema_type));
                return;
            }
        }
        SchemaType::Object => {
            match value {
                Some(v) if !v.is_object() => errors.push(type_error(path, schema.schema_type)),
                Some(v) => validate_properties(schema, v, path, errors),
                None => {}
            }
            return;
        }
    }

    if let (Some(allowed), Some(v)) = (&schema.enum_values, value) {
        if !allowed.contains(v) {
            errors.push(ValidationError {
                path: path.to_string(),
                message: "must be equal to one of the allowed values".to_string(),
                code: ValidationCode::Enum,
            });
        }
    }
}

fn type_error(path: &str, expected: SchemaType) -> ValidationError {
    ValidationError {
        path: path.to_string(),
        message: format!("must be {}", expected.as_str()),
        code: ValidationCode::Type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_text;
    use serde_json::json;

    fn schema() -> CompiledField {
        compile_text(
            r#"[
                {"jsonKey":"name","uiType":"Input","label":"Name","validate":{"required":true}},
                {"jsonKey":"color","uiType":"Select","validate":{"options":[{"value":"red"},{"value":"blue"}]}},
                {"jsonKey":"agree","uiType":"Switch","validate":{"required":true}},
                {"jsonKey":"address","uiType":"Group","subParameters":[
                    {"jsonKey":"city","uiType":"Input","validate":{"required":true}}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_answers_pass() {
        let data = json!({
            "name": "Ada",
            "color": "red",
            "agree": false,
            "address": { "city": "London" }
        });
        assert!(validate_value(&schema(), &data).is_empty());
    }

    #[test]
    fn test_missing_answers_are_not_checked() {
        // minLength constrains strings only; an untouched form validates
        assert!(validate_value(&schema(), &json!({})).is_empty());
        assert!(validate_value(&schema(), &json!({ "address": {} })).is_empty());
        assert!(validate_value(&schema(), &json!({ "name": null })).is_empty());
    }

    #[test]
    fn test_nested_empty_string_fails_min_length() {
        let errors = validate_value(&schema(), &json!({ "address": { "city": "" } }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "address.city");
        assert_eq!(errors[0].code, ValidationCode::MinLength);
    }

    #[test]
    fn test_empty_string_fails_min_length() {
        let errors = validate_value(&schema(), &json!({ "name": "", "address": { "city": "x" } }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
    }

    #[test]
    fn test_min_length_on_boolean_is_ignored() {
        let errors = validate_value(
            &schema(),
            &json!({ "name": "a", "address": { "city": "b" } }),
        );
        assert!(errors.iter().all(|e| e.path != "agree"));
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let errors = validate_value(
            &schema(),
            &json!({ "name": "a", "color": "green", "address": { "city": "b" } }),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ValidationCode::Enum);
        assert_eq!(errors[0].path, "color");
    }

    #[test]
    fn test_type_mismatches_are_reported() {
        let errors = validate_value(
            &schema(),
            &json!({ "name": 5, "agree": "yes", "address": "nowhere" }),
        );
        let codes: Vec<_> = errors.iter().map(|e| (e.path.as_str(), e.code)).collect();
        assert_eq!(
            codes,
            vec![
                ("name", ValidationCode::Type),
                ("agree", ValidationCode::Type),
                ("address", ValidationCode::Type),
            ]
        );
    }

    #[test]
    fn test_error_display_includes_path() {
        let errors = validate_value(&schema(), &json!({ "name": "" }));
        assert_eq!(errors[0].to_string(), "name: must NOT have fewer than 1 characters");
    }
}
