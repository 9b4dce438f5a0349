//! Scalar Field Renderers
//!
//! Inputs for the leaf kinds a compiled schema can contain: free text,
//! a choice from `enum`, and a boolean toggle.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;

use super::types::*;

/// Text shown for an enum choice
fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Text Input
// ============================================================================

#[component]
pub fn TextInput(id: String, path: PropertyPath, ctx: FormContext) -> impl IntoView {
    let read_path = path.clone();
    let current = move || {
        ctx.read(&read_path)
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default()
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        // An emptied input leaves the answer undefined
        let value = (!text.is_empty()).then_some(Value::String(text));
        ctx.write(&path, value);
    };

    view! {
        <input
            type="text"
            id=id
            class="form-control"
            prop:value=current
            on:input=on_input
        />
    }
}

// ============================================================================
// Enum Select
// ============================================================================

/// Dropdown over `enum` values. Options are addressed by index so non-string
/// values survive the round trip through the DOM.
#[component]
pub fn EnumSelect(id: String, path: PropertyPath, values: Vec<Value>, ctx: FormContext) -> impl IntoView {
    let read_path = path.clone();
    let lookup = values.clone();
    let selected = move || {
        ctx.read(&read_path)
            .and_then(|current| lookup.iter().position(|v| *v == current))
            .map(|idx| idx.to_string())
            .unwrap_or_default()
    };

    let choices = values.clone();
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev)
            .parse::<usize>()
            .ok()
            .and_then(|idx| choices.get(idx).cloned());
        ctx.write(&path, value);
    };

    view! {
        <select id=id class="form-control" prop:value=selected on:change=on_change>
            <option value="">""</option>
            {values
                .iter()
                .enumerate()
                .map(|(idx, value)| view! {
                    <option value=idx.to_string()>{option_text(value)}</option>
                })
                .collect_view()}
        </select>
    }
}

// ============================================================================
// Checkbox
// ============================================================================

#[component]
pub fn CheckboxInput(id: String, path: PropertyPath, label: String, ctx: FormContext) -> impl IntoView {
    let read_path = path.clone();
    let checked = move || {
        ctx.read(&read_path)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    };

    let on_change = move |ev: web_sys::Event| {
        ctx.write(&path, Some(Value::Bool(event_target_checked(&ev))));
    };

    let label_for = id.clone();
    view! {
        <div class="checkbox">
            <label for=label_for>
                <input type="checkbox" id=id prop:checked=checked on:change=on_change />
                <span>{label}</span>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_text() {
        assert_eq!(option_text(&json!("red")), "red");
        assert_eq!(option_text(&json!(3)), "3");
        assert_eq!(option_text(&json!(null)), "null");
    }
}
