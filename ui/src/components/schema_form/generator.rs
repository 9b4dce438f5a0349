//! Schema Form Component
//!
//! Renders a compiled schema as an editable form. Every answer change is
//! reported through `on_change` with the whole answer tree; submit runs the
//! schema's validation first and only reaches `on_submit` when it passes.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use serde_json::Value;
use uiform_core::{validate_value, CompiledField, SchemaType};

use super::fields::*;
use super::types::*;

// ============================================================================
// Main Component
// ============================================================================

#[component]
pub fn SchemaForm(
    /// Compiled schema to render
    #[prop(into)]
    schema: Signal<CompiledField>,
    /// Current answers
    #[prop(into)]
    form_data: Signal<Value>,
    /// Receives the full answer tree after every edit
    on_change: Callback<Value>,
    /// Called once the answers pass validation
    on_submit: Callback<()>,
    /// Presentation overrides
    #[prop(optional)]
    templates: FormTemplates,
) -> impl IntoView {
    let errors = RwSignal::new(Vec::new());
    let ctx = FormContext {
        form_data,
        on_change,
        errors,
        templates,
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let found = schema.with_untracked(|schema| {
            form_data.with_untracked(|data| validate_value(schema, data))
        });
        let passed = found.is_empty();
        errors.set(found);
        if passed {
            on_submit.run(());
        }
    };

    // Only the schema rebuilds the tree; inputs track answers on their own
    let body = move || schema.with(|schema| render_object(schema, &PropertyPath::root(), ctx));

    view! {
        <form class="schema-form" novalidate=true on:submit=handle_submit>
            {body}
            <div class="form-actions">
                <button type="submit" class="btn btn-info">"Submit"</button>
            </div>
        </form>
    }
}

// ============================================================================
// Tree Rendering
// ============================================================================

fn render_object(schema: &CompiledField, path: &PropertyPath, ctx: FormContext) -> AnyView {
    let properties = schema
        .properties
        .iter()
        .flat_map(|props| props.iter())
        .map(|(name, child)| render_field(name, child, &path.push_property(name), ctx))
        .collect();

    // The root title is the form's own heading, not a section legend
    let title = if path.is_root() { None } else { schema.title.clone() };

    ctx.templates.object.run(ObjectTemplateProps {
        title,
        description: schema.description.clone(),
        properties,
    })
}

fn render_field(name: &str, schema: &CompiledField, path: &PropertyPath, ctx: FormContext) -> AnyView {
    if schema.schema_type == SchemaType::Object {
        return render_object(schema, path, ctx);
    }

    let id = path.to_id();
    let label = schema.title.clone().unwrap_or_else(|| name.to_string());

    let (children, display_label) = match (&schema.schema_type, &schema.enum_values) {
        (SchemaType::Boolean, _) => (
            view! {
                <CheckboxInput id=id.clone() path=path.clone() label=label.clone() ctx=ctx />
            }
            .into_any(),
            false,
        ),
        (_, Some(values)) => (
            view! {
                <EnumSelect id=id.clone() path=path.clone() values=values.clone() ctx=ctx />
            }
            .into_any(),
            true,
        ),
        _ => (
            view! { <TextInput id=id.clone() path=path.clone() ctx=ctx /> }.into_any(),
            true,
        ),
    };

    ctx.templates.field.run(FieldTemplateProps {
        id,
        label,
        description: schema.description.clone(),
        display_label,
        required: schema.min_length.is_some(),
        children,
        errors: ctx.errors_for(path),
        help: None,
    })
}
