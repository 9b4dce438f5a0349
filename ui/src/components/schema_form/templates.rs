//! Default field and object templates

use leptos::prelude::*;

use super::types::{FieldTemplateProps, ObjectTemplateProps};

/// Label row with an info marker, the input, the description, errors, help
pub fn default_field_template(props: FieldTemplateProps) -> AnyView {
    let FieldTemplateProps {
        id,
        label,
        description,
        display_label,
        required,
        children,
        errors,
        help,
    } = props;

    let info_icon = description.clone().map(|desc| {
        view! { <span class="info-icon" title=desc>"\u{24D8}"</span> }
    });

    view! {
        <div class="form-group field">
            <div style="display: flex; align-items: center; gap: 4px;">
                {display_label.then(|| view! {
                    <label for=id>
                        {label}
                        {required.then(|| view! { <span class="required">"*"</span> })}
                    </label>
                })}
                {info_icon}
            </div>
            {children}
            {description.map(|desc| view! { <div class="field-description">{desc}</div> })}
            {move || {
                let messages = errors.get();
                (!messages.is_empty()).then(|| view! {
                    <ul class="error-detail">
                        {messages
                            .into_iter()
                            .map(|message| view! { <li class="text-danger">{message}</li> })
                            .collect_view()}
                    </ul>
                })
            }}
            {help.map(|text| view! { <div class="help-block">{text}</div> })}
        </div>
    }
    .into_any()
}

/// Children stacked vertically with fixed spacing, under a legend when the
/// object is a titled group
pub fn default_object_template(props: ObjectTemplateProps) -> AnyView {
    let ObjectTemplateProps {
        title,
        description,
        properties,
    } = props;

    view! {
        <fieldset class="object-field">
            {title.map(|title| view! { <legend>{title}</legend> })}
            {description.map(|desc| view! { <p class="field-description">{desc}</p> })}
            {properties
                .into_iter()
                .map(|content| view! { <div style="margin-bottom: 15px;">{content}</div> })
                .collect_view()}
        </fieldset>
    }
    .into_any()
}
