//! Form Host
//!
//! Two panes: raw UI schema text on the left, the live form generated from
//! it on the right. All state lives in one [`FormSession`]; this component
//! only turns DOM events into session events.

use leptos::prelude::*;
use serde_json::Value;
use uiform_core::{CompiledField, FormSession, LogSink, SchemaType, SessionEvent};

use crate::api;
use crate::components::schema_form::SchemaForm;

#[component]
pub fn FormHost() -> impl IntoView {
    let session = RwSignal::new(FormSession::default());

    // Server-side session tunables; defaults stay in place if unreachable
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_session_options().await {
            Ok(options) => session.update(|s| s.set_options(options)),
            Err(e) => tracing::warn!("Using default session options: {}", e),
        }
    });

    let raw_text = Memo::new(move |_| session.with(|s| s.raw_text().to_string()));
    let compiled = Memo::new(move |_| session.with(|s| s.compiled().cloned()));
    let has_schema = Memo::new(move |_| compiled.with(Option::is_some));
    let form_data = Memo::new(move |_| session.with(|s| s.form_data().clone()));
    let submitted = Memo::new(move |_| session.with(FormSession::is_submitted));
    let parse_error = Memo::new(move |_| session.with(|s| s.last_error().map(|e| e.to_string())));

    let schema = Signal::derive(move || {
        compiled
            .get()
            .unwrap_or_else(|| CompiledField::new(SchemaType::Object))
    });

    let on_input = move |ev: leptos::web_sys::Event| {
        let text = event_target_value(&ev);
        session.update(|s| {
            s.apply(SessionEvent::RawSchemaTextChanged(text));
        });
    };

    let on_change = Callback::new(move |values: Value| {
        session.update(|s| {
            s.apply(SessionEvent::AnswerValuesChanged(values));
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        session.update(|s| s.submit_to(&LogSink));
    });

    view! {
        <div class="flex h-screen bg-gray-100">
            <div class="w-1/2 p-6 flex flex-col border-r border-gray-300">
                <h3 class="text-lg font-semibold mb-4">"UI SCHEMA"</h3>
                <textarea
                    class="flex-1 w-full px-3 py-2 border border-gray-300 rounded-lg font-mono text-sm"
                    placeholder="Paste UI Schema here..."
                    prop:value=move || raw_text.get()
                    on:input=on_input
                />
                {move || parse_error.get().map(|message| view! {
                    <p class="mt-2 text-sm text-red-600">{message}</p>
                })}
            </div>

            <div class="w-1/2 p-6 overflow-y-auto">
                <h3 class="text-lg font-semibold mb-4">"Generated Form"</h3>
                <Show when=move || submitted.get()>
                    <div class="mb-4 p-3 bg-green-100 text-green-800 rounded">"Form Submitted!"</div>
                </Show>
                <Show when=move || has_schema.get()>
                    <SchemaForm
                        schema=schema
                        form_data=form_data
                        on_change=on_change
                        on_submit=on_submit
                    />
                </Show>
            </div>
        </div>
    }
}
