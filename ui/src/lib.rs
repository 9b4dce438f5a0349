use leptos::prelude::*;

mod api;
mod components;

use components::form_host::FormHost;

#[component]
pub fn App() -> impl IntoView {
    view! { <FormHost /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Core diagnostics arrive through tracing's `log` bridge
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
