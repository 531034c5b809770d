mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match document().get_element_by_id("app") {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => {
            tracing::error!("#app element missing, mounting to body");
            mount_to_body(App);
        }
    }
}
