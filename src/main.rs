//! EpicList List Editor Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod editor;
mod error;
mod logging;
mod models;
mod store;

use app::App;
use config::EditorConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element the server-rendered page reserves for the editor
const MOUNT_ID: &str = "list-editor";

fn main() {
    console_error_panic_hook::set_once();

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    let config = EditorConfig::load(mount.as_ref());
    logging::init(config.log_level());
    log::info!(target: "app", "starting list editor (edit list: {:?})", config.edit_list_id);

    match mount {
        Some(el) => leptos::mount::mount_to(el, move || view! { <App config=config /> }).forget(),
        None => {
            log::warn!(target: "app", "#{} not found, mounting to body", MOUNT_ID);
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}
