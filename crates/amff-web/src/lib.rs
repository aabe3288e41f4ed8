mod app;
mod components;
mod notify;

pub use app::App;
pub use notify::AlertNotifier;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
