pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);

    // cursor, tooltips and tabs act on the markup mounted above
    shared::page_interactions::web::install();
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
