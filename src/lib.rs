pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod hooks;
pub mod models;
pub mod motion;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("hydrating");
    leptos::mount::hydrate_body(App);
}
