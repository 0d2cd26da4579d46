//! `billcraft-web` — browser-based invoice editor.
//!
//! Leptos CSR frontend over the `billcraft-ledger` document model: renders
//! the editable invoice, keeps every field bound to the ledger with
//! controlled two-way binding, and exports the rendered view as a PDF
//! through the external `html2pdf` rendering service loaded by
//! `index.html`.

pub mod app;
pub mod export;
pub mod upload;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point; called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Console error panic hook for readable panic messages in the browser.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
