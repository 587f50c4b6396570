//! Platter Admin - Browser admin frontend
//!
//! This crate provides the browser-based admin UI for managing
//! restaurants and menu items against the Platter backend REST API.

mod app;
mod browser;
mod file_picker;
mod network;
mod ui;

use wasm_bindgen::prelude::*;

/// Entry point for WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging, filtered to keep the console readable
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );

    // Run the Bevy app
    app::run();
}
