//! Atelier Viewer - Interactive 3D art gallery
//!
//! Walk an avatar around a small gallery, click a painting to have the avatar
//! stroll over and study it, then browse the collection from the detail panel.
//! Runs in the browser through WASM or natively through the `atelier` binary.

pub mod app;
mod ui;

pub use ui::apply_panel_action;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging with filtering to reduce wgpu noise
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::WARN)
            .build(),
    );

    // The browser build always shows the bundled collection
    match app::load_gallery(None, None) {
        Ok(gallery) => app::run(gallery),
        Err(err) => tracing::error!("{err:#}"),
    }
}
