//! Crossword Viewer WASM Module
//!
//! Fetches a generated crossword from an external service and renders an
//! interactive grid with Across/Down clue lists. Hovering a numbered cell
//! highlights its word; clicking a cell where two words start switches
//! between them.

pub mod models;
pub mod loader;
pub mod html_layout;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use api::{mount, mount_static, CrosswordApp, MountOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Failed to initialize console_log: {}", e).into());
    }

    log::info!("Crossword viewer WASM module initialized");
}
