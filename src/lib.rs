//! Mosaic Engine - toroidal color-grid core in WASM
//!
//! The engine owns the authoritative N×N color matrix and its snapshot;
//! the JS frontend only renders state and forwards user input.
//!
//! Architecture:
//! - domain/ - Colors, palette, directions
//! - grid/   - SoA storage (color planes, snapshot, active markers)
//! - board/  - Orchestration and the WASM facade

pub mod domain;
pub mod grid;
pub mod board;

pub mod error;

use wasm_bindgen::prelude::*;

// Re-export main types
pub use board::{Board, BoardCore, DEFAULT_SIZE};
pub use domain::direction::Direction;
pub use error::EngineError;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Mosaic WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default board side length (cells)
#[wasm_bindgen]
pub fn default_board_size() -> u32 {
    DEFAULT_SIZE
}

// Export direction codes for JS (the keyboard handler maps keys to these)
#[wasm_bindgen]
pub fn dir_up() -> u8 { domain::direction::DIR_UP }
#[wasm_bindgen]
pub fn dir_down() -> u8 { domain::direction::DIR_DOWN }
#[wasm_bindgen]
pub fn dir_left() -> u8 { domain::direction::DIR_LEFT }
#[wasm_bindgen]
pub fn dir_right() -> u8 { domain::direction::DIR_RIGHT }
