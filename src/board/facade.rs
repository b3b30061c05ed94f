use wasm_bindgen::prelude::*;

use crate::domain::color;
use crate::domain::direction::Direction;
use crate::error::EngineError;

use super::BoardCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Board {
    core: BoardCore,
}

#[wasm_bindgen]
impl Board {
    /// Create a new board with the given side length
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<Board, JsValue> {
        let core = BoardCore::new(size).map_err(to_js)?;
        Ok(Board { core })
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(size: u32, seed: u32) -> Result<Board, JsValue> {
        let core = BoardCore::with_seed(size, seed).map_err(to_js)?;
        Ok(Board { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.core.cell_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn shift_count(&self) -> u64 { self.core.shift_count() }

    /// Replace the board with a freshly colored size×size grid
    pub fn create(&mut self, size: u32) -> Result<(), JsValue> {
        self.core.create(size).map_err(to_js)
    }

    /// Rebuild the board; `hard` restores the default size first
    pub fn reset(&mut self, hard: bool) {
        self.core.reset(hard);
    }

    /// Scroll the color field one step in the direction given by its code
    /// (see `dir_up` and friends). Unknown codes are a no-op; returns
    /// whether a shift ran.
    pub fn shift(&mut self, direction: u8) -> bool {
        match Direction::from_code(direction) {
            Some(dir) => {
                self.core.shift(dir);
                true
            }
            None => false,
        }
    }

    /// Paint one cell with an "#RRGGBB" color (click-to-randomize when the
    /// cell already carries it)
    pub fn paint(&mut self, row: u32, col: u32, color: &str) -> Result<(), JsValue> {
        let packed = color::parse_hex(color)
            .ok_or_else(|| JsValue::from_str("color must be an RGB hex string like #A1B2C3"))?;
        self.core.paint(row, col, packed).map_err(to_js)
    }

    /// Live color of a cell as "#RRGGBB" (undefined out of bounds)
    #[wasm_bindgen(js_name = colorAt)]
    pub fn color_at(&self, row: u32, col: u32) -> Option<String> {
        self.core.color_hex(row, col)
    }

    /// Direction code of the last shift, -1 if none since the last reset
    /// (drives the frontend's cosmetic tilt transform)
    #[wasm_bindgen(js_name = lastShift)]
    pub fn last_shift(&self) -> i32 {
        self.core.last_shift().map(|d| d.code() as i32).unwrap_or(-1)
    }

    /// Reseed the RNG from the clock so each session gets its own colors
    #[wasm_bindgen(js_name = reseedFromTime)]
    pub fn reseed_from_time(&mut self) {
        #[cfg(target_arch = "wasm32")]
        let seed = js_sys::Date::now() as u32;
        #[cfg(not(target_arch = "wasm32"))]
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);

        self.core.set_seed(seed);
    }

    // === Rendering API ===

    /// Repack live colors into the ABGR frame buffer and return its pointer
    /// (for JS rendering via ImageData)
    pub fn render_frame(&mut self) -> *const u32 {
        self.core.render_frame()
    }

    pub fn frame_len_elements(&self) -> usize {
        self.core.frame_len_elements()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.core.frame_len_bytes()
    }

    /// Full grid state as JSON rows of `{row, column, color, active}`
    pub fn cells_json(&self) -> String {
        self.core.cells_json()
    }

    /// Active palette as a JSON array of "#RRGGBB" strings
    pub fn palette_json(&self) -> String {
        self.core.palette_json()
    }
}
