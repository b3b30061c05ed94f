//! Board - orchestration of the color grid
//!
//! Refactored from the usual "globals at module scope" toy layout:
//! - Single Responsibility: BoardCore only orchestrates, delegates to
//!   commands/shift/render submodules
//! - All mutation is routed through BoardCore methods; the WASM facade in
//!   facade.rs is the thin wrapper the frontend talks to
//!
//! Shift arithmetic is in shift/, create/reset/paint in commands/,
//! frontend export in render/.

use crate::domain::color::PackedColor;
use crate::domain::direction::Direction;
use crate::domain::palette::Palette;
use crate::error::EngineError;
use crate::grid::Grid;

#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "commands/commands.rs"]
mod commands;
#[path = "shift/shift.rs"]
mod shift;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Board;

/// Default board side length (cells), restored by a hard reset.
pub const DEFAULT_SIZE: u32 = 50;

/// Default xorshift seed (any nonzero value works).
const DEFAULT_SEED: u32 = 12345;

struct RenderBuffers {
    /// ABGR pixels for direct Canvas ImageData copy, one per cell.
    frame_buffer: Vec<u32>,
}

/// The color board
pub struct BoardCore {
    grid: Grid,
    palette: Palette,

    // Settings
    default_size: u32,

    // State
    shift_count: u64,
    last_shift: Option<Direction>,
    rng_state: u32,

    render: RenderBuffers,
}

impl BoardCore {
    /// Create a new board with the given side length.
    pub fn new(size: u32) -> Result<Self, EngineError> {
        init::create_board_core(size, DEFAULT_SEED)
    }

    /// Create a new board with an explicit RNG seed (deterministic colors).
    pub fn with_seed(size: u32, seed: u32) -> Result<Self, EngineError> {
        init::create_board_core(size, seed)
    }

    pub fn size(&self) -> u32 { self.grid.size() }

    pub fn cell_count(&self) -> usize { self.grid.len() }

    /// Completed shifts since the last create/reset.
    pub fn shift_count(&self) -> u64 { self.shift_count }

    /// Direction of the last shift, if any (drives the frontend's cosmetic
    /// tilt; carries no engine state).
    pub fn last_shift(&self) -> Option<Direction> { self.last_shift }

    pub fn set_seed(&mut self, seed: u32) {
        self.rng_state = if seed == 0 { DEFAULT_SEED } else { seed };
    }

    /// Replace the board with a freshly colored size×size grid.
    pub fn create(&mut self, size: u32) -> Result<(), EngineError> {
        commands::create(self, size)
    }

    /// Rebuild the board. Hard resets restore the default size first,
    /// soft resets keep the current size.
    pub fn reset(&mut self, hard: bool) {
        commands::reset(self, hard)
    }

    /// Recolor a single cell (click-to-paint, with click-to-randomize when
    /// the cell already carries the color).
    pub fn paint(&mut self, row: u32, col: u32, color: PackedColor) -> Result<(), EngineError> {
        commands::paint(self, row, col, color)
    }

    /// Scroll the whole color field one step, wrapping at the edges.
    pub fn shift(&mut self, direction: Direction) {
        shift::shift(self, direction)
    }

    // === Read surface ===

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Live color of a cell as "#RRGGBB", `None` out of bounds.
    pub fn color_hex(&self, row: u32, col: u32) -> Option<String> {
        self.grid
            .in_bounds(row, col)
            .then(|| crate::domain::color::to_hex(self.grid.color(row, col)))
    }

    /// Snapshot color of a cell as "#RRGGBB", `None` out of bounds.
    pub fn snapshot_hex(&self, row: u32, col: u32) -> Option<String> {
        self.grid
            .in_bounds(row, col)
            .then(|| crate::domain::color::to_hex(self.grid.snapshot_color(row, col)))
    }

    // === Frontend export ===

    /// Repack the live colors into the ABGR frame buffer and return its
    /// pointer (for JS rendering).
    pub fn render_frame(&mut self) -> *const u32 {
        render_extract::render_frame(self)
    }

    pub fn frame_len_elements(&self) -> usize {
        self.render.frame_buffer.len()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.render.frame_buffer.len() * std::mem::size_of::<u32>()
    }

    /// Full grid state as JSON rows of `{row, column, color, active}`.
    pub fn cells_json(&self) -> String {
        render_extract::cells_json(self)
    }

    /// Active palette as a JSON array of "#RRGGBB" strings.
    pub fn palette_json(&self) -> String {
        render_extract::palette_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
